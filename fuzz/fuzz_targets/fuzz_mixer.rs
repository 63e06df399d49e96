#![no_main]

use chanmix::{ChannelLayout, ChannelMixer, StreamParams};
use libfuzzer_sys::fuzz_target;

fn layout(byte: u8) -> ChannelLayout {
    ChannelLayout::ALL[usize::from(byte) % ChannelLayout::ALL.len()]
}

fn params(layout: ChannelLayout, byte: u8) -> StreamParams {
    let channels = if layout == ChannelLayout::Unsupported {
        1 + usize::from(byte) % 10
    } else {
        layout.channel_count()
    };
    StreamParams::float(48000, layout).with_channels(channels)
}

fuzz_target!(|data: &[u8]| {
    let [from, to, from_channels, to_channels, rest @ ..] = data else {
        return;
    };
    let stream = params(layout(*from), *from_channels);
    let target = params(layout(*to), *to_channels);

    let samples: Vec<f32> = rest
        .chunks_exact(4)
        .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .collect();
    let aligned = samples.len() / stream.channels * stream.channels;

    if let Ok(mixer) = ChannelMixer::new(stream, target) {
        let (output, report) = mixer
            .process_to_vec(&samples[..aligned])
            .expect("aligned input must mix");
        assert_eq!(output.len(), report.frames * target.channels);
    }
});
