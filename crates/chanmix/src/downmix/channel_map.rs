//! Role-based channel remapping between two layouts.

use crate::buffer::frame_pairs;
use crate::layout::ChannelLayout;
use crate::sample::Sample;

/// Copies each output channel from the input channel with the same role.
///
/// Output roles missing from the input are written as silence. Returns false
/// without touching `output` when the layouts share no role at all.
pub fn map_channels<T: Sample>(
    input: &[T],
    frames: usize,
    output: &mut [T],
    in_layout: ChannelLayout,
    out_layout: ChannelLayout,
) -> bool {
    debug_assert_ne!(in_layout, out_layout);

    if !in_layout.mask().intersects(out_layout.mask()) {
        return false;
    }

    let in_channels = in_layout.channel_count();
    let out_channels = out_layout.channel_count();

    // Resolve every output position once; the per-frame loop is pure copying.
    let mut sources = [None; crate::channel::Channel::COUNT];
    for (source, &channel) in sources.iter_mut().zip(out_layout.channels()) {
        *source = in_layout.index_of(channel);
    }

    for (in_frame, out_frame) in frame_pairs(input, in_channels, output, out_channels, frames) {
        for (out_sample, source) in out_frame.iter_mut().zip(&sources) {
            *out_sample = match *source {
                Some(index) => in_frame[index],
                None => T::SILENCE,
            };
        }
    }

    true
}
