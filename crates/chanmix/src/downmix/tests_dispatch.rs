//! Tests for downmix strategy selection.

use pretty_assertions::assert_eq;

use super::*;

fn run(
    input: &[f32],
    in_channels: usize,
    out_channels: usize,
    in_layout: ChannelLayout,
    out_layout: ChannelLayout,
) -> (Vec<f32>, DownmixMethod) {
    let frames = input.len() / in_channels;
    let mut output = vec![f32::NAN; frames * out_channels];
    let method = downmix_float(
        input,
        frames,
        &mut output,
        in_channels,
        out_channels,
        in_layout,
        out_layout,
    );
    (output, method)
}

#[test]
fn test_5_1_to_stereo_uses_matrix() {
    let input = [2.0f32, 3.0, 4.0, 10.0, 5.0, 6.0];
    let (_, method) = run(
        &input,
        6,
        2,
        ChannelLayout::ThreeF2Lfe,
        ChannelLayout::Stereo,
    );
    assert_eq!(method, DownmixMethod::Matrix);
}

#[test]
fn test_5_0_to_2f2_lfe_keeps_channel_count() {
    let input = [2.0f32, 3.0, 4.0, 5.0, 6.0];
    let (output, method) = run(
        &input,
        5,
        5,
        ChannelLayout::ThreeF2,
        ChannelLayout::TwoF2Lfe,
    );
    assert_eq!(method, DownmixMethod::Matrix);
    assert_eq!(output[2], 0.0);
    assert_eq!(&output[3..], &[5.0, 6.0]);
}

#[test]
fn test_shared_roles_use_channel_map() {
    let input = [2.0f32, 3.0, 4.0, 10.0, 8.0, 5.0, 6.0];
    let (output, method) = run(
        &input,
        7,
        4,
        ChannelLayout::ThreeF3RLfe,
        ChannelLayout::ThreeF1,
    );
    assert_eq!(method, DownmixMethod::ChannelMap);
    assert_eq!(output, vec![2.0, 3.0, 4.0, 8.0]);
}

#[test]
fn test_no_shared_roles_falls_back() {
    let input = [2.0f32, 3.0, 12.0, 13.0];
    let (output, method) = run(&input, 2, 1, ChannelLayout::Stereo, ChannelLayout::Mono);
    assert_eq!(method, DownmixMethod::Fallback);
    assert_eq!(output, vec![2.0, 12.0]);
}

#[test]
fn test_channel_count_off_layout_falls_back() {
    // Four output channels declared against a stereo layout.
    let input = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0];
    let (output, method) = run(
        &input,
        6,
        4,
        ChannelLayout::ThreeF2Lfe,
        ChannelLayout::Stereo,
    );
    assert_eq!(method, DownmixMethod::Fallback);
    assert_eq!(output, vec![1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn test_fallback_into_unsupported_truncates() {
    let input = [1.0f32, 2.0, 3.0, 4.0, 11.0, 12.0, 13.0, 14.0, 21.0, 22.0, 23.0, 24.0];
    let (output, method) = run(
        &input,
        4,
        2,
        ChannelLayout::TwoF2,
        ChannelLayout::Unsupported,
    );
    assert_eq!(method, DownmixMethod::Fallback);
    assert_eq!(output, vec![1.0, 2.0, 11.0, 12.0, 21.0, 22.0]);
}

#[test]
fn test_fallback_frame_counts() {
    let input: Vec<f32> = (0..40).map(|i| i as f32).collect();
    for frames in [0usize, 1, 10] {
        let mut output = vec![f32::NAN; frames * 2];
        downmix_fallback(&input, frames, &mut output, 4, 2);
        let want: Vec<f32> = input
            .chunks_exact(4)
            .take(frames)
            .flat_map(|frame| frame[..2].to_vec())
            .collect();
        assert_eq!(output, want, "{frames} frames");
    }
}

#[test]
fn test_same_layout_is_identity() {
    for layout in ChannelLayout::ALL.into_iter().skip(1) {
        let channels = layout.channel_count();
        let input: Vec<f32> = (0..channels * 3).map(|i| i as f32 + 0.5).collect();
        let (output, method) = run(&input, channels, channels, layout, layout);
        if layout.is_3f2() {
            // The matrix has no 3F2 -> 3F2 row, so this goes through the remap path.
            assert_eq!(method, DownmixMethod::ChannelMap);
        }
        assert_eq!(output, input, "{layout}");
    }
}

#[test]
fn test_downmix_method_matches_dispatch() {
    for in_layout in ChannelLayout::ALL.into_iter().skip(1) {
        for out_layout in ChannelLayout::ALL {
            let in_channels = in_layout.channel_count();
            let out_channels = if out_layout == ChannelLayout::Unsupported {
                in_channels
            } else {
                out_layout.channel_count()
            };
            if out_channels > in_channels {
                continue;
            }
            let input = vec![1.0f32; in_channels * 2];
            let (_, method) = run(&input, in_channels, out_channels, in_layout, out_layout);
            assert_eq!(
                downmix_method(in_channels, out_channels, in_layout, out_layout),
                method,
                "{in_layout} -> {out_layout}"
            );
        }
    }
}

#[test]
fn test_method_display() {
    assert_eq!(DownmixMethod::ChannelMap.to_string(), "channel map");
    assert_eq!(
        serde_json::to_string(&DownmixMethod::ChannelMap).unwrap(),
        "\"channel_map\""
    );
}
