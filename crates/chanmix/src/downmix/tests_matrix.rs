//! Tests for the ITU-R 3F2 downmix matrix.

use std::f32::consts::FRAC_1_SQRT_2 as S;

use super::*;

const L: f32 = 2.0;
const R: f32 = 3.0;
const C: f32 = 4.0;
const LS: f32 = 5.0;
const RS: f32 = 6.0;
const LFE: f32 = 10.0;

const FRAMES: usize = 10;

/// Expected output frame for each matrix output layout, given 3F2-LFE input
/// (`lfe` is the value the LFE slot carries: `LFE` or 0 for 3F2 input).
fn expected(out_layout: ChannelLayout, lfe: f32) -> Vec<f32> {
    match out_layout {
        ChannelLayout::Mono => vec![S * (L + R) + C + 0.5 * (LS + RS)],
        ChannelLayout::MonoLfe => vec![S * (L + R) + C + 0.5 * (LS + RS), lfe],
        ChannelLayout::Stereo => vec![L + S * (C + LS), R + S * (C + RS)],
        ChannelLayout::StereoLfe => vec![L + S * (C + LS), R + S * (C + RS), lfe],
        ChannelLayout::ThreeF => vec![L + S * LS, R + S * RS, C],
        ChannelLayout::ThreeFLfe => vec![L + S * LS, R + S * RS, C, lfe],
        ChannelLayout::TwoF1 => vec![L + C * S, R + C * S, S * (LS + RS)],
        ChannelLayout::TwoF1Lfe => vec![L + C * S, R + C * S, lfe, S * (LS + RS)],
        ChannelLayout::ThreeF1 => vec![L, R, C, S * (LS + RS)],
        ChannelLayout::ThreeF1Lfe => vec![L, R, C, lfe, S * (LS + RS)],
        ChannelLayout::TwoF2 => vec![L + S * C, R + S * C, LS, RS],
        ChannelLayout::TwoF2Lfe => vec![L + S * C, R + S * C, lfe, LS, RS],
        other => panic!("{other} is not a matrix output"),
    }
}

fn input_frame(in_layout: ChannelLayout) -> Vec<f32> {
    match in_layout {
        ChannelLayout::ThreeF2 => vec![L, R, C, LS, RS],
        ChannelLayout::ThreeF2Lfe => vec![L, R, C, LFE, LS, RS],
        other => panic!("{other} is not a matrix input"),
    }
}

fn assert_close(actual: &[f32], expected: &[f32], context: &str) {
    assert_eq!(actual.len(), expected.len(), "{context}");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            (a - e).abs() < 1e-4,
            "{context}: channel {i} expected {e}, got {a}"
        );
    }
}

fn matrix_outputs() -> impl Iterator<Item = ChannelLayout> {
    ChannelLayout::ALL
        .into_iter()
        .filter(|layout| matrix_index(*layout).is_some())
}

#[test]
fn test_matrix_covers_twelve_layouts() {
    assert_eq!(matrix_outputs().count(), SUPPORTED_LAYOUT_COUNT);
    for layout in matrix_outputs() {
        assert!(layout.channel_count() <= MAX_OUTPUT_CHANNELS);
    }
}

#[test]
fn test_itu_sums_for_every_output() {
    for in_layout in [ChannelLayout::ThreeF2, ChannelLayout::ThreeF2Lfe] {
        let lfe = if in_layout == ChannelLayout::ThreeF2Lfe {
            LFE
        } else {
            0.0
        };
        let frame = input_frame(in_layout);
        let input: Vec<f32> = frame.iter().copied().cycle().take(frame.len() * FRAMES).collect();

        for out_layout in matrix_outputs() {
            let out_channels = out_layout.channel_count();
            let mut output = vec![f32::NAN; out_channels * FRAMES];

            assert!(downmix_3f2(&input, FRAMES, &mut output, in_layout, out_layout));

            let want = expected(out_layout, lfe);
            for (i, out_frame) in output.chunks_exact(out_channels).enumerate() {
                assert_close(out_frame, &want, &format!("{in_layout} -> {out_layout} frame {i}"));
            }
        }
    }
}

#[test]
fn test_3f2_to_mono_value() {
    let input = input_frame(ChannelLayout::ThreeF2);
    let mut output = [0.0f32];
    downmix_3f2(&input, 1, &mut output, ChannelLayout::ThreeF2, ChannelLayout::Mono);
    // (2 + 3) / sqrt(2) + 4 + (5 + 6) / 2
    assert!((output[0] - 13.035534).abs() < 1e-4, "got {}", output[0]);
}

#[test]
fn test_output_is_overwritten_not_accumulated() {
    let input = input_frame(ChannelLayout::ThreeF2Lfe);
    let mut output = [100.0f32; 2];
    downmix_3f2(
        &input,
        1,
        &mut output,
        ChannelLayout::ThreeF2Lfe,
        ChannelLayout::Stereo,
    );
    assert_close(&output, &expected(ChannelLayout::Stereo, LFE), "stereo");
}

#[test]
fn test_unsupported_pairs_leave_output_alone() {
    let input = [1.0f32; 8];
    let mut output = [7.0f32; 6];

    assert!(!downmix_3f2(
        &input,
        1,
        &mut output,
        ChannelLayout::ThreeF4Lfe,
        ChannelLayout::Stereo
    ));
    assert!(!downmix_3f2(
        &input,
        1,
        &mut output,
        ChannelLayout::ThreeF2Lfe,
        ChannelLayout::ThreeF2
    ));
    assert!(!downmix_3f2(
        &input,
        1,
        &mut output,
        ChannelLayout::ThreeF2Lfe,
        ChannelLayout::DualMono
    ));
    assert!(output.iter().all(|&s| s == 7.0));
}

#[test]
fn test_zero_frames_writes_nothing() {
    let input: [f32; 0] = [];
    let mut output: [f32; 0] = [];
    assert!(downmix_3f2(
        &input,
        0,
        &mut output,
        ChannelLayout::ThreeF2,
        ChannelLayout::Stereo
    ));
}

#[test]
fn test_generic_over_f64() {
    let input = [2.0f64, 3.0, 4.0, 10.0, 5.0, 6.0];
    let mut output = [0.0f64; 3];
    downmix_3f2(
        &input,
        1,
        &mut output,
        ChannelLayout::ThreeF2Lfe,
        ChannelLayout::StereoLfe,
    );
    assert_eq!(output[2], 10.0);
    let s = f64::from(S);
    assert!((output[0] - (2.0 + s * 9.0)).abs() < 1e-9);
}
