//! ITU-R BS.775-3 downmix of 3F2 and 3F2-LFE input.
//!
//! Table 2 of the recommendation converts 3F2 to 1F, 2F, 3F, 2F1, 3F1 and 2F2.
//! The table here extends each of those with an LFE-carrying variant, where
//! the LFE slot passes through at unity gain.

use std::f32::consts::FRAC_1_SQRT_2 as S;

use crate::buffer::frame_pairs;
use crate::layout::ChannelLayout;
use crate::sample::Sample;

/// Output layouts the matrix covers: Mono ..= 2F2-LFE.
pub const SUPPORTED_LAYOUT_COUNT: usize = 12;
/// Canonical input slots: L, R, C, LFE, LS, RS.
pub const INPUT_SLOT_COUNT: usize = 6;
/// Widest supported output (2F2-LFE and 3F1-LFE).
pub const MAX_OUTPUT_CHANNELS: usize = 5;

const LFE_SLOT: usize = 3;

/// Coefficients applied to the `{ L, R, C, LFE, LS, RS }` input slots.
///
/// Indexed by `[output layout - Mono][output position][input slot]`. Rows past
/// an output layout's channel count are zero and never read.
#[rustfmt::skip]
pub const DOWNMIX_MATRIX_3F2_LFE: [[[f32; INPUT_SLOT_COUNT]; MAX_OUTPUT_CHANNELS]; SUPPORTED_LAYOUT_COUNT] = [
    // Mono
    [
        [S,   S,   1.0, 0.0, 0.5, 0.5],   // M
        [0.0; 6], [0.0; 6], [0.0; 6], [0.0; 6],
    ],
    // Mono-LFE
    [
        [S,   S,   1.0, 0.0, 0.5, 0.5],   // M
        [0.0, 0.0, 0.0, 1.0, 0.0, 0.0],   // LFE
        [0.0; 6], [0.0; 6], [0.0; 6],
    ],
    // Stereo
    [
        [1.0, 0.0, S,   0.0, S,   0.0],   // L
        [0.0, 1.0, S,   0.0, 0.0, S  ],   // R
        [0.0; 6], [0.0; 6], [0.0; 6],
    ],
    // Stereo-LFE
    [
        [1.0, 0.0, S,   0.0, S,   0.0],   // L
        [0.0, 1.0, S,   0.0, 0.0, S  ],   // R
        [0.0, 0.0, 0.0, 1.0, 0.0, 0.0],   // LFE
        [0.0; 6], [0.0; 6],
    ],
    // 3F
    [
        [1.0, 0.0, 0.0, 0.0, S,   0.0],   // L
        [0.0, 1.0, 0.0, 0.0, 0.0, S  ],   // R
        [0.0, 0.0, 1.0, 0.0, 0.0, 0.0],   // C
        [0.0; 6], [0.0; 6],
    ],
    // 3F-LFE
    [
        [1.0, 0.0, 0.0, 0.0, S,   0.0],   // L
        [0.0, 1.0, 0.0, 0.0, 0.0, S  ],   // R
        [0.0, 0.0, 1.0, 0.0, 0.0, 0.0],   // C
        [0.0, 0.0, 0.0, 1.0, 0.0, 0.0],   // LFE
        [0.0; 6],
    ],
    // 2F1
    [
        [1.0, 0.0, S,   0.0, 0.0, 0.0],   // L
        [0.0, 1.0, S,   0.0, 0.0, 0.0],   // R
        [0.0, 0.0, 0.0, 0.0, S,   S  ],   // S
        [0.0; 6], [0.0; 6],
    ],
    // 2F1-LFE
    [
        [1.0, 0.0, S,   0.0, 0.0, 0.0],   // L
        [0.0, 1.0, S,   0.0, 0.0, 0.0],   // R
        [0.0, 0.0, 0.0, 1.0, 0.0, 0.0],   // LFE
        [0.0, 0.0, 0.0, 0.0, S,   S  ],   // S
        [0.0; 6],
    ],
    // 3F1
    [
        [1.0, 0.0, 0.0, 0.0, 0.0, 0.0],   // L
        [0.0, 1.0, 0.0, 0.0, 0.0, 0.0],   // R
        [0.0, 0.0, 1.0, 0.0, 0.0, 0.0],   // C
        [0.0, 0.0, 0.0, 0.0, S,   S  ],   // S
        [0.0; 6],
    ],
    // 3F1-LFE
    [
        [1.0, 0.0, 0.0, 0.0, 0.0, 0.0],   // L
        [0.0, 1.0, 0.0, 0.0, 0.0, 0.0],   // R
        [0.0, 0.0, 1.0, 0.0, 0.0, 0.0],   // C
        [0.0, 0.0, 0.0, 1.0, 0.0, 0.0],   // LFE
        [0.0, 0.0, 0.0, 0.0, S,   S  ],   // S
    ],
    // 2F2
    [
        [1.0, 0.0, S,   0.0, 0.0, 0.0],   // L
        [0.0, 1.0, S,   0.0, 0.0, 0.0],   // R
        [0.0, 0.0, 0.0, 0.0, 1.0, 0.0],   // LS
        [0.0, 0.0, 0.0, 0.0, 0.0, 1.0],   // RS
        [0.0; 6],
    ],
    // 2F2-LFE
    [
        [1.0, 0.0, S,   0.0, 0.0, 0.0],   // L
        [0.0, 1.0, S,   0.0, 0.0, 0.0],   // R
        [0.0, 0.0, 0.0, 1.0, 0.0, 0.0],   // LFE
        [0.0, 0.0, 0.0, 0.0, 1.0, 0.0],   // LS
        [0.0, 0.0, 0.0, 0.0, 0.0, 1.0],   // RS
    ],
];

/// Matrix row block for `layout`, or `None` if the matrix cannot produce it.
pub fn matrix_index(layout: ChannelLayout) -> Option<usize> {
    let index = match layout {
        ChannelLayout::Mono => 0,
        ChannelLayout::MonoLfe => 1,
        ChannelLayout::Stereo => 2,
        ChannelLayout::StereoLfe => 3,
        ChannelLayout::ThreeF => 4,
        ChannelLayout::ThreeFLfe => 5,
        ChannelLayout::TwoF1 => 6,
        ChannelLayout::TwoF1Lfe => 7,
        ChannelLayout::ThreeF1 => 8,
        ChannelLayout::ThreeF1Lfe => 9,
        ChannelLayout::TwoF2 => 10,
        ChannelLayout::TwoF2Lfe => 11,
        _ => return None,
    };
    Some(index)
}

/// Returns true if [`downmix_3f2`] handles this layout pair.
pub fn supports(in_layout: ChannelLayout, out_layout: ChannelLayout) -> bool {
    in_layout.is_3f2() && matrix_index(out_layout).is_some()
}

/// Downmixes `frames` frames of 3F2 or 3F2-LFE input into `out_layout`.
///
/// Both buffers are addressed with their layouts' own channel counts. Returns
/// false without touching `output` when the pair is not covered by the
/// matrix.
pub fn downmix_3f2<T: Sample>(
    input: &[T],
    frames: usize,
    output: &mut [T],
    in_layout: ChannelLayout,
    out_layout: ChannelLayout,
) -> bool {
    let Some(layout_index) = matrix_index(out_layout).filter(|_| in_layout.is_3f2()) else {
        return false;
    };

    let in_channels = in_layout.channel_count();
    let out_channels = out_layout.channel_count();
    // 3F2 -> 2F2-LFE and 3F2 -> 3F1-LFE keep the channel count.
    debug_assert!(out_channels <= in_channels);

    let has_lfe = in_layout == ChannelLayout::ThreeF2Lfe;
    let rows = &DOWNMIX_MATRIX_3F2_LFE[layout_index];

    for (in_frame, out_frame) in frame_pairs(input, in_channels, output, out_channels, frames) {
        for (out_sample, row) in out_frame.iter_mut().zip(rows) {
            *out_sample = T::SILENCE;
            for (slot, &gain) in row.iter().enumerate() {
                *out_sample += T::from_gain(gain) * slot_value(in_frame, slot, has_lfe);
            }
        }
    }

    true
}

/// Reads canonical slot `slot` from a physical 3F2 or 3F2-LFE frame.
///
/// A 3F2 frame has no LFE column, so the LFE slot reads as silence and the
/// surround slots sit one position lower.
#[inline]
fn slot_value<T: Sample>(frame: &[T], slot: usize, has_lfe: bool) -> T {
    if has_lfe {
        frame[slot]
    } else if slot == LFE_SLOT {
        T::SILENCE
    } else if slot < LFE_SLOT {
        frame[slot]
    } else {
        frame[slot - 1]
    }
}
