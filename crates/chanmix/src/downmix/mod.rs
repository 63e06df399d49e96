//! Downmixing: reducing channel count by weighted combination or selection.
//!
//! [`downmix`] tries, in order:
//! 1. the ITU-R BS.775-3 matrix for 3F2 / 3F2-LFE input ([`downmix_3f2`]),
//! 2. role-based remapping when the layouts share channels ([`map_channels`]),
//! 3. plain truncation to the first output channels ([`downmix_fallback`]).
//!
//! The first two only run when both channel counts match their layouts.

mod channel_map;
mod fallback;
mod matrix;

#[cfg(test)]
mod tests_channel_map;
#[cfg(test)]
mod tests_dispatch;
#[cfg(test)]
mod tests_matrix;

use serde::Serialize;

use crate::buffer::frame_pairs;
use crate::layout::ChannelLayout;
use crate::sample::Sample;

// Re-export public API
pub use channel_map::map_channels;
pub use fallback::downmix_fallback;
pub use matrix::{
    downmix_3f2, matrix_index, supports as matrix_supports, DOWNMIX_MATRIX_3F2_LFE,
    INPUT_SLOT_COUNT, MAX_OUTPUT_CHANNELS, SUPPORTED_LAYOUT_COUNT,
};

/// Which downmix strategy produced the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DownmixMethod {
    /// ITU-R BS.775-3 coefficient matrix.
    Matrix,
    /// Role-based copy with silence for missing roles.
    ChannelMap,
    /// First-N-channels truncation.
    Fallback,
}

impl std::fmt::Display for DownmixMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DownmixMethod::Matrix => write!(f, "matrix"),
            DownmixMethod::ChannelMap => write!(f, "channel map"),
            DownmixMethod::Fallback => write!(f, "fallback"),
        }
    }
}

/// Strategy [`downmix`] will use for these parameters, without running it.
pub fn downmix_method(
    in_channels: usize,
    out_channels: usize,
    in_layout: ChannelLayout,
    out_layout: ChannelLayout,
) -> DownmixMethod {
    if out_channels == out_layout.channel_count() && in_channels == in_layout.channel_count() {
        if matrix_supports(in_layout, out_layout) {
            return DownmixMethod::Matrix;
        }
        if in_layout.mask().intersects(out_layout.mask()) {
            return DownmixMethod::ChannelMap;
        }
    }
    DownmixMethod::Fallback
}

/// Downmixes `frames` interleaved frames from `in_layout` to `out_layout`.
///
/// Callers decide with [`crate::should_downmix`] first. Requires
/// `in_channels >= out_channels` and a positional input layout; both are
/// checked only in debug builds.
pub fn downmix<T: Sample>(
    input: &[T],
    frames: usize,
    output: &mut [T],
    in_channels: usize,
    out_channels: usize,
    in_layout: ChannelLayout,
    out_layout: ChannelLayout,
) -> DownmixMethod {
    debug_assert!(in_channels >= out_channels && in_layout != ChannelLayout::Unsupported);

    if out_channels == out_layout.channel_count() && in_channels == in_layout.channel_count() {
        if downmix_3f2(input, frames, output, in_layout, out_layout) {
            return DownmixMethod::Matrix;
        }

        if in_layout == out_layout {
            copy_frames(input, frames, output, in_channels);
            return DownmixMethod::ChannelMap;
        }

        if map_channels(input, frames, output, in_layout, out_layout) {
            return DownmixMethod::ChannelMap;
        }
    }

    downmix_fallback(input, frames, output, in_channels, out_channels);
    DownmixMethod::Fallback
}

/// `f32` entry point for [`downmix`].
pub fn downmix_float(
    input: &[f32],
    frames: usize,
    output: &mut [f32],
    in_channels: usize,
    out_channels: usize,
    in_layout: ChannelLayout,
    out_layout: ChannelLayout,
) -> DownmixMethod {
    downmix(
        input,
        frames,
        output,
        in_channels,
        out_channels,
        in_layout,
        out_layout,
    )
}

fn copy_frames<T: Sample>(input: &[T], frames: usize, output: &mut [T], channels: usize) {
    for (in_frame, out_frame) in frame_pairs(input, channels, output, channels, frames) {
        out_frame.copy_from_slice(in_frame);
    }
}
