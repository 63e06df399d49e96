//! Last-resort downmix that drops trailing channels.

use crate::buffer::frame_pairs;
use crate::sample::Sample;

/// Keeps the first `out_channels` samples of every frame and discards the rest.
pub fn downmix_fallback<T: Sample>(
    input: &[T],
    frames: usize,
    output: &mut [T],
    in_channels: usize,
    out_channels: usize,
) {
    debug_assert!(in_channels >= out_channels);

    for (in_frame, out_frame) in frame_pairs(input, in_channels, output, out_channels, frames) {
        out_frame.copy_from_slice(&in_frame[..out_channels]);
    }
}
