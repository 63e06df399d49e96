//! Upmixing: widening a stream by duplication and silence.

use crate::buffer::frame_pairs;
use crate::sample::Sample;

/// Copies a mono frame into the first two output positions (L and R).
///
/// Requires `out_channels >= 2`; positions past the second are untouched.
pub fn mono_to_stereo<T: Sample>(input: &[T], frames: usize, output: &mut [T], out_channels: usize) {
    debug_assert!(out_channels >= 2);

    for (in_frame, out_frame) in frame_pairs(input, 1, output, out_channels, frames) {
        out_frame[0] = in_frame[0];
        out_frame[1] = in_frame[0];
    }
}

/// Upmixes `frames` interleaved frames from `in_channels` to `out_channels`.
///
/// Mono input is duplicated into L and R; anything else is copied through
/// position by position. Whenever the output has more than two channels,
/// every position from index 2 on is then written as silence.
pub fn upmix<T: Sample>(
    input: &[T],
    frames: usize,
    output: &mut [T],
    in_channels: usize,
    out_channels: usize,
) {
    debug_assert!(out_channels >= in_channels && in_channels > 0);

    if in_channels == 1 && out_channels >= 2 {
        mono_to_stereo(input, frames, output, out_channels);
    } else {
        for (in_frame, out_frame) in frame_pairs(input, in_channels, output, out_channels, frames)
        {
            out_frame[..in_channels].copy_from_slice(in_frame);
        }
    }

    if out_channels <= 2 {
        return;
    }

    for out_frame in output[..frames * out_channels].chunks_exact_mut(out_channels) {
        out_frame[2..].fill(T::SILENCE);
    }
}

/// `f32` entry point for [`upmix`].
pub fn upmix_float(
    input: &[f32],
    frames: usize,
    output: &mut [f32],
    in_channels: usize,
    out_channels: usize,
) {
    upmix(input, frames, output, in_channels, out_channels);
}
