//! Bounds-checked views over interleaved sample buffers.
//!
//! An interleaved buffer stores `frames * channels` samples with all channels
//! of frame `i` before any channel of frame `i + 1`. Sample `(frame, channel)`
//! lives at `frame * channels + channel`.

use std::slice::{ChunksExact, ChunksExactMut};

use crate::error::{MixError, MixResult};

/// Position of `(frame, channel)` in an interleaved buffer.
#[inline]
pub const fn sample_index(frame: usize, channel: usize, channels: usize) -> usize {
    frame * channels + channel
}

/// Read-only interleaved buffer.
#[derive(Debug, Clone, Copy)]
pub struct Interleaved<'a, T> {
    data: &'a [T],
    channels: usize,
}

impl<'a, T: Copy> Interleaved<'a, T> {
    /// Wraps `data`, which must hold a whole number of `channels`-wide frames.
    pub fn new(data: &'a [T], channels: usize) -> MixResult<Self> {
        check_alignment(data.len(), channels)?;
        Ok(Self { data, channels })
    }

    /// Channels per frame.
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Number of complete frames.
    pub fn frames(&self) -> usize {
        self.data.len() / self.channels
    }

    /// All samples of frame `frame`.
    pub fn frame(&self, frame: usize) -> &'a [T] {
        let start = sample_index(frame, 0, self.channels);
        &self.data[start..start + self.channels]
    }

    /// One sample.
    pub fn sample(&self, frame: usize, channel: usize) -> T {
        assert!(channel < self.channels, "channel {channel} out of range");
        self.data[sample_index(frame, channel, self.channels)]
    }

    /// Iterates frame by frame.
    pub fn iter_frames(&self) -> ChunksExact<'a, T> {
        self.data.chunks_exact(self.channels)
    }

    /// Underlying samples.
    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }
}

/// Mutable interleaved buffer.
#[derive(Debug)]
pub struct InterleavedMut<'a, T> {
    data: &'a mut [T],
    channels: usize,
}

impl<'a, T: Copy> InterleavedMut<'a, T> {
    /// Wraps `data`, which must hold a whole number of `channels`-wide frames.
    pub fn new(data: &'a mut [T], channels: usize) -> MixResult<Self> {
        check_alignment(data.len(), channels)?;
        Ok(Self { data, channels })
    }

    /// Channels per frame.
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Number of complete frames.
    pub fn frames(&self) -> usize {
        self.data.len() / self.channels
    }

    /// All samples of frame `frame`.
    pub fn frame_mut(&mut self, frame: usize) -> &mut [T] {
        let start = sample_index(frame, 0, self.channels);
        &mut self.data[start..start + self.channels]
    }

    /// Writes one sample.
    pub fn set(&mut self, frame: usize, channel: usize, value: T) {
        assert!(channel < self.channels, "channel {channel} out of range");
        self.data[sample_index(frame, channel, self.channels)] = value;
    }

    /// Iterates frame by frame.
    pub fn iter_frames_mut(&mut self) -> ChunksExactMut<'_, T> {
        self.data.chunks_exact_mut(self.channels)
    }

    /// Underlying samples.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data[..]
    }
}

fn check_alignment(len: usize, channels: usize) -> MixResult<()> {
    if channels == 0 || len % channels != 0 {
        return Err(MixError::MisalignedBuffer { len, channels });
    }
    Ok(())
}

/// Pairs up the first `frames` input and output frames.
///
/// Slicing is bounds-checked, so undersized buffers panic instead of being
/// read or written out of range. A zero channel count on either side yields
/// no frames.
pub(crate) fn frame_pairs<'a, T>(
    input: &'a [T],
    in_channels: usize,
    output: &'a mut [T],
    out_channels: usize,
    frames: usize,
) -> impl Iterator<Item = (&'a [T], &'a mut [T])> {
    let frames = if in_channels == 0 || out_channels == 0 {
        0
    } else {
        frames
    };
    input[..frames * in_channels]
        .chunks_exact(in_channels.max(1))
        .zip(output[..frames * out_channels].chunks_exact_mut(out_channels.max(1)))
}
