//! PCM sample representation used by the mixing algorithms.

use std::ops::{Add, AddAssign, Mul};

/// A PCM sample the mixing algorithms can scale and accumulate.
///
/// Implemented for `f32` (the representation every entry point uses) and
/// `f64`.
pub trait Sample:
    Copy + PartialEq + Default + Add<Output = Self> + AddAssign + Mul<Output = Self> + Send + Sync
{
    /// Digital silence.
    const SILENCE: Self;

    /// Converts a mixing coefficient into the sample type.
    fn from_gain(gain: f32) -> Self;
}

impl Sample for f32 {
    const SILENCE: Self = 0.0;

    #[inline]
    fn from_gain(gain: f32) -> Self {
        gain
    }
}

impl Sample for f64 {
    const SILENCE: Self = 0.0;

    #[inline]
    fn from_gain(gain: f32) -> Self {
        gain as f64
    }
}
