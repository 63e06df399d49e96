//! Error types for the validated mixing front end.
//!
//! The core transforms in [`crate::downmix`] and [`crate::upmix`] never
//! return errors; they trust their preconditions. [`crate::ChannelMixer`]
//! checks those preconditions up front and reports violations here.

use thiserror::Error;

use crate::layout::ChannelLayout;
use crate::params::SampleFormat;

/// Result type for mixer operations.
pub type MixResult<T> = Result<T, MixError>;

/// Errors reported by the validated mixer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MixError {
    /// A stream declared zero channels.
    #[error("{role} stream has zero channels")]
    ZeroChannels {
        /// Which side of the mix ("stream" or "mixer").
        role: &'static str,
    },

    /// Channel count disagrees with the declared layout.
    #[error("layout {layout} has {expected} channels, but {found} were declared")]
    ChannelCountMismatch {
        /// The declared layout.
        layout: ChannelLayout,
        /// Channel count the layout defines.
        expected: usize,
        /// Channel count that was declared.
        found: usize,
    },

    /// Only 32-bit float samples can be mixed.
    #[error("unsupported sample format: {format}")]
    UnsupportedSampleFormat {
        /// The rejected format.
        format: SampleFormat,
    },

    /// The mixer does not resample.
    #[error("sample rate mismatch: stream is {stream} Hz, mixer is {mixer} Hz")]
    SampleRateMismatch {
        /// Stream sample rate.
        stream: u32,
        /// Mixer sample rate.
        mixer: u32,
    },

    /// Downmixing needs positional semantics on the input side.
    #[error("cannot downmix from a stream with an unsupported layout")]
    UnsupportedInputLayout,

    /// Buffer length is not a whole number of frames.
    #[error("buffer of {len} samples is not a whole number of {channels}-channel frames")]
    MisalignedBuffer {
        /// Buffer length in samples.
        len: usize,
        /// Channels per frame.
        channels: usize,
    },

    /// Output buffer does not hold the same number of frames as the input.
    #[error("output buffer holds {found} samples, expected {expected}")]
    OutputSizeMismatch {
        /// Required output length in samples.
        expected: usize,
        /// Actual output length in samples.
        found: usize,
    },

    /// Layout name could not be parsed.
    #[error("unknown channel layout '{name}'")]
    UnknownLayout {
        /// The unrecognised name.
        name: String,
    },
}

impl MixError {
    /// Stable error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            MixError::ZeroChannels { .. } => "MIX_001",
            MixError::ChannelCountMismatch { .. } => "MIX_002",
            MixError::UnsupportedSampleFormat { .. } => "MIX_003",
            MixError::SampleRateMismatch { .. } => "MIX_004",
            MixError::UnsupportedInputLayout => "MIX_005",
            MixError::MisalignedBuffer { .. } => "MIX_006",
            MixError::OutputSizeMismatch { .. } => "MIX_007",
            MixError::UnknownLayout { .. } => "MIX_008",
        }
    }

    /// Error category.
    pub fn category(&self) -> &'static str {
        match self {
            MixError::UnknownLayout { .. } => "parse",
            MixError::MisalignedBuffer { .. } | MixError::OutputSizeMismatch { .. } => "buffer",
            _ => "params",
        }
    }
}
