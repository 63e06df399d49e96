//! Stream parameters: sample format, rate, channel count and layout.

use serde::{Deserialize, Serialize};

use crate::error::{MixError, MixResult};
use crate::layout::ChannelLayout;

/// PCM sample representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleFormat {
    /// Signed 16-bit little endian.
    S16LE,
    /// Signed 16-bit big endian.
    S16BE,
    /// 32-bit IEEE float, little endian.
    #[default]
    Float32LE,
    /// 32-bit IEEE float, big endian.
    Float32BE,
}

impl SampleFormat {
    /// Returns true for either float32 byte order.
    pub fn is_float32(self) -> bool {
        matches!(self, SampleFormat::Float32LE | SampleFormat::Float32BE)
    }

    /// Bytes per sample.
    pub fn bytes_per_sample(self) -> usize {
        match self {
            SampleFormat::S16LE | SampleFormat::S16BE => 2,
            SampleFormat::Float32LE | SampleFormat::Float32BE => 4,
        }
    }
}

impl std::fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SampleFormat::S16LE => write!(f, "s16le"),
            SampleFormat::S16BE => write!(f, "s16be"),
            SampleFormat::Float32LE => write!(f, "f32le"),
            SampleFormat::Float32BE => write!(f, "f32be"),
        }
    }
}

/// Parameters describing one side of a mix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StreamParams {
    /// Sample representation.
    pub format: SampleFormat,
    /// Sample rate in Hz.
    pub rate: u32,
    /// Channels per frame.
    pub channels: usize,
    /// Speaker assignment of those channels.
    pub layout: ChannelLayout,
}

impl StreamParams {
    /// Float32 parameters whose channel count is taken from `layout`.
    pub fn float(rate: u32, layout: ChannelLayout) -> Self {
        Self {
            format: SampleFormat::Float32LE,
            rate,
            channels: layout.channel_count(),
            layout,
        }
    }

    /// Float32 parameters with an explicit channel count and no layout.
    pub fn unsupported(rate: u32, channels: usize) -> Self {
        Self {
            format: SampleFormat::Float32LE,
            rate,
            channels,
            layout: ChannelLayout::Unsupported,
        }
    }

    /// Overrides the channel count.
    pub fn with_channels(mut self, channels: usize) -> Self {
        self.channels = channels;
        self
    }

    /// Checks that the channel count is non-zero and agrees with the layout.
    ///
    /// `role` names the side being checked in the error message.
    pub fn validate(&self, role: &'static str) -> MixResult<()> {
        if self.channels == 0 {
            return Err(MixError::ZeroChannels { role });
        }
        if self.layout != ChannelLayout::Unsupported
            && self.channels != self.layout.channel_count()
        {
            return Err(MixError::ChannelCountMismatch {
                layout: self.layout,
                expected: self.layout.channel_count(),
                found: self.channels,
            });
        }
        Ok(())
    }
}
