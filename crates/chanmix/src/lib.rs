//! Channel-layout mixing for interleaved PCM audio.
//!
//! This crate converts multichannel audio between loudspeaker layouts:
//! downmixing 5.1/5.0 to mono, stereo, quad and friends with the ITU-R
//! BS.775-3 coefficients, remapping channels by role, truncating channels
//! that have no layout, and upmixing mono to stereo with silence in any
//! extra channels.
//!
//! # Overview
//!
//! The transforms are pure functions over caller-owned buffers. They never
//! allocate, log or fail; their preconditions are debug assertions, and the
//! caller is expected to decide first with [`should_downmix`] /
//! [`should_upmix`]. [`ChannelMixer`] bundles that decision with full
//! validation and returns [`MixError`] for anything the transforms would
//! otherwise trust.
//!
//! # Determinism
//!
//! Output depends only on the input samples and the two stream
//! configurations. All tables are compile-time constants, so concurrent use
//! on independent buffers needs no coordination.
//!
//! # Example
//!
//! ```
//! use chanmix::{ChannelLayout, ChannelMixer, StreamParams};
//!
//! let mixer = ChannelMixer::new(
//!     StreamParams::float(48000, ChannelLayout::ThreeF2Lfe),
//!     StreamParams::float(48000, ChannelLayout::Stereo),
//! )?;
//!
//! let surround = [0.5, 0.5, 0.0, 0.0, 0.0, 0.0];
//! let (stereo, report) = mixer.process_to_vec(&surround)?;
//! assert_eq!(stereo, vec![0.5, 0.5]);
//! assert_eq!(report.frames, 1);
//! # Ok::<(), chanmix::MixError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`channel`] - Channel roles and masks
//! - [`layout`] - Layout position tables
//! - [`params`] - Stream parameters and validation
//! - [`decision`] - Downmix / upmix decisions
//! - [`downmix`] - Matrix, channel-map and fallback downmixing
//! - [`upmix`] - Mono-to-stereo and passthrough upmixing
//! - [`mixer`] - Validated front end
//! - [`buffer`] - Interleaved buffer views

pub mod buffer;
pub mod channel;
pub mod decision;
pub mod downmix;
pub mod error;
pub mod layout;
pub mod mixer;
pub mod params;
pub mod sample;
pub mod upmix;

// Re-export main types at crate root
pub use buffer::{sample_index, Interleaved, InterleavedMut};
pub use channel::{Channel, ChannelMask};
pub use decision::{should_downmix, should_upmix};
pub use downmix::{downmix, downmix_float, DownmixMethod};
pub use error::{MixError, MixResult};
pub use layout::ChannelLayout;
pub use mixer::{ChannelMixer, MixOperation, MixReport};
pub use params::{SampleFormat, StreamParams};
pub use sample::Sample;
pub use upmix::{upmix, upmix_float};
