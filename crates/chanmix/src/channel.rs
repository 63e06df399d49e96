//! Loudspeaker channel roles and channel bitmasks.

use serde::{Deserialize, Serialize};

/// A semantic speaker position, independent of where it sits in a buffer.
///
/// The discriminant is the role's bit position in a [`ChannelMask`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Channel {
    /// Single full-range channel.
    Mono = 0,
    /// Front left.
    Left,
    /// Front right.
    Right,
    /// Front center.
    Center,
    /// Left surround.
    LeftSurround,
    /// Right surround.
    RightSurround,
    /// Rear left surround.
    RearLeftSurround,
    /// Rear center.
    RearCenter,
    /// Rear right surround.
    RearRightSurround,
    /// Low frequency effects (subwoofer).
    LowFrequencyEffects,
}

impl Channel {
    /// Number of distinct channel roles.
    pub const COUNT: usize = 10;

    /// All roles, in bit order.
    pub const ALL: [Channel; Channel::COUNT] = [
        Channel::Mono,
        Channel::Left,
        Channel::Right,
        Channel::Center,
        Channel::LeftSurround,
        Channel::RightSurround,
        Channel::RearLeftSurround,
        Channel::RearCenter,
        Channel::RearRightSurround,
        Channel::LowFrequencyEffects,
    ];

    /// Returns the single-bit mask for this role.
    #[inline]
    pub const fn bit(self) -> u32 {
        1 << self as u32
    }

    /// Short speaker label (`"L"`, `"LFE"`, ...).
    pub fn label(self) -> &'static str {
        match self {
            Channel::Mono => "M",
            Channel::Left => "L",
            Channel::Right => "R",
            Channel::Center => "C",
            Channel::LeftSurround => "LS",
            Channel::RightSurround => "RS",
            Channel::RearLeftSurround => "RLS",
            Channel::RearCenter => "RC",
            Channel::RearRightSurround => "RRS",
            Channel::LowFrequencyEffects => "LFE",
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A set of channel roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ChannelMask(u32);

impl ChannelMask {
    /// The empty set.
    pub const EMPTY: ChannelMask = ChannelMask(0);

    /// Builds a mask from a sequence of roles.
    pub fn from_channels(channels: &[Channel]) -> Self {
        Self(channels.iter().fold(0, |mask, ch| mask | ch.bit()))
    }

    /// Returns true if `channel` is in the set.
    #[inline]
    pub fn contains(self, channel: Channel) -> bool {
        self.0 & channel.bit() != 0
    }

    /// Returns true if the two sets share at least one role.
    #[inline]
    pub fn intersects(self, other: ChannelMask) -> bool {
        self.0 & other.0 != 0
    }

    /// Number of roles in the set.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns true if the set is empty.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Raw bit representation.
    pub fn bits(self) -> u32 {
        self.0
    }
}
