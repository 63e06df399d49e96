//! Loudspeaker layouts and their channel position tables.
//!
//! Each layout owns one ordered slice of [`Channel`]s. Position lookups in
//! both directions, the channel mask and the channel count are all derived
//! from that slice, so the index→channel and channel→index views can never
//! disagree.

use serde::{Deserialize, Serialize};

use crate::channel::{Channel, ChannelMask};
use crate::error::MixError;

use crate::channel::Channel::{
    Center as C, Left as L, LeftSurround as LS, LowFrequencyEffects as LFE, Mono as M,
    RearCenter as RC, RearLeftSurround as RLS, RearRightSurround as RRS, Right as R,
    RightSurround as RS,
};

/// A named arrangement of channel roles over successive buffer positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ChannelLayout {
    /// No positional semantics; any channel count.
    #[serde(rename = "unsupported")]
    Unsupported,
    /// L R, carrying two unrelated mono programs.
    #[serde(rename = "dual-mono")]
    DualMono,
    /// L R LFE.
    #[serde(rename = "dual-mono-lfe")]
    DualMonoLfe,
    /// M.
    #[serde(rename = "mono")]
    Mono,
    /// M LFE.
    #[serde(rename = "mono-lfe")]
    MonoLfe,
    /// L R.
    #[serde(rename = "stereo")]
    Stereo,
    /// L R LFE.
    #[serde(rename = "stereo-lfe")]
    StereoLfe,
    /// L R C.
    #[serde(rename = "3f")]
    ThreeF,
    /// L R C LFE.
    #[serde(rename = "3f-lfe")]
    ThreeFLfe,
    /// L R RC.
    #[serde(rename = "2f1")]
    TwoF1,
    /// L R LFE RC.
    #[serde(rename = "2f1-lfe")]
    TwoF1Lfe,
    /// L R C RC.
    #[serde(rename = "3f1")]
    ThreeF1,
    /// L R C LFE RC.
    #[serde(rename = "3f1-lfe")]
    ThreeF1Lfe,
    /// L R LS RS.
    #[serde(rename = "2f2")]
    TwoF2,
    /// L R LFE LS RS.
    #[serde(rename = "2f2-lfe")]
    TwoF2Lfe,
    /// L R C LS RS (5.0).
    #[serde(rename = "3f2")]
    ThreeF2,
    /// L R C LFE LS RS (5.1).
    #[serde(rename = "3f2-lfe")]
    ThreeF2Lfe,
    /// L R C LFE RC LS RS (6.1).
    #[serde(rename = "3f3r-lfe")]
    ThreeF3RLfe,
    /// L R C LFE RLS RRS LS RS (7.1).
    #[serde(rename = "3f4-lfe")]
    ThreeF4Lfe,
}

impl ChannelLayout {
    /// Every layout, in table order.
    pub const ALL: [ChannelLayout; 19] = [
        ChannelLayout::Unsupported,
        ChannelLayout::DualMono,
        ChannelLayout::DualMonoLfe,
        ChannelLayout::Mono,
        ChannelLayout::MonoLfe,
        ChannelLayout::Stereo,
        ChannelLayout::StereoLfe,
        ChannelLayout::ThreeF,
        ChannelLayout::ThreeFLfe,
        ChannelLayout::TwoF1,
        ChannelLayout::TwoF1Lfe,
        ChannelLayout::ThreeF1,
        ChannelLayout::ThreeF1Lfe,
        ChannelLayout::TwoF2,
        ChannelLayout::TwoF2Lfe,
        ChannelLayout::ThreeF2,
        ChannelLayout::ThreeF2Lfe,
        ChannelLayout::ThreeF3RLfe,
        ChannelLayout::ThreeF4Lfe,
    ];

    /// Channel roles in buffer order.
    pub const fn channels(self) -> &'static [Channel] {
        match self {
            ChannelLayout::Unsupported => &[],
            ChannelLayout::DualMono => &[L, R],
            ChannelLayout::DualMonoLfe => &[L, R, LFE],
            ChannelLayout::Mono => &[M],
            ChannelLayout::MonoLfe => &[M, LFE],
            ChannelLayout::Stereo => &[L, R],
            ChannelLayout::StereoLfe => &[L, R, LFE],
            ChannelLayout::ThreeF => &[L, R, C],
            ChannelLayout::ThreeFLfe => &[L, R, C, LFE],
            ChannelLayout::TwoF1 => &[L, R, RC],
            ChannelLayout::TwoF1Lfe => &[L, R, LFE, RC],
            ChannelLayout::ThreeF1 => &[L, R, C, RC],
            ChannelLayout::ThreeF1Lfe => &[L, R, C, LFE, RC],
            ChannelLayout::TwoF2 => &[L, R, LS, RS],
            ChannelLayout::TwoF2Lfe => &[L, R, LFE, LS, RS],
            ChannelLayout::ThreeF2 => &[L, R, C, LS, RS],
            ChannelLayout::ThreeF2Lfe => &[L, R, C, LFE, LS, RS],
            ChannelLayout::ThreeF3RLfe => &[L, R, C, LFE, RC, LS, RS],
            ChannelLayout::ThreeF4Lfe => &[L, R, C, LFE, RLS, RRS, LS, RS],
        }
    }

    /// Number of channels the layout defines. Zero for `Unsupported`.
    #[inline]
    pub const fn channel_count(self) -> usize {
        self.channels().len()
    }

    /// Role at buffer position `index`, or `None` past the end of the layout.
    #[inline]
    pub fn channel_at(self, index: usize) -> Option<Channel> {
        self.channels().get(index).copied()
    }

    /// Buffer position of `channel`, or `None` if the layout lacks it.
    #[inline]
    pub fn index_of(self, channel: Channel) -> Option<usize> {
        self.channels().iter().position(|&ch| ch == channel)
    }

    /// Set of roles present in the layout.
    pub fn mask(self) -> ChannelMask {
        ChannelMask::from_channels(self.channels())
    }

    /// Returns true for the 3F2 and 3F2-LFE layouts.
    pub fn is_3f2(self) -> bool {
        matches!(self, ChannelLayout::ThreeF2 | ChannelLayout::ThreeF2Lfe)
    }

    /// Canonical name (`"3f2-lfe"`, `"stereo"`, ...).
    pub fn name(self) -> &'static str {
        match self {
            ChannelLayout::Unsupported => "unsupported",
            ChannelLayout::DualMono => "dual-mono",
            ChannelLayout::DualMonoLfe => "dual-mono-lfe",
            ChannelLayout::Mono => "mono",
            ChannelLayout::MonoLfe => "mono-lfe",
            ChannelLayout::Stereo => "stereo",
            ChannelLayout::StereoLfe => "stereo-lfe",
            ChannelLayout::ThreeF => "3f",
            ChannelLayout::ThreeFLfe => "3f-lfe",
            ChannelLayout::TwoF1 => "2f1",
            ChannelLayout::TwoF1Lfe => "2f1-lfe",
            ChannelLayout::ThreeF1 => "3f1",
            ChannelLayout::ThreeF1Lfe => "3f1-lfe",
            ChannelLayout::TwoF2 => "2f2",
            ChannelLayout::TwoF2Lfe => "2f2-lfe",
            ChannelLayout::ThreeF2 => "3f2",
            ChannelLayout::ThreeF2Lfe => "3f2-lfe",
            ChannelLayout::ThreeF3RLfe => "3f3r-lfe",
            ChannelLayout::ThreeF4Lfe => "3f4-lfe",
        }
    }

    /// Conventional layout for a bare channel count.
    ///
    /// Used when a source (a WAV file, say) carries a channel count but no
    /// speaker assignment.
    pub fn default_for_channels(channels: usize) -> Self {
        match channels {
            1 => ChannelLayout::Mono,
            2 => ChannelLayout::Stereo,
            3 => ChannelLayout::ThreeF,
            4 => ChannelLayout::TwoF2,
            5 => ChannelLayout::ThreeF2,
            6 => ChannelLayout::ThreeF2Lfe,
            7 => ChannelLayout::ThreeF3RLfe,
            8 => ChannelLayout::ThreeF4Lfe,
            _ => ChannelLayout::Unsupported,
        }
    }
}

impl std::fmt::Display for ChannelLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ChannelLayout {
    type Err = MixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        if wanted == "undefined" {
            return Ok(ChannelLayout::Unsupported);
        }
        ChannelLayout::ALL
            .into_iter()
            .find(|layout| layout.name() == wanted)
            .ok_or_else(|| MixError::UnknownLayout {
                name: s.to_string(),
            })
    }
}
