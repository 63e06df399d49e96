//! Deciding whether a stream needs downmixing or upmixing.

use crate::layout::ChannelLayout;
use crate::params::StreamParams;

/// Returns true when the mixer has more channels than the stream.
pub fn should_upmix(stream: &StreamParams, mixer: &StreamParams) -> bool {
    mixer.channels > stream.channels
}

/// Returns true when the stream must be downmixed to reach the mixer.
///
/// Beyond a plain channel-count decrease, two equal-count conversions count
/// as downmixes: anything into an `Unsupported` mixer layout (handled by
/// truncation), and 3F2 into 2F2-LFE or 3F1-LFE (handled by the ITU-R
/// matrix, which folds the surrounds into fewer slots to make room for LFE).
pub fn should_downmix(stream: &StreamParams, mixer: &StreamParams) -> bool {
    if mixer.channels > stream.channels || mixer.layout == stream.layout {
        return false;
    }

    mixer.channels < stream.channels
        || mixer.layout == ChannelLayout::Unsupported
        || (stream.layout.is_3f2()
            && matches!(
                mixer.layout,
                ChannelLayout::TwoF2Lfe | ChannelLayout::ThreeF1Lfe
            ))
}
