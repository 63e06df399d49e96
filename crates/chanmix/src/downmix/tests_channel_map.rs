//! Tests for role-based channel remapping.

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_absent_role_is_silent() {
    // L R C LFE LS RS -> L R RC
    let input = [2.0f32, 3.0, 4.0, 10.0, 5.0, 6.0, 12.0, 13.0, 14.0, 20.0, 15.0, 16.0];
    let mut output = [f32::NAN; 6];

    assert!(map_channels(
        &input,
        2,
        &mut output,
        ChannelLayout::ThreeF2Lfe,
        ChannelLayout::TwoF1
    ));

    assert_eq!(output, [2.0, 3.0, 0.0, 12.0, 13.0, 0.0]);
}

#[test]
fn test_reorders_by_role() {
    // 3F3R-LFE: L R C LFE RC LS RS -> 2F1-LFE: L R LFE RC
    let input = [2.0f32, 3.0, 4.0, 10.0, 8.0, 5.0, 6.0];
    let mut output = [0.0f32; 4];

    map_channels(
        &input,
        1,
        &mut output,
        ChannelLayout::ThreeF3RLfe,
        ChannelLayout::TwoF1Lfe,
    );

    assert_eq!(output, [2.0, 3.0, 10.0, 8.0]);
}

#[test]
fn test_7_1_to_5_1_keeps_front_and_side() {
    // 3F4-LFE: L R C LFE RLS RRS LS RS
    let input = [2.0f32, 3.0, 4.0, 10.0, 7.0, 9.0, 5.0, 6.0];
    let mut output = [0.0f32; 6];

    map_channels(
        &input,
        1,
        &mut output,
        ChannelLayout::ThreeF4Lfe,
        ChannelLayout::ThreeF2Lfe,
    );

    assert_eq!(output, [2.0, 3.0, 4.0, 10.0, 5.0, 6.0]);
}

#[test]
fn test_no_shared_role_returns_false() {
    let input = [1.0f32, 2.0];
    let mut output = [9.0f32];

    assert!(!map_channels(
        &input,
        1,
        &mut output,
        ChannelLayout::Stereo,
        ChannelLayout::Mono
    ));
    assert_eq!(output, [9.0]);
}

#[test]
fn test_unsupported_output_shares_nothing() {
    let input = [1.0f32, 2.0];
    let mut output = [9.0f32, 9.0];

    assert!(!map_channels(
        &input,
        1,
        &mut output,
        ChannelLayout::Stereo,
        ChannelLayout::Unsupported
    ));
}
