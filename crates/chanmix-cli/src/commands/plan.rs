//! Plan command implementation
//!
//! Shows what the mixer would do for a pair of layouts without touching
//! any audio.

use anyhow::Result;
use chanmix::{
    should_downmix, should_upmix, Channel, ChannelLayout, ChannelMixer, DownmixMethod,
    MixOperation, StreamParams,
};
use colored::Colorize;
use serde::Serialize;
use std::process::ExitCode;

use super::json_output::{CommandOutput, JsonError};

/// Rate used for planning; only equality between the two sides matters.
const PLAN_RATE: u32 = 48000;

/// Mixing plan for one layout pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MixPlan {
    /// Input layout
    pub from: ChannelLayout,
    /// Output layout
    pub to: ChannelLayout,
    /// Input channel count
    pub from_channels: usize,
    /// Output channel count
    pub to_channels: usize,
    /// Result of the downmix decision
    pub should_downmix: bool,
    /// Result of the upmix decision
    pub should_upmix: bool,
    /// Operation the mixer performs
    pub operation: MixOperation,
    /// Downmix strategy, for downmixes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<DownmixMethod>,
    /// Output channel roles, when the output layout has positions
    pub output_positions: Vec<Channel>,
}

/// Builds the plan for `from` to `to`.
///
/// Channel counts default to the layouts' own counts.
pub fn plan(
    from: ChannelLayout,
    to: ChannelLayout,
    from_channels: Option<usize>,
    to_channels: Option<usize>,
) -> Result<MixPlan, JsonError> {
    let stream = StreamParams::float(PLAN_RATE, from)
        .with_channels(from_channels.unwrap_or_else(|| from.channel_count()));
    let mixer = StreamParams::float(PLAN_RATE, to)
        .with_channels(to_channels.unwrap_or_else(|| to.channel_count()));

    let channel_mixer = ChannelMixer::new(stream, mixer)?;

    Ok(MixPlan {
        from,
        to,
        from_channels: stream.channels,
        to_channels: mixer.channels,
        should_downmix: should_downmix(&stream, &mixer),
        should_upmix: should_upmix(&stream, &mixer),
        operation: channel_mixer.operation(),
        method: channel_mixer.downmix_method(),
        output_positions: to.channels().to_vec(),
    })
}

/// Run the plan command
///
/// # Returns
/// Exit code: 0 if the pair can be mixed, 1 otherwise
pub fn run(
    from: ChannelLayout,
    to: ChannelLayout,
    from_channels: Option<usize>,
    to_channels: Option<usize>,
    json_output: bool,
) -> Result<ExitCode> {
    let outcome = plan(from, to, from_channels, to_channels);

    if json_output {
        return match outcome {
            Ok(plan) => CommandOutput::success(plan).emit(),
            Err(err) => CommandOutput::<MixPlan>::failure(vec![err]).emit(),
        };
    }

    let plan = match outcome {
        Ok(plan) => plan,
        Err(err) => {
            eprintln!("{} [{}] {}", "error".red().bold(), err.code, err.message);
            return Ok(ExitCode::from(1));
        }
    };

    println!(
        "{} {} ({}ch) -> {} ({}ch)",
        "Plan:".cyan().bold(),
        plan.from,
        plan.from_channels,
        plan.to,
        plan.to_channels
    );
    println!("  {}: {}", "should_downmix".dimmed(), plan.should_downmix);
    println!("  {}: {}", "should_upmix".dimmed(), plan.should_upmix);
    match plan.method {
        Some(method) => println!("  {}: {} ({})", "operation".dimmed(), plan.operation, method),
        None => println!("  {}: {}", "operation".dimmed(), plan.operation),
    }
    if !plan.output_positions.is_empty() {
        let labels: Vec<&str> = plan.output_positions.iter().map(|c| c.label()).collect();
        println!("  {}: {}", "output".dimmed(), labels.join(" "));
    }

    Ok(ExitCode::SUCCESS)
}
