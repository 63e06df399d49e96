//! Mix command implementation
//!
//! Converts a WAV file from one channel layout to another.

use anyhow::Result;
use chanmix::{ChannelLayout, ChannelMixer, MixReport, StreamParams};
use colored::Colorize;
use serde::Serialize;
use std::path::Path;
use std::process::ExitCode;
use tracing::{debug, info};

use super::json_output::{error_codes, CommandOutput, JsonError};
use crate::wav::{read_wav, write_wav, WavAudio};

/// Options for one mix run.
#[derive(Debug, Clone)]
pub struct MixArgs<'a> {
    /// Input WAV path
    pub input: &'a str,
    /// Output WAV path
    pub output: &'a str,
    /// Output layout
    pub to: ChannelLayout,
    /// Input layout; guessed from the channel count when absent
    pub from: Option<ChannelLayout>,
    /// Output channel count; required when `to` is unsupported
    pub channels: Option<usize>,
}

/// What a successful mix did.
#[derive(Debug, Clone, Serialize)]
pub struct MixSummary {
    /// Input WAV path
    pub input: String,
    /// Output WAV path
    pub output: String,
    /// Input layout
    pub from: ChannelLayout,
    /// Output layout
    pub to: ChannelLayout,
    /// Input channel count
    pub input_channels: usize,
    /// Output channel count
    pub output_channels: usize,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Mixer report
    pub report: MixReport,
}

/// Run the mix command
///
/// # Returns
/// Exit code: 0 on success, 1 if the file could not be mixed
pub fn run(args: &MixArgs<'_>, json_output: bool) -> Result<ExitCode> {
    let outcome = mix_file(args);

    if json_output {
        return match outcome {
            Ok(summary) => CommandOutput::success(summary).emit(),
            Err(err) => CommandOutput::<MixSummary>::failure(vec![err]).emit(),
        };
    }

    match outcome {
        Ok(summary) => {
            print_summary(&summary);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("{} [{}] {}", "error".red().bold(), err.code, err.message);
            Ok(ExitCode::from(1))
        }
    }
}

/// Reads, mixes and writes one file.
pub fn mix_file(args: &MixArgs<'_>) -> Result<MixSummary, JsonError> {
    let audio = read_wav(Path::new(args.input))
        .map_err(|e| JsonError::new(error_codes::WAV_READ, format!("{:#}", e)))?;

    let from = args
        .from
        .unwrap_or_else(|| ChannelLayout::default_for_channels(audio.channels));
    let out_channels = match (args.channels, args.to) {
        (Some(channels), _) => channels,
        (None, ChannelLayout::Unsupported) => {
            return Err(JsonError::new(
                error_codes::MISSING_OPTION,
                "--channels is required when the output layout is unsupported",
            ));
        }
        (None, to) => to.channel_count(),
    };

    let stream = StreamParams::float(audio.sample_rate, from).with_channels(audio.channels);
    let target = StreamParams::float(audio.sample_rate, args.to).with_channels(out_channels);
    debug!(
        "Stream: {} ({} channels), mixer: {} ({} channels), {} Hz",
        stream.layout, stream.channels, target.layout, target.channels, audio.sample_rate
    );

    let mixer = ChannelMixer::new(stream, target)?;
    debug!("Operation: {}", mixer.operation());
    if let Some(method) = mixer.downmix_method() {
        debug!("Downmix method: {}", method);
    }

    let (samples, report) = mixer.process_to_vec(&audio.samples)?;

    let mixed = WavAudio {
        samples,
        channels: out_channels,
        sample_rate: audio.sample_rate,
    };
    write_wav(Path::new(args.output), &mixed)
        .map_err(|e| JsonError::new(error_codes::WAV_WRITE, format!("{:#}", e)))?;

    info!(
        "Mixed {} frames from {} to {} into {}",
        report.frames, from, args.to, args.output
    );

    Ok(MixSummary {
        input: args.input.to_string(),
        output: args.output.to_string(),
        from,
        to: args.to,
        input_channels: audio.channels,
        output_channels: out_channels,
        sample_rate: audio.sample_rate,
        report,
    })
}

fn print_summary(summary: &MixSummary) {
    println!("{} {}", "Mixing:".cyan().bold(), summary.input);
    println!(
        "  {} ({}ch) -> {} ({}ch) at {} Hz",
        summary.from,
        summary.input_channels,
        summary.to,
        summary.output_channels,
        summary.sample_rate
    );
    match summary.report.method {
        Some(method) => println!("  {}: {} ({})", "operation".dimmed(), summary.report.operation, method),
        None => println!("  {}: {}", "operation".dimmed(), summary.report.operation),
    }
    println!("  {}: {}", "frames".dimmed(), summary.report.frames);
    println!("{} {}", "Wrote:".green().bold(), summary.output);
}
