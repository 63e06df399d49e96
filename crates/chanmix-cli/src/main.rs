//! chanmix CLI - Channel-layout mixing for WAV files
//!
//! This binary downmixes and upmixes WAV files between loudspeaker layouts
//! and explains which strategy the mixer picks for a pair of layouts.

use chanmix::ChannelLayout;
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use chanmix_cli::commands;
use chanmix_cli::commands::mix::MixArgs;

/// chanmix - Downmix and upmix audio between channel layouts
#[derive(Parser)]
#[command(name = "chanmix")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Log mixer decisions to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a WAV file to another channel layout
    Mix {
        /// Path to the input WAV file
        #[arg(short, long)]
        input: String,

        /// Path to the output WAV file (written as 32-bit float)
        #[arg(short, long)]
        output: String,

        /// Output layout (e.g., stereo, 2f2, 3f2-lfe, unsupported)
        #[arg(long)]
        to: ChannelLayout,

        /// Input layout (default: guessed from the channel count)
        #[arg(long)]
        from: Option<ChannelLayout>,

        /// Output channel count (default: the output layout's count)
        #[arg(long)]
        channels: Option<usize>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Show how one layout would be mixed into another
    Plan {
        /// Input layout
        #[arg(long)]
        from: ChannelLayout,

        /// Output layout
        #[arg(long)]
        to: ChannelLayout,

        /// Input channel count (default: the input layout's count)
        #[arg(long)]
        from_channels: Option<usize>,

        /// Output channel count (default: the output layout's count)
        #[arg(long)]
        to_channels: Option<usize>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List the known channel layouts
    Layouts {
        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Mix {
            input,
            output,
            to,
            from,
            channels,
            json,
        } => commands::mix::run(
            &MixArgs {
                input: &input,
                output: &output,
                to,
                from,
                channels,
            },
            json,
        ),
        Commands::Plan {
            from,
            to,
            from_channels,
            to_channels,
            json,
        } => commands::plan::run(from, to, from_channels, to_channels, json),
        Commands::Layouts { json } => commands::layouts::run(json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_layout_names() {
        let cli = Cli::try_parse_from([
            "chanmix", "mix", "-i", "in.wav", "-o", "out.wav", "--to", "2F2_LFE", "--from",
            "3f2-lfe",
        ])
        .unwrap();
        match cli.command {
            Commands::Mix { to, from, .. } => {
                assert_eq!(to, ChannelLayout::TwoF2Lfe);
                assert_eq!(from, Some(ChannelLayout::ThreeF2Lfe));
            }
            _ => panic!("expected mix"),
        }
    }

    #[test]
    fn test_rejects_unknown_layout() {
        assert!(Cli::try_parse_from(["chanmix", "plan", "--from", "9.1", "--to", "stereo"]).is_err());
    }
}
