//! Layouts command implementation
//!
//! Lists every channel layout the mixer knows, with its channel order.

use anyhow::Result;
use chanmix::{Channel, ChannelLayout};
use colored::Colorize;
use serde::Serialize;
use std::process::ExitCode;

use super::json_output::CommandOutput;

/// One row of the layout listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutInfo {
    /// Layout name as accepted by `--from` / `--to`
    pub name: &'static str,
    /// Channel count (0 for unsupported)
    pub channels: usize,
    /// Channel roles in interleaved order
    pub positions: Vec<Channel>,
}

/// Describes every known layout.
pub fn list_layouts() -> Vec<LayoutInfo> {
    ChannelLayout::ALL
        .iter()
        .map(|layout| LayoutInfo {
            name: layout.name(),
            channels: layout.channel_count(),
            positions: layout.channels().to_vec(),
        })
        .collect()
}

/// Run the layouts command
pub fn run(json_output: bool) -> Result<ExitCode> {
    let layouts = list_layouts();

    if json_output {
        return CommandOutput::success(layouts).emit();
    }

    println!("{}", "Channel layouts:".cyan().bold());
    for info in &layouts {
        let positions = if info.positions.is_empty() {
            "(any channel count)".dimmed().to_string()
        } else {
            info.positions
                .iter()
                .map(|c| c.label())
                .collect::<Vec<_>>()
                .join(" ")
        };
        println!("  {:<14} {:>2}  {}", info.name.bold(), info.channels, positions);
    }

    Ok(ExitCode::SUCCESS)
}
