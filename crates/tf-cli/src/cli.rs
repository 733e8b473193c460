//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Timesheet rounding.
///
/// Rounds timesheet entries to a fixed interval while keeping adjacent
/// entries joined at a shared boundary.
#[derive(Debug, Parser)]
#[command(name = "tf", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Round a single timestamp to the interval grid.
    Round {
        /// Timestamp to round (e.g., 2019-07-29T13:17:30).
        timestamp: String,

        /// Rounding interval (e.g., 5m, 15m, 1h, 90s). Overrides config.
        #[arg(short, long)]
        interval: Option<String>,
    },

    /// Round and reconcile a timesheet read as JSON lines.
    ///
    /// Each line is an object with `start`, `end` and an optional
    /// `description`.
    Adjust {
        /// Timesheet file. Reads stdin when omitted.
        file: Option<PathBuf>,

        /// Rounding interval (e.g., 5m, 15m, 1h, 90s). Overrides config.
        #[arg(short, long)]
        interval: Option<String>,

        /// Output JSON lines instead of a table.
        #[arg(long)]
        json: bool,
    },
}
