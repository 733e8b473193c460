use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Duration;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tf_cli::commands::{adjust, round, util};
use tf_cli::{Cli, Commands, Config};

/// Resolves the rounding interval from the command line, falling back to config.
fn resolve_interval(config_path: Option<&Path>, flag: Option<&str>) -> Result<Duration> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let raw = flag.unwrap_or(&config.interval);
    util::parse_interval(raw).context("invalid rounding interval")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let stdout = io::stdout();
    match &cli.command {
        Some(Commands::Round {
            timestamp,
            interval,
        }) => {
            let interval = resolve_interval(cli.config.as_deref(), interval.as_deref())?;
            round::run(&mut stdout.lock(), timestamp, interval)?;
        }
        Some(Commands::Adjust {
            file,
            interval,
            json,
        }) => {
            let interval = resolve_interval(cli.config.as_deref(), interval.as_deref())?;
            if let Some(path) = file {
                let file = File::open(path)
                    .with_context(|| format!("failed to open {}", path.display()))?;
                adjust::run(BufReader::new(file), &mut stdout.lock(), interval, *json)?;
            } else {
                adjust::run(io::stdin().lock(), &mut stdout.lock(), interval, *json)?;
            }
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
