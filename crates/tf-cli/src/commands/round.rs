//! Round command for a single timestamp.

use std::io::Write;

use anyhow::{Context, Result};
use chrono::Duration;

use tf_core::RoundToInterval;

use super::util::{TIMESTAMP_DISPLAY, parse_timestamp};

pub fn run<W: Write>(writer: &mut W, timestamp: &str, interval: Duration) -> Result<()> {
    let instant = parse_timestamp(timestamp)?;
    let rounded = instant
        .round_to_interval(interval)
        .context("failed to round timestamp")?;
    tracing::debug!(%instant, %rounded, %interval, "rounded timestamp");

    writeln!(writer, "{}", rounded.format(TIMESTAMP_DISPLAY))?;
    Ok(())
}
