//! Adjust command for rounding and reconciling a whole timesheet.
//!
//! Input is JSON lines, one entry per line:
//!
//! ```text
//! {"start":"2019-07-29T10:43","end":"2019-07-29 11:47:00","description":"standup"}
//! ```
//!
//! Output is a table (default) or the adjusted entries as JSON lines.

use std::fmt::Write as _;
use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use chrono::Duration;
use serde::Deserialize;

use tf_core::{TimeEntry, TimePeriod, TimeSheet};

use super::util::{TIMESTAMP_DISPLAY, format_duration, parse_timestamp};

pub fn run<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    interval: Duration,
    json: bool,
) -> Result<()> {
    let sheet = parse_entries(reader)?;
    tracing::debug!(entries = sheet.len(), %interval, "parsed timesheet");

    let adjusted = sheet
        .adjusted(interval)
        .context("failed to adjust timesheet")?;

    let output = if json {
        format_timesheet_json(&adjusted)?
    } else {
        format_timesheet(&adjusted)
    };
    write!(writer, "{output}")?;
    Ok(())
}

/// Parses a JSON lines timesheet. Blank lines are skipped.
pub fn parse_entries<R: BufRead>(reader: R) -> Result<TimeSheet> {
    let mut entries = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read line {}", idx + 1))?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let parsed: InputEntry = serde_json::from_str(trimmed)
            .with_context(|| format!("invalid JSON on line {}", idx + 1))?;
        let entry = parsed
            .into_entry()
            .with_context(|| format!("invalid entry on line {}", idx + 1))?;
        entries.push(entry);
    }
    Ok(TimeSheet::new(entries))
}

#[derive(Debug, Deserialize)]
struct InputEntry {
    start: String,
    end: String,
    #[serde(default)]
    description: Option<String>,
}

impl InputEntry {
    fn into_entry(self) -> Result<TimeEntry> {
        let start = parse_timestamp(&self.start).context("invalid start")?;
        let end = parse_timestamp(&self.end).context("invalid end")?;
        let description = self.description.and_then(|value| {
            let trimmed = value.trim().to_string();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed)
            }
        });
        Ok(TimeEntry {
            period: TimePeriod::new(start, end),
            description,
        })
    }
}

/// Formats a timesheet as an aligned table followed by a total line.
pub fn format_timesheet(sheet: &TimeSheet) -> String {
    let mut output = String::new();

    if sheet.is_empty() {
        writeln!(output, "No entries.").unwrap();
        return output;
    }

    writeln!(
        output,
        "{:<19}  {:<19}  {:<8}  DESCRIPTION",
        "START", "END", "DURATION"
    )
    .unwrap();
    for entry in &sheet.entries {
        let line = format!(
            "{:<19}  {:<19}  {:<8}  {}",
            entry.period.start.format(TIMESTAMP_DISPLAY).to_string(),
            entry.period.end.format(TIMESTAMP_DISPLAY).to_string(),
            format_duration(entry.period.duration()),
            entry.description.as_deref().unwrap_or_default(),
        );
        writeln!(output, "{}", line.trim_end()).unwrap();
    }

    let noun = if sheet.len() == 1 { "entry" } else { "entries" };
    writeln!(output).unwrap();
    writeln!(
        output,
        "{} {noun}, total {}",
        sheet.len(),
        format_duration(sheet.total_duration())
    )
    .unwrap();
    output
}

/// Formats a timesheet as JSON lines, one entry per line.
pub fn format_timesheet_json(sheet: &TimeSheet) -> Result<String> {
    let mut output = String::new();
    for entry in &sheet.entries {
        let line = serde_json::to_string(entry).context("failed to encode entry")?;
        writeln!(output, "{line}").unwrap();
    }
    Ok(output)
}
