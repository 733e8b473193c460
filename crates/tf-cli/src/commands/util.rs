//! Shared utilities for CLI commands.

use std::sync::LazyLock;

use anyhow::Context;
use chrono::{Duration, NaiveDateTime};
use regex::Regex;

/// Pre-compiled regex for compound intervals such as `1h30m` or `90s`.
static INTERVAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:(\d+)h)?(?:(\d+)m)?(?:(\d+)s)?$").unwrap());

/// Upper bound for parsed intervals (one week in seconds).
const MAX_INTERVAL_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Accepted timestamp layouts, tried in order.
const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Output layout for timestamps.
pub const TIMESTAMP_DISPLAY: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a rounding interval.
///
/// Supports:
/// - Units: "30s", "5m", "1h"
/// - Compounds: "1h30m", "2m30s"
/// - Bare numbers as minutes: "15"
/// - "0" to disable rounding
pub fn parse_interval(s: &str) -> anyhow::Result<Duration> {
    let trimmed = s.trim().to_ascii_lowercase();

    if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        let minutes: i64 = trimmed
            .parse()
            .with_context(|| format!("interval out of range: {s}"))?;
        return checked_interval(minutes.checked_mul(60), s);
    }

    let Some(caps) = INTERVAL_RE.captures(&trimmed) else {
        anyhow::bail!("Invalid interval: {s}. Use e.g. 5m, 15m, 1h, 1h30m or 90s");
    };
    if caps.iter().skip(1).all(|group| group.is_none()) {
        anyhow::bail!("Invalid interval: {s}. Use e.g. 5m, 15m, 1h, 1h30m or 90s");
    }

    let component = |idx: usize| -> anyhow::Result<i64> {
        caps.get(idx).map_or(Ok(0), |m| {
            m.as_str()
                .parse::<i64>()
                .with_context(|| format!("interval out of range: {s}"))
        })
    };
    let hours = component(1)?;
    let minutes = component(2)?;
    let seconds = component(3)?;

    let total = hours
        .checked_mul(3600)
        .and_then(|h| minutes.checked_mul(60).and_then(|m| h.checked_add(m)))
        .and_then(|hm| hm.checked_add(seconds));
    checked_interval(total, s)
}

fn checked_interval(seconds: Option<i64>, input: &str) -> anyhow::Result<Duration> {
    match seconds {
        Some(seconds) if seconds <= MAX_INTERVAL_SECONDS => Ok(Duration::seconds(seconds)),
        _ => anyhow::bail!("Interval too large: {input} (maximum is one week)"),
    }
}

/// Parse a naive local timestamp.
///
/// Supports "2019-07-29T13:17:30", "2019-07-29 13:17:30", optional fractional
/// seconds, and minute precision ("2019-07-29T13:17").
pub fn parse_timestamp(s: &str) -> anyhow::Result<NaiveDateTime> {
    let trimmed = s.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .with_context(|| {
            format!("Invalid timestamp: {s}. Use e.g. 2019-07-29T13:17:30 or 2019-07-29 13:17")
        })
}

/// Formats a duration as "Xh Ym", "Xm", with a trailing "Zs" when seconds remain.
pub fn format_duration(duration: Duration) -> String {
    let sign = if duration < Duration::zero() { "-" } else { "" };
    let total_seconds = duration.num_seconds().abs();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    let base = if hours >= 1 {
        format!("{sign}{hours}h {minutes}m")
    } else {
        format!("{sign}{minutes}m")
    };
    if seconds > 0 {
        format!("{base} {seconds}s")
    } else {
        base
    }
}
