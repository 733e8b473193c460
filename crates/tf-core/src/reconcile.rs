//! Boundary reconciliation for consecutive time periods.
//!
//! Rounding each boundary on its own can open a gap or an overlap between
//! entries that were meant to touch (11:47:30 rounds to 11:50 while the next
//! entry's 11:45:00 stays put). Reconciliation snaps an entry's end and the
//! following entry's start to one shared grid point.
//!
//! # Algorithm Summary
//!
//! 1. Round the first period's start; this is the running cursor.
//! 2. For each adjacent pair, reconcile `end[i]` with `start[i + 1]` into a
//!    single boundary, emit `cursor..boundary`, and carry the boundary forward.
//! 3. Emit `cursor..round(end[last])` for the final period.
//!
//! A single period is the case where step 2 never runs.

use chrono::{Duration, NaiveDateTime};

use crate::rounding::{ensure_non_negative, round_to_interval};
use crate::{AdjustError, TimePeriod};

/// Rounds every boundary of `periods` to `interval`, forcing adjacent
/// boundaries to agree.
///
/// Periods must already be sorted by start. The output has the same length
/// and order as the input, and each output period ends exactly where the next
/// one starts.
///
/// # Errors
///
/// - [`AdjustError::NegativeInterval`] if `interval` is negative, even when
///   `periods` is empty.
/// - [`AdjustError::OutOfRange`] if a boundary rounds past the last
///   representable date.
/// - [`AdjustError::BoundaryTooFar`] if any end is at least `interval` away
///   from the following start. No partial result is returned.
pub fn reconcile(
    periods: &[TimePeriod],
    interval: Duration,
) -> Result<Vec<TimePeriod>, AdjustError> {
    ensure_non_negative(interval)?;

    let (Some(first), Some(last)) = (periods.first(), periods.last()) else {
        return Ok(Vec::new());
    };

    let start = round_to_interval(first.start, interval)?;
    let (mut adjusted, cursor) = periods.windows(2).enumerate().try_fold(
        (Vec::with_capacity(periods.len()), start),
        |(mut adjusted, cursor), (index, pair)| {
            let boundary = reconcile_boundary(pair[0].end, pair[1].start, interval)
                .inspect_err(|err| {
                    tracing::warn!(entry = index, error = %err, "cannot reconcile boundary");
                })?;
            adjusted.push(TimePeriod::new(cursor, boundary));
            Ok::<_, AdjustError>((adjusted, boundary))
        },
    )?;
    adjusted.push(TimePeriod::new(cursor, round_to_interval(last.end, interval)?));

    tracing::debug!(
        periods = adjusted.len(),
        interval = %interval,
        "reconciled time periods"
    );
    Ok(adjusted)
}

/// Picks the single grid point shared by an entry's `end` and the next
/// entry's `next_start`.
///
/// When both round to the same point that point wins. Otherwise the pair
/// straddles a grid line and the candidate with the smaller summed distance
/// to both raw instants is chosen; an exact tie goes to the candidate rounded
/// from the earlier instant.
///
/// # Errors
///
/// - [`AdjustError::NegativeInterval`] if `interval` is negative.
/// - [`AdjustError::BoundaryTooFar`] if `|end - next_start| >= interval`.
pub fn reconcile_boundary(
    end: NaiveDateTime,
    next_start: NaiveDateTime,
    interval: Duration,
) -> Result<NaiveDateTime, AdjustError> {
    ensure_non_negative(interval)?;

    let gap = (end - next_start).abs();
    if gap >= interval {
        return Err(AdjustError::BoundaryTooFar {
            end,
            next_start,
            gap,
            interval,
        });
    }

    let (lo, hi) = if end <= next_start {
        (end, next_start)
    } else {
        (next_start, end)
    };

    let rounded_lo = round_to_interval(lo, interval)?;
    let rounded_hi = round_to_interval(hi, interval)?;
    if rounded_lo == rounded_hi {
        return Ok(rounded_lo);
    }

    let cost = |candidate: NaiveDateTime| (lo - candidate).abs() + (hi - candidate).abs();
    if cost(rounded_lo) <= cost(rounded_hi) {
        Ok(rounded_lo)
    } else {
        Ok(rounded_hi)
    }
}
