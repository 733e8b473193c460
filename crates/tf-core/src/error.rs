//! Error type shared by rounding and reconciliation.

use chrono::{Duration, NaiveDateTime};
use thiserror::Error;

/// Errors returned while rounding or reconciling time periods.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AdjustError {
    /// A negative rounding interval was supplied.
    #[error("rounding interval must not be negative, got {interval}")]
    NegativeInterval { interval: Duration },

    /// Rounding moved the instant past the last representable date.
    #[error("rounding {instant} to interval {interval} leaves the supported date range")]
    OutOfRange {
        instant: NaiveDateTime,
        interval: Duration,
    },

    /// An entry's end and the next entry's start are at least one interval apart.
    ///
    /// Snapping both to one grid point would hide a real gap or overlap, so the
    /// whole adjustment is rejected.
    #[error(
        "entry ending at {end} and entry starting at {next_start} are {gap} apart, \
         which is not less than the rounding interval {interval}"
    )]
    BoundaryTooFar {
        end: NaiveDateTime,
        next_start: NaiveDateTime,
        gap: Duration,
        interval: Duration,
    },
}
