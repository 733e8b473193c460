//! Time period value type.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A span of wall-clock time.
///
/// `start <= end` is expected but not enforced; rounding treats each boundary
/// independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimePeriod {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimePeriod {
    pub const fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Elapsed time from start to end. Negative for an inverted period.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}
