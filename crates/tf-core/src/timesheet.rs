//! Timesheet entries and whole-sheet adjustment.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::{AdjustError, TimePeriod, reconcile};

/// A single line on a timesheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    #[serde(flatten)]
    pub period: TimePeriod,

    /// Free-form note describing the work, carried through adjustment untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TimeEntry {
    pub const fn new(period: TimePeriod) -> Self {
        Self {
            period,
            description: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// An ordered collection of time entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSheet {
    pub entries: Vec<TimeEntry>,
}

impl TimeSheet {
    pub const fn new(entries: Vec<TimeEntry>) -> Self {
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns the entries ordered by start time.
    ///
    /// The sort is stable, so entries starting at the same instant keep their
    /// insertion order.
    pub fn sorted_entries(&self) -> Vec<&TimeEntry> {
        let mut entries: Vec<&TimeEntry> = self.entries.iter().collect();
        entries.sort_by_key(|entry| entry.period.start);
        entries
    }

    /// Sum of every entry's duration.
    pub fn total_duration(&self) -> Duration {
        self.entries
            .iter()
            .fold(Duration::zero(), |total, entry| total + entry.period.duration())
    }

    /// Builds a new timesheet with every entry rounded to `interval` and
    /// adjacent entries meeting at a shared boundary.
    ///
    /// Entries are sorted by start first. Descriptions follow their entries.
    /// `self` is left untouched.
    pub fn adjusted(&self, interval: Duration) -> Result<Self, AdjustError> {
        let sorted = self.sorted_entries();
        let periods: Vec<TimePeriod> = sorted.iter().map(|entry| entry.period).collect();
        let adjusted = reconcile(&periods, interval)?;

        let entries = sorted
            .into_iter()
            .zip(adjusted)
            .map(|(entry, period)| TimeEntry {
                period,
                description: entry.description.clone(),
            })
            .collect();
        Ok(Self { entries })
    }
}

impl FromIterator<TimeEntry> for TimeSheet {
    fn from_iter<I: IntoIterator<Item = TimeEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
