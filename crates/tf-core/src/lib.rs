//! Core domain logic for timesheet rounding.
//!
//! This crate contains:
//! - Rounding: snapping a timestamp to an interval grid anchored at midnight
//! - Reconciliation: rounding consecutive periods so that each one ends
//!   exactly where the next begins
//! - Timesheets: entries with descriptions, sorted and adjusted as a whole

mod error;
mod period;
pub mod reconcile;
pub mod rounding;
mod timesheet;

pub use error::AdjustError;
pub use period::TimePeriod;
pub use reconcile::{reconcile, reconcile_boundary};
pub use rounding::{RoundToInterval, round_to_interval};
pub use timesheet::{TimeEntry, TimeSheet};
