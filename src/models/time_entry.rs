//! Time entry model.
//!
//! A [`TimeEntry`] is the raw clock-in/clock-out record an employee produces
//! for one working date.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A single clock-in/clock-out record for one employee on one date.
///
/// An absent `time_out` means the shift is still in progress.
///
/// # Example
///
/// ```
/// use hr_engine::models::TimeEntry;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// let entry = TimeEntry {
///     date,
///     time_in: date.and_hms_opt(9, 5, 0).unwrap(),
///     time_out: None,
/// };
/// assert!(entry.time_out.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    /// The working date this entry belongs to.
    pub date: NaiveDate,
    /// When the employee clocked in.
    pub time_in: NaiveDateTime,
    /// When the employee clocked out, if they have.
    #[serde(default)]
    pub time_out: Option<NaiveDateTime>,
}
