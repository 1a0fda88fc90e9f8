//! Derived attendance status for a single day.
//!
//! These types are produced by the daily status resolver and are never
//! persisted by this crate.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Where an employee stands for a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// No time entry exists for the day.
    NotClockedIn,
    /// The employee has clocked in but not out.
    ClockedIn,
    /// Both clock-in and clock-out are recorded.
    Completed,
}

impl AttendanceStatus {
    /// Returns true if the employee showed up for work.
    pub fn is_present(&self) -> bool {
        matches!(self, AttendanceStatus::ClockedIn | AttendanceStatus::Completed)
    }
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttendanceStatus::NotClockedIn => write!(f, "not_clocked_in"),
            AttendanceStatus::ClockedIn => write!(f, "clocked_in"),
            AttendanceStatus::Completed => write!(f, "completed"),
        }
    }
}

/// A data-quality problem detected while resolving a time entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataQualityFlag {
    /// The clock-out is earlier than the clock-in.
    InvertedTimeRange,
    /// The clock-in is later than the supplied current time.
    ClockInAfterNow,
}

impl DataQualityFlag {
    /// Stable code used when surfacing the flag as a warning.
    pub fn code(&self) -> &'static str {
        match self {
            DataQualityFlag::InvertedTimeRange => "INVERTED_TIME_RANGE",
            DataQualityFlag::ClockInAfterNow => "CLOCK_IN_AFTER_NOW",
        }
    }
}

/// The resolved attendance picture for one day.
///
/// `elapsed_hours` is only present while clocked in, `total_hours` only
/// once the day is completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyStatus {
    /// Attendance status for the day.
    pub status: AttendanceStatus,
    /// Whether the clock-in was after the scheduled start.
    pub is_late: bool,
    /// Whole minutes past the scheduled start, zero when on time.
    pub late_by_minutes: i64,
    /// Whether the clock-out was before the scheduled end.
    pub is_early_leave: bool,
    /// Hours since clock-in for an open shift.
    pub elapsed_hours: Option<Decimal>,
    /// Hours worked for a completed shift.
    pub total_hours: Option<Decimal>,
    /// Hours worked beyond the standard day.
    pub overtime_hours: Decimal,
    /// Data-quality problems found in the entry.
    #[serde(default)]
    pub flags: Vec<DataQualityFlag>,
}

impl DailyStatus {
    /// The status of a day without any time entry.
    pub fn not_clocked_in() -> Self {
        Self {
            status: AttendanceStatus::NotClockedIn,
            is_late: false,
            late_by_minutes: 0,
            is_early_leave: false,
            elapsed_hours: None,
            total_hours: None,
            overtime_hours: Decimal::ZERO,
            flags: vec![],
        }
    }
}

/// A [`DailyStatus`] tagged with the date it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceDay {
    /// The working date.
    pub date: NaiveDate,
    /// The resolved status for the date.
    #[serde(flatten)]
    pub status: DailyStatus,
}
