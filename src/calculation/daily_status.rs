//! Daily attendance status resolution.
//!
//! Turns zero or one [`TimeEntry`] for a date into a [`DailyStatus`], and a
//! period's worth of entries into one status per elapsed working day.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{
    AttendanceDay, AttendanceStatus, DailyStatus, DataQualityFlag, PayPeriod, ShiftConfig,
    TimeEntry,
};

use super::time_arithmetic::{elapsed_hours, is_early_leave, is_late, overtime_hours};

/// Resolves the attendance status for a single day.
///
/// - No entry: [`AttendanceStatus::NotClockedIn`].
/// - Clock-in only: [`AttendanceStatus::ClockedIn`] with lateness and the
///   hours elapsed until `now`.
/// - Clock-in and clock-out: [`AttendanceStatus::Completed`] with lateness,
///   early leave, total hours, and overtime against the standard day.
///
/// A clock-out before the clock-in yields zero hours and the
/// [`DataQualityFlag::InvertedTimeRange`] flag; a clock-in after `now` yields
/// zero elapsed hours and [`DataQualityFlag::ClockInAfterNow`]. The caller
/// decides what to do about flagged entries.
///
/// # Example
///
/// ```
/// use hr_engine::calculation::resolve_status;
/// use hr_engine::models::{AttendanceStatus, ShiftConfig, TimeEntry};
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let shift = ShiftConfig {
///     name: "General".to_string(),
///     standard_start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     standard_end: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     standard_hours_per_day: Decimal::new(8, 0),
/// };
/// let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// let entry = TimeEntry {
///     date,
///     time_in: date.and_hms_opt(9, 0, 0).unwrap(),
///     time_out: Some(date.and_hms_opt(18, 30, 0).unwrap()),
/// };
///
/// let status = resolve_status(Some(&entry), &shift, date.and_hms_opt(20, 0, 0).unwrap());
/// assert_eq!(status.status, AttendanceStatus::Completed);
/// assert_eq!(status.total_hours, Some(Decimal::new(95, 1)));
/// assert_eq!(status.overtime_hours, Decimal::new(15, 1));
/// ```
pub fn resolve_status(
    entry: Option<&TimeEntry>,
    shift: &ShiftConfig,
    now: NaiveDateTime,
) -> DailyStatus {
    let Some(entry) = entry else {
        return DailyStatus::not_clocked_in();
    };

    let window = shift.window_for(entry.date);
    let lateness = is_late(entry.time_in, window.start);
    let mut flags = Vec::new();

    match entry.time_out {
        None => {
            if entry.time_in > now {
                debug!(
                    date = %entry.date,
                    time_in = %entry.time_in,
                    now = %now,
                    "Clock-in is after current time"
                );
                flags.push(DataQualityFlag::ClockInAfterNow);
            }
            DailyStatus {
                status: AttendanceStatus::ClockedIn,
                is_late: lateness.is_late,
                late_by_minutes: lateness.late_by_minutes,
                is_early_leave: false,
                elapsed_hours: Some(elapsed_hours(entry.time_in, now)),
                total_hours: None,
                overtime_hours: Decimal::ZERO,
                flags,
            }
        }
        Some(time_out) => {
            if time_out < entry.time_in {
                debug!(
                    date = %entry.date,
                    time_in = %entry.time_in,
                    time_out = %time_out,
                    "Clock-out precedes clock-in"
                );
                flags.push(DataQualityFlag::InvertedTimeRange);
            }
            let total_hours = elapsed_hours(entry.time_in, time_out);
            DailyStatus {
                status: AttendanceStatus::Completed,
                is_late: lateness.is_late,
                late_by_minutes: lateness.late_by_minutes,
                is_early_leave: is_early_leave(time_out, window.end),
                elapsed_hours: None,
                total_hours: Some(total_hours),
                overtime_hours: overtime_hours(total_hours, shift.standard_hours_per_day),
                flags,
            }
        }
    }
}

/// Attendance resolved over a pay period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodAttendance {
    /// One status per working day up to and including today.
    pub days: Vec<AttendanceDay>,
    /// Dates of entries that did not contribute: outside the period, on a
    /// non-working day, in the future, or duplicating an earlier entry.
    pub ignored_entries: Vec<NaiveDate>,
}

impl PeriodAttendance {
    /// Returns the statuses without their dates.
    pub fn statuses(&self) -> Vec<DailyStatus> {
        self.days.iter().map(|day| day.status.clone()).collect()
    }
}

/// Resolves attendance for every elapsed working day of a period.
///
/// Working days after `now.date()` are not resolved yet. When several entries
/// share a date the first one wins and the rest are reported as ignored.
pub fn resolve_period(
    period: &PayPeriod,
    entries: &[TimeEntry],
    shift: &ShiftConfig,
    now: NaiveDateTime,
) -> PeriodAttendance {
    let today = now.date();
    let mut by_date: HashMap<NaiveDate, &TimeEntry> = HashMap::new();
    let mut ignored_entries = Vec::new();

    for entry in entries {
        if !period.is_working_day(entry.date) || entry.date > today {
            ignored_entries.push(entry.date);
            continue;
        }
        if by_date.contains_key(&entry.date) {
            ignored_entries.push(entry.date);
            continue;
        }
        by_date.insert(entry.date, entry);
    }

    let days = period
        .working_dates_between(period.start_date, today)
        .into_iter()
        .map(|date| AttendanceDay {
            date,
            status: resolve_status(by_date.get(&date).copied(), shift, now),
        })
        .collect();

    PeriodAttendance {
        days,
        ignored_entries,
    }
}
