//! Time arithmetic primitives.
//!
//! Pure comparisons of clock-in/clock-out instants against a scheduled shift
//! window, plus elapsed and overtime hour computation. Everything here is
//! total: no input makes these functions fail.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const SECONDS_PER_HOUR: i64 = 3600;

/// The outcome of comparing a clock-in to the scheduled start.
///
/// # Example
///
/// ```
/// use hr_engine::calculation::{is_late, LatenessCheck};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// let check = is_late(date.and_hms_opt(9, 15, 0).unwrap(), date.and_hms_opt(9, 0, 0).unwrap());
/// assert_eq!(check, LatenessCheck { is_late: true, late_by_minutes: 15 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatenessCheck {
    /// Whether the clock-in was strictly after the scheduled start.
    pub is_late: bool,
    /// Whole minutes late, floored; zero when on time.
    pub late_by_minutes: i64,
}

/// Checks whether a clock-in happened after the scheduled start.
///
/// An employee is late iff `time_in` is strictly after `scheduled_start`.
/// Lateness under a minute still counts as late but reports zero minutes.
pub fn is_late(time_in: NaiveDateTime, scheduled_start: NaiveDateTime) -> LatenessCheck {
    if time_in > scheduled_start {
        LatenessCheck {
            is_late: true,
            late_by_minutes: (time_in - scheduled_start).num_minutes(),
        }
    } else {
        LatenessCheck {
            is_late: false,
            late_by_minutes: 0,
        }
    }
}

/// Checks whether a clock-out happened before the scheduled end.
///
/// # Example
///
/// ```
/// use hr_engine::calculation::is_early_leave;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// let end = date.and_hms_opt(17, 0, 0).unwrap();
/// assert!(is_early_leave(date.and_hms_opt(16, 59, 0).unwrap(), end));
/// assert!(!is_early_leave(end, end));
/// ```
pub fn is_early_leave(time_out: NaiveDateTime, scheduled_end: NaiveDateTime) -> bool {
    time_out < scheduled_end
}

/// Returns the hours between `start` and `end`.
///
/// Computed from whole seconds. An `end` before `start` yields zero.
///
/// # Example
///
/// ```
/// use hr_engine::calculation::elapsed_hours;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// let hours = elapsed_hours(date.and_hms_opt(9, 0, 0).unwrap(), date.and_hms_opt(18, 30, 0).unwrap());
/// assert_eq!(hours, Decimal::new(95, 1));
/// ```
pub fn elapsed_hours(start: NaiveDateTime, end: NaiveDateTime) -> Decimal {
    if end <= start {
        return Decimal::ZERO;
    }
    let seconds = (end - start).num_seconds();
    Decimal::from(seconds) / Decimal::from(SECONDS_PER_HOUR)
}

/// Returns the hours worked beyond the standard day, never negative.
///
/// # Example
///
/// ```
/// use hr_engine::calculation::overtime_hours;
/// use rust_decimal::Decimal;
///
/// assert_eq!(overtime_hours(Decimal::new(95, 1), Decimal::new(8, 0)), Decimal::new(15, 1));
/// assert_eq!(overtime_hours(Decimal::new(6, 0), Decimal::new(8, 0)), Decimal::ZERO);
/// ```
pub fn overtime_hours(worked_hours: Decimal, standard_hours: Decimal) -> Decimal {
    if worked_hours > standard_hours {
        worked_hours - standard_hours
    } else {
        Decimal::ZERO
    }
}
