//! Shift configuration model.
//!
//! A [`ShiftConfig`] describes the standard working window an employee is
//! expected to keep. It is the baseline for lateness, early-leave, and
//! overtime decisions.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The standard shift window assigned to an employee.
///
/// When `standard_end` is not after `standard_start` the shift is treated as
/// overnight and ends on the following calendar day.
///
/// # Example
///
/// ```
/// use hr_engine::models::ShiftConfig;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let shift = ShiftConfig {
///     name: "General".to_string(),
///     standard_start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     standard_end: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     standard_hours_per_day: Decimal::new(8, 0),
/// };
/// assert!(shift.validate().is_ok());
/// assert!(!shift.is_overnight());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftConfig {
    /// Human-readable name of the shift.
    #[serde(default)]
    pub name: String,
    /// Expected clock-in time.
    pub standard_start: NaiveTime,
    /// Expected clock-out time.
    pub standard_end: NaiveTime,
    /// Hours in a standard working day; hours beyond this are overtime.
    pub standard_hours_per_day: Decimal,
}

/// Scheduled start and end instants of a shift on a specific date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftWindow {
    /// Scheduled start of the shift.
    pub start: NaiveDateTime,
    /// Scheduled end of the shift.
    pub end: NaiveDateTime,
}

impl ShiftConfig {
    /// Returns true if the shift crosses midnight.
    pub fn is_overnight(&self) -> bool {
        self.standard_end <= self.standard_start
    }

    /// Returns the scheduled window of this shift for the given date.
    ///
    /// # Example
    ///
    /// ```
    /// use hr_engine::models::ShiftConfig;
    /// use chrono::{NaiveDate, NaiveTime};
    /// use rust_decimal::Decimal;
    ///
    /// let night = ShiftConfig {
    ///     name: "Night".to_string(),
    ///     standard_start: NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
    ///     standard_end: NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
    ///     standard_hours_per_day: Decimal::new(8, 0),
    /// };
    /// let window = night.window_for(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap());
    /// assert_eq!(window.end.date(), NaiveDate::from_ymd_opt(2026, 1, 16).unwrap());
    /// ```
    pub fn window_for(&self, date: NaiveDate) -> ShiftWindow {
        let start = date.and_time(self.standard_start);
        let same_day_end = date.and_time(self.standard_end);
        let end = if self.is_overnight() {
            same_day_end
                .checked_add_signed(Duration::days(1))
                .unwrap_or(same_day_end)
        } else {
            same_day_end
        };
        ShiftWindow { start, end }
    }

    /// Checks that the configuration is usable for calculation.
    pub fn validate(&self) -> EngineResult<()> {
        if self.standard_start == self.standard_end {
            return Err(EngineError::InvalidShiftConfig {
                field: "standard_end".to_string(),
                message: "must differ from standard_start".to_string(),
            });
        }
        if self.standard_hours_per_day <= Decimal::ZERO {
            return Err(EngineError::InvalidShiftConfig {
                field: "standard_hours_per_day".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        if self.standard_hours_per_day > Decimal::new(24, 0) {
            return Err(EngineError::InvalidShiftConfig {
                field: "standard_hours_per_day".to_string(),
                message: "cannot exceed 24 hours".to_string(),
            });
        }
        Ok(())
    }
}
