//! Pay period and holiday models.
//!
//! This module contains the [`PayPeriod`] and [`Holiday`] types that define the
//! calendar a salary record is computed over. The holiday list is the
//! caller-supplied calendar: weekends are always excluded, holidays are
//! excluded when they fall inside the period.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A non-working day observed by the organisation.
///
/// # Example
///
/// ```
/// use hr_engine::models::Holiday;
/// use chrono::NaiveDate;
///
/// let holiday = Holiday {
///     date: NaiveDate::from_ymd_opt(2026, 12, 25).unwrap(),
///     name: "Christmas Day".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday.
    pub name: String,
}

/// An inclusive date range with its holidays.
///
/// # Example
///
/// ```
/// use hr_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// // February 2026 starts on a Sunday and has exactly four full weeks.
/// let period = PayPeriod {
///     start_date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 2, 28).unwrap(),
///     holidays: vec![],
/// };
/// assert_eq!(period.working_days(), 20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
    /// Holidays observed during the period.
    #[serde(default)]
    pub holidays: Vec<Holiday>,
}

impl PayPeriod {
    /// Checks if a given date falls within this pay period (inclusive).
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Checks if a given date is one of the period's holidays.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.iter().any(|h| h.date == date)
    }

    /// Checks if a given date is a business day of this period.
    ///
    /// Saturdays, Sundays, holidays and dates outside the period are not.
    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        self.contains_date(date)
            && !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
            && !self.is_holiday(date)
    }

    /// Returns every business day of the period in ascending order.
    pub fn working_dates(&self) -> Vec<NaiveDate> {
        self.working_dates_between(self.start_date, self.end_date)
    }

    /// Returns the business days of the period that fall within `from..=to`.
    pub fn working_dates_between(&self, from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
        let from = from.max(self.start_date);
        let to = to.min(self.end_date);
        if from > to {
            return vec![];
        }
        from.iter_days()
            .take_while(|date| *date <= to)
            .filter(|date| self.is_working_day(*date))
            .collect()
    }

    /// Returns the number of business days in the period.
    pub fn working_days(&self) -> u32 {
        self.working_dates().len() as u32
    }

    /// Checks that the period is well formed.
    pub fn validate(&self) -> EngineResult<()> {
        if self.end_date < self.start_date {
            return Err(EngineError::InvalidPayPeriod {
                message: format!(
                    "end date {} is before start date {}",
                    self.end_date, self.start_date
                ),
            });
        }
        Ok(())
    }
}
