//! Leave records and leave balances.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Kind of leave taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    /// Paid annual leave.
    Paid,
    /// Paid sick leave.
    Sick,
    /// Leave without pay.
    Unpaid,
}

impl LeaveType {
    /// Returns true if the employee is paid while on this leave.
    pub fn is_paid(&self) -> bool {
        !matches!(self, LeaveType::Unpaid)
    }
}

/// Approval state of a leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    /// Awaiting a decision.
    Pending,
    /// Approved; counts against balances and payroll.
    Approved,
    /// Rejected; ignored everywhere.
    Rejected,
}

/// A leave request covering an inclusive date range.
///
/// `days` carries the number of leave days charged, which may be fractional
/// for half days.
///
/// # Example
///
/// ```
/// use hr_engine::models::{LeaveRecord, LeaveStatus, LeaveType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let leave = LeaveRecord {
///     id: "lv_001".to_string(),
///     leave_type: LeaveType::Sick,
///     start_date: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 1, 13).unwrap(),
///     days: Decimal::new(2, 0),
///     status: LeaveStatus::Approved,
/// };
/// assert!(leave.validate().is_ok());
/// assert!(leave.is_approved());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRecord {
    /// Unique identifier for the leave request.
    pub id: String,
    /// Kind of leave.
    pub leave_type: LeaveType,
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// Leave days charged.
    pub days: Decimal,
    /// Approval state.
    pub status: LeaveStatus,
}

impl LeaveRecord {
    /// Returns true if the leave was approved.
    pub fn is_approved(&self) -> bool {
        self.status == LeaveStatus::Approved
    }

    /// Returns true if the leave starts in the given calendar year.
    pub fn starts_in_year(&self, year: i32) -> bool {
        self.start_date.year() == year
    }

    /// Checks the record for inconsistent data.
    pub fn validate(&self) -> EngineResult<()> {
        if self.end_date < self.start_date {
            return Err(EngineError::InvalidLeaveRecord {
                id: self.id.clone(),
                message: "end_date is before start_date".to_string(),
            });
        }
        if self.days < Decimal::ZERO {
            return Err(EngineError::InvalidLeaveRecord {
                id: self.id.clone(),
                message: "days cannot be negative".to_string(),
            });
        }
        let calendar_days = (self.end_date - self.start_date).num_days() + 1;
        if self.days > Decimal::from(calendar_days) {
            return Err(EngineError::InvalidLeaveRecord {
                id: self.id.clone(),
                message: format!(
                    "days {} exceeds the {} calendar days from {} to {}",
                    self.days, calendar_days, self.start_date, self.end_date
                ),
            });
        }
        Ok(())
    }
}

/// Remaining allotment of one leave type for a year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveBalance {
    /// Kind of leave.
    pub leave_type: LeaveType,
    /// Days allotted for the year.
    pub allotted: Decimal,
    /// Approved days taken.
    pub used: Decimal,
    /// Days requested but not yet decided.
    pub pending: Decimal,
    /// `allotted - used`; negative when the allotment is overdrawn.
    pub remaining: Decimal,
}
