//! Request types for the HR Engine API.
//!
//! This module defines the JSON request structures for every endpoint and
//! their conversion into validated domain types.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{
    Employee, Holiday, LeaveRecord, LeaveStatus, LeaveType, PayPeriod, SalaryConfig, SalaryType,
    ShiftConfig, TimeEntry,
};

/// Request body for the `/attendance/status` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceStatusRequest {
    /// Code of a configured shift.
    #[serde(default)]
    pub shift_code: Option<String>,
    /// An inline shift definition; takes precedence over `shift_code`.
    #[serde(default)]
    pub shift: Option<ShiftRequest>,
    /// The day's time entry, if the employee clocked in.
    #[serde(default)]
    pub entry: Option<TimeEntryRequest>,
    /// The evaluation instant.
    pub now: NaiveDateTime,
}

/// Request body for the `/payroll/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// Unique identifier for the employee.
    pub employee_id: String,
    /// The employee's salary configuration.
    #[serde(default)]
    pub salary: Option<SalaryRequest>,
    /// Code of a configured shift.
    #[serde(default)]
    pub shift_code: Option<String>,
    /// An inline shift definition; takes precedence over `shift_code`.
    #[serde(default)]
    pub shift: Option<ShiftRequest>,
    /// The pay period to aggregate.
    pub pay_period: PayPeriodRequest,
    /// Time entries recorded in the period.
    #[serde(default)]
    pub entries: Vec<TimeEntryRequest>,
    /// The employee's leave records.
    #[serde(default)]
    pub leave_records: Vec<LeaveRecordRequest>,
    /// The evaluation instant.
    pub now: NaiveDateTime,
}

/// Request body for the `/events/upcoming` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpcomingEventsRequest {
    /// Employees to project events for.
    pub employees: Vec<EmployeeRequest>,
    /// The reference date.
    pub today: NaiveDate,
    /// Window size in days, inclusive of `today`.
    pub days_ahead: i64,
}

/// Request body for the `/leave/balance` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveBalanceRequest {
    /// Calendar year to report on.
    pub year: i32,
    /// The employee's leave records.
    #[serde(default)]
    pub leave_records: Vec<LeaveRecordRequest>,
}

/// Shift definition in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftRequest {
    /// Display name of the shift.
    #[serde(default)]
    pub name: String,
    /// Scheduled start time of day.
    pub standard_start: NaiveTime,
    /// Scheduled end time of day.
    pub standard_end: NaiveTime,
    /// Standard hours in a working day.
    pub standard_hours_per_day: Decimal,
}

/// Time entry in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeEntryRequest {
    /// The attendance date.
    pub date: NaiveDate,
    /// Clock-in instant.
    pub time_in: NaiveDateTime,
    /// Clock-out instant, absent while still clocked in.
    #[serde(default)]
    pub time_out: Option<NaiveDateTime>,
}

/// Salary configuration in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryRequest {
    /// Whether `base_amount` is hourly or monthly.
    pub salary_type: SalaryType,
    /// Hourly rate or monthly salary.
    pub base_amount: Decimal,
    /// Multiplier applied to the hourly rate for overtime.
    pub overtime_multiplier: Decimal,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Flat deductions for the period.
    #[serde(default)]
    pub other_deductions: Decimal,
}

/// Pay period in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayPeriodRequest {
    /// First day of the period (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the period (inclusive).
    pub end_date: NaiveDate,
    /// Holidays within the period.
    #[serde(default)]
    pub holidays: Vec<HolidayRequest>,
}

/// Holiday in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayRequest {
    /// The holiday date.
    pub date: NaiveDate,
    /// The holiday name.
    #[serde(default)]
    pub name: String,
}

/// Leave record in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRecordRequest {
    /// Unique identifier for the leave record.
    pub id: String,
    /// The kind of leave.
    pub leave_type: LeaveType,
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// Leave days; may be fractional.
    pub days: Decimal,
    /// Approval state.
    pub status: LeaveStatus,
}

/// Employee in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Date of birth, if known.
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    /// Date of joining, if known.
    #[serde(default)]
    pub join_date: Option<NaiveDate>,
}

impl TryFrom<ShiftRequest> for ShiftConfig {
    type Error = EngineError;

    fn try_from(req: ShiftRequest) -> EngineResult<Self> {
        let shift = ShiftConfig {
            name: req.name,
            standard_start: req.standard_start,
            standard_end: req.standard_end,
            standard_hours_per_day: req.standard_hours_per_day,
        };
        shift.validate()?;
        Ok(shift)
    }
}

impl From<TimeEntryRequest> for TimeEntry {
    fn from(req: TimeEntryRequest) -> Self {
        TimeEntry {
            date: req.date,
            time_in: req.time_in,
            time_out: req.time_out,
        }
    }
}

impl TryFrom<SalaryRequest> for SalaryConfig {
    type Error = EngineError;

    fn try_from(req: SalaryRequest) -> EngineResult<Self> {
        let salary = SalaryConfig {
            salary_type: req.salary_type,
            base_amount: req.base_amount,
            overtime_multiplier: req.overtime_multiplier,
            currency: req.currency,
            other_deductions: req.other_deductions,
        };
        salary.validate()?;
        Ok(salary)
    }
}

impl TryFrom<PayPeriodRequest> for PayPeriod {
    type Error = EngineError;

    fn try_from(req: PayPeriodRequest) -> EngineResult<Self> {
        let period = PayPeriod {
            start_date: req.start_date,
            end_date: req.end_date,
            holidays: req.holidays.into_iter().map(Into::into).collect(),
        };
        period.validate()?;
        Ok(period)
    }
}

impl From<HolidayRequest> for Holiday {
    fn from(req: HolidayRequest) -> Self {
        Holiday {
            date: req.date,
            name: req.name,
        }
    }
}

impl TryFrom<LeaveRecordRequest> for LeaveRecord {
    type Error = EngineError;

    fn try_from(req: LeaveRecordRequest) -> EngineResult<Self> {
        let record = LeaveRecord {
            id: req.id,
            leave_type: req.leave_type,
            start_date: req.start_date,
            end_date: req.end_date,
            days: req.days,
            status: req.status,
        };
        record.validate()?;
        Ok(record)
    }
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            id: req.id,
            name: req.name,
            date_of_birth: req.date_of_birth,
            join_date: req.join_date,
        }
    }
}

/// Converts a list of leave record requests, failing on the first invalid one.
pub(crate) fn leave_records_from(
    requests: Vec<LeaveRecordRequest>,
) -> EngineResult<Vec<LeaveRecord>> {
    requests.into_iter().map(LeaveRecord::try_from).collect()
}
