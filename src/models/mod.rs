//! Core data models for the HR Engine.
//!
//! This module contains the validated domain types the calculation core
//! operates on, and the derived records it produces.

mod calculation_result;
mod daily_status;
mod employee;
mod event;
mod leave;
mod pay_period;
mod salary;
mod shift_config;
mod time_entry;

pub use calculation_result::{AuditWarning, PayrollResult};
pub use daily_status::{AttendanceDay, AttendanceStatus, DailyStatus, DataQualityFlag};
pub use employee::Employee;
pub use event::{EventKind, EventProjection};
pub use leave::{LeaveBalance, LeaveRecord, LeaveStatus, LeaveType};
pub use pay_period::{Holiday, PayPeriod};
pub use salary::{
    MAX_OVERTIME_MULTIPLIER, MAX_SALARY_AMOUNT, SalaryConfig, SalaryRecord, SalaryType,
};
pub use shift_config::{ShiftConfig, ShiftWindow};
pub use time_entry::TimeEntry;
