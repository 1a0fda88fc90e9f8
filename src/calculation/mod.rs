//! Calculation logic for the HR Engine.
//!
//! This module contains the pure computation core: time arithmetic against a
//! shift window, daily and period attendance resolution, payroll aggregation,
//! leave balances, and birthday/anniversary projection. Nothing here reads a
//! clock or performs I/O; the current time is always passed in.

mod daily_status;
mod event_projection;
mod leave_balance;
mod payroll;
mod time_arithmetic;

pub use daily_status::{PeriodAttendance, resolve_period, resolve_status};
pub use event_projection::{
    days_until, next_occurrence, project_anniversaries, project_birthdays, years_completed,
};
pub use leave_balance::compute_leave_balances;
pub use payroll::{
    DEFAULT_WORKING_DAYS_PER_MONTH, LeaveDays, PayrollPolicy, compute_salary_record, hourly_rate,
    leave_days_in_period, try_compute_salary_record,
};
pub use time_arithmetic::{LatenessCheck, elapsed_hours, is_early_leave, is_late, overtime_hours};
