//! HTTP API module for the HR Engine.
//!
//! This module exposes attendance status, payroll, upcoming events and
//! leave balance computation as JSON endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AttendanceStatusRequest, EmployeeRequest, HolidayRequest, LeaveBalanceRequest,
    LeaveRecordRequest, PayPeriodRequest, PayrollRequest, SalaryRequest, ShiftRequest,
    TimeEntryRequest, UpcomingEventsRequest,
};
pub use response::{ApiError, UpcomingEventsResponse};
pub use state::AppState;
