//! HTTP request handlers for the HR Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    PeriodAttendance, compute_leave_balances, project_anniversaries, project_birthdays,
    resolve_period, resolve_status, try_compute_salary_record,
};
use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditWarning, DataQualityFlag, Employee, PayPeriod, PayrollResult, SalaryConfig, SalaryRecord,
    ShiftConfig, TimeEntry,
};

use super::request::{
    AttendanceStatusRequest, LeaveBalanceRequest, PayrollRequest, ShiftRequest,
    UpcomingEventsRequest, leave_records_from,
};
use super::response::{ApiError, ApiErrorResponse, UpcomingEventsResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/attendance/status", post(attendance_status_handler))
        .route("/payroll/calculate", post(payroll_handler))
        .route("/events/upcoming", post(upcoming_events_handler))
        .route("/leave/balance", post(leave_balance_handler))
        .with_state(state)
}

/// Handler for POST /attendance/status.
///
/// Resolves one day's attendance for an optional time entry.
async fn attendance_status_handler(
    State(state): State<AppState>,
    payload: Result<Json<AttendanceStatusRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing attendance status request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let shift = match resolve_shift(
        state.config(),
        request.shift,
        request.shift_code.as_deref(),
    ) {
        Ok(shift) => shift,
        Err(err) => return error_response(correlation_id, err),
    };

    let entry: Option<TimeEntry> = request.entry.map(Into::into);
    let status = resolve_status(entry.as_ref(), &shift, request.now);

    info!(
        correlation_id = %correlation_id,
        status = %status.status,
        is_late = status.is_late,
        flags = status.flags.len(),
        "Attendance status resolved"
    );
    json_response(status)
}

/// Handler for POST /payroll/calculate.
///
/// Resolves attendance for the period and aggregates it into a salary record.
async fn payroll_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    if request.employee_id.trim().is_empty() {
        warn!(correlation_id = %correlation_id, "Empty employee id");
        return ApiErrorResponse::bad_request(ApiError::validation_error(
            "employee_id cannot be empty",
        ))
        .into_response();
    }

    match perform_payroll(request, state.config()) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %result.employee_id,
                working_days = result.record.working_days,
                days_present = result.record.days_present,
                net_pay = %result.record.net_pay,
                warnings = result.warnings.len(),
                duration_us = result.duration_us,
                "Payroll calculated successfully"
            );
            json_response(result)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /events/upcoming.
///
/// Lists birthdays and work anniversaries within the requested window.
async fn upcoming_events_handler(
    payload: Result<Json<UpcomingEventsRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing upcoming events request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let employees: Vec<Employee> = request.employees.into_iter().map(Into::into).collect();
    let response = UpcomingEventsResponse {
        birthdays: project_birthdays(&employees, request.today, request.days_ahead),
        anniversaries: project_anniversaries(&employees, request.today, request.days_ahead),
    };

    info!(
        correlation_id = %correlation_id,
        employees = employees.len(),
        birthdays = response.birthdays.len(),
        anniversaries = response.anniversaries.len(),
        "Upcoming events projected"
    );
    json_response(response)
}

/// Handler for POST /leave/balance.
///
/// Reports the remaining allotment of every configured leave type.
async fn leave_balance_handler(
    State(state): State<AppState>,
    payload: Result<Json<LeaveBalanceRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing leave balance request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let records = match leave_records_from(request.leave_records) {
        Ok(records) => records,
        Err(err) => return error_response(correlation_id, err),
    };

    let balances =
        compute_leave_balances(state.config().leave_allotments(), &records, request.year);

    info!(
        correlation_id = %correlation_id,
        year = request.year,
        records = records.len(),
        "Leave balances computed"
    );
    json_response(balances)
}

/// Picks the shift for a request.
///
/// An inline shift wins, then a shift code, then the organisation default.
fn resolve_shift(
    config: &ConfigLoader,
    inline: Option<ShiftRequest>,
    code: Option<&str>,
) -> EngineResult<ShiftConfig> {
    match (inline, code) {
        (Some(shift), _) => ShiftConfig::try_from(shift),
        (None, Some(code)) => config.get_shift(code).cloned(),
        (None, None) => config.default_shift().cloned(),
    }
}

/// Runs attendance resolution and salary aggregation for one employee.
fn perform_payroll(request: PayrollRequest, config: &ConfigLoader) -> EngineResult<PayrollResult> {
    let start_time = Instant::now();

    let shift = resolve_shift(config, request.shift, request.shift_code.as_deref())?;
    let salary = request.salary.map(SalaryConfig::try_from).transpose()?;
    let pay_period = PayPeriod::try_from(request.pay_period)?;
    let leave_records = leave_records_from(request.leave_records)?;
    let entries: Vec<TimeEntry> = request.entries.into_iter().map(Into::into).collect();

    let attendance = resolve_period(&pay_period, &entries, &shift, request.now);
    let computed = try_compute_salary_record(
        &attendance.statuses(),
        &leave_records,
        salary.as_ref(),
        &shift,
        &pay_period,
        config.payroll_policy(),
        request.now.date(),
    );
    let overflowed = computed.is_none();
    let mut record = computed.unwrap_or_else(|| {
        SalaryRecord::zeroed(salary.as_ref().map(|s| s.currency.clone()).unwrap_or_default())
    });
    if record.currency.is_empty() {
        record.currency = config.organization().currency.clone();
    }

    let warnings = collect_warnings(&attendance, salary.is_none(), overflowed);

    Ok(PayrollResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        employee_id: request.employee_id,
        pay_period,
        attendance: attendance.days,
        record,
        warnings,
        duration_us: start_time.elapsed().as_micros() as u64,
    })
}

/// Turns data-quality flags, ignored entries, a missing salary and
/// out-of-range amounts into warnings.
fn collect_warnings(
    attendance: &PeriodAttendance,
    salary_missing: bool,
    amounts_overflowed: bool,
) -> Vec<AuditWarning> {
    let mut warnings: Vec<AuditWarning> = attendance
        .days
        .iter()
        .flat_map(|day| {
            day.status.flags.iter().map(move |flag| {
                let message = match flag {
                    DataQualityFlag::InvertedTimeRange => {
                        format!("Clock-out before clock-in on {}; hours counted as zero", day.date)
                    }
                    DataQualityFlag::ClockInAfterNow => {
                        format!("Clock-in on {} is later than the evaluation time", day.date)
                    }
                };
                AuditWarning::new(flag.code(), message, "medium")
            })
        })
        .collect();

    warnings.extend(attendance.ignored_entries.iter().map(|date| {
        AuditWarning::new(
            "ENTRY_IGNORED",
            format!(
                "Time entry for {} is outside the elapsed working days or duplicates another entry",
                date
            ),
            "low",
        )
    }));

    if salary_missing {
        warnings.push(AuditWarning::new(
            "MISSING_SALARY_CONFIG",
            "No salary configuration supplied; salary record zeroed",
            "high",
        ));
    }

    if amounts_overflowed {
        warnings.push(AuditWarning::new(
            "AMOUNT_OUT_OF_RANGE",
            "Hours or pay exceeded the representable range; salary record zeroed",
            "high",
        ));
    }

    warnings
}

/// Maps a JSON extraction failure to an API error response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's description of the problem
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            warn!(correlation_id = %correlation_id, "Missing JSON content type");
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error).into_response()
}

/// Logs and converts an engine error.
fn error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request rejected"
    );
    ApiErrorResponse::from(err).into_response()
}

fn json_response<T: Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
