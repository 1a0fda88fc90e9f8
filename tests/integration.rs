//! Integration tests for the HR Engine API.
//!
//! This test suite drives the full router and covers:
//! - Daily attendance status (lateness, overtime, open and overnight shifts)
//! - Payroll for monthly and hourly salaries, leave and provisional periods
//! - Data-quality warnings
//! - Upcoming birthdays and anniversaries
//! - Leave balances
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use hr_engine::api::{AppState, create_router};
use hr_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_router_for_test() -> Router {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    create_router(AppState::new(config))
}

/// Normalize decimal string by removing trailing zeros after decimal point
fn normalize_decimal(s: &str) -> String {
    Decimal::from_str(s).unwrap().normalize().to_string()
}

fn assert_decimal(value: &Value, expected: &str) {
    let actual = value
        .as_str()
        .unwrap_or_else(|| panic!("Expected decimal string, got {}", value));
    assert_eq!(
        normalize_decimal(actual),
        normalize_decimal(expected),
        "Expected {}, got {}",
        expected,
        actual
    );
}

async fn post(uri: &str, body: Value) -> (StatusCode, Value) {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn monthly_salary() -> Value {
    json!({
        "salary_type": "monthly",
        "base_amount": "4400",
        "overtime_multiplier": "1.5",
        "currency": "USD"
    })
}

fn entry(date: &str, time_in: &str, time_out: Option<&str>) -> Value {
    json!({
        "date": date,
        "time_in": format!("{}T{}", date, time_in),
        "time_out": time_out.map(|t| format!("{}T{}", date, t)),
    })
}

/// February 2026: 20 working days, Sunday the 1st to Saturday the 28th.
fn february_request(salary: Value, entries: Vec<Value>, leave: Vec<Value>, now: &str) -> Value {
    json!({
        "employee_id": "emp_001",
        "salary": salary,
        "shift_code": "general",
        "pay_period": { "start_date": "2026-02-01", "end_date": "2026-02-28" },
        "entries": entries,
        "leave_records": leave,
        "now": now,
    })
}

fn two_worked_days() -> Vec<Value> {
    vec![
        // 5 minutes late, 8 hours
        entry("2026-02-02", "09:05:00", Some("17:05:00")),
        // 9.5 hours, 1.5 overtime
        entry("2026-02-03", "09:00:00", Some("18:30:00")),
    ]
}

// =============================================================================
// SECTION 1: Attendance Status
// =============================================================================

#[tokio::test]
async fn test_status_late_by_fifteen_minutes() {
    let body = json!({
        "shift_code": "general",
        "entry": entry("2026-01-15", "09:15:00", Some("17:00:00")),
        "now": "2026-01-15T20:00:00",
    });

    let (status, result) = post("/attendance/status", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["status"], "completed");
    assert_eq!(result["is_late"], true);
    assert_eq!(result["late_by_minutes"], 15);
    assert_eq!(result["is_early_leave"], false);
}

#[tokio::test]
async fn test_status_nine_and_a_half_hours_has_overtime() {
    let body = json!({
        "shift_code": "general",
        "entry": entry("2026-01-15", "09:00:00", Some("18:30:00")),
        "now": "2026-01-15T20:00:00",
    });

    let (status, result) = post("/attendance/status", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["is_late"], false);
    assert_decimal(&result["total_hours"], "9.5");
    assert_decimal(&result["overtime_hours"], "1.5");
    assert!(result["elapsed_hours"].is_null());
}

#[tokio::test]
async fn test_status_clocked_in_reports_elapsed_hours() {
    let body = json!({
        "entry": entry("2026-01-15", "09:00:00", None),
        "now": "2026-01-15T12:30:00",
    });

    let (status, result) = post("/attendance/status", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["status"], "clocked_in");
    assert_decimal(&result["elapsed_hours"], "3.5");
    assert!(result["total_hours"].is_null());
}

#[tokio::test]
async fn test_status_without_entry_is_not_clocked_in() {
    let body = json!({ "now": "2026-01-15T12:30:00" });

    let (status, result) = post("/attendance/status", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["status"], "not_clocked_in");
    assert_eq!(result["is_late"], false);
}

#[tokio::test]
async fn test_status_overnight_shift() {
    let body = json!({
        "shift_code": "night",
        "entry": {
            "date": "2026-01-15",
            "time_in": "2026-01-15T22:00:00",
            "time_out": "2026-01-16T07:00:00"
        },
        "now": "2026-01-16T08:00:00",
    });

    let (status, result) = post("/attendance/status", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["is_late"], false);
    assert_eq!(result["is_early_leave"], false);
    assert_decimal(&result["total_hours"], "9");
    assert_decimal(&result["overtime_hours"], "1");
}

#[tokio::test]
async fn test_status_inline_shift_overrides_code() {
    let body = json!({
        "shift_code": "general",
        "shift": {
            "name": "Late Start",
            "standard_start": "10:00:00",
            "standard_end": "18:00:00",
            "standard_hours_per_day": "8"
        },
        "entry": entry("2026-01-15", "09:30:00", Some("18:00:00")),
        "now": "2026-01-15T20:00:00",
    });

    let (status, result) = post("/attendance/status", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["is_late"], false);
    assert_decimal(&result["overtime_hours"], "0.5");
}

#[tokio::test]
async fn test_status_inverted_entry_is_flagged() {
    let body = json!({
        "entry": entry("2026-01-15", "17:00:00", Some("09:00:00")),
        "now": "2026-01-15T20:00:00",
    });

    let (status, result) = post("/attendance/status", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["status"], "completed");
    assert_decimal(&result["total_hours"], "0");
    assert_eq!(result["flags"], json!(["inverted_time_range"]));
}

// =============================================================================
// SECTION 2: Payroll
// =============================================================================

#[tokio::test]
async fn test_payroll_monthly_salary_closed_period() {
    let request = february_request(
        monthly_salary(),
        two_worked_days(),
        vec![],
        "2026-03-01T08:00:00",
    );

    let (status, result) = post("/payroll/calculate", request).await;

    assert_eq!(status, StatusCode::OK);
    let record = &result["record"];
    assert_eq!(record["working_days"], 20);
    assert_eq!(record["days_present"], 2);
    assert_decimal(&record["days_absent"], "18");
    assert_eq!(record["late_arrivals"], 1);
    assert_eq!(record["early_leaves"], 0);
    assert_decimal(&record["total_hours_worked"], "17.5");
    assert_decimal(&record["overtime_hours"], "1.5");
    // 4400 / (22 x 8)
    assert_decimal(&record["hourly_rate"], "25");
    assert_decimal(&record["base_pay"], "4400");
    // 1.5h x 25 x 1.5
    assert_decimal(&record["overtime_pay"], "56.25");
    assert_decimal(&record["net_pay"], "4456.25");
    assert_eq!(record["currency"], "USD");
    assert_eq!(record["is_provisional"], false);

    assert_eq!(result["employee_id"], "emp_001");
    assert_eq!(result["attendance"].as_array().unwrap().len(), 20);
    assert!(result["warnings"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_payroll_hourly_salary() {
    let salary = json!({
        "salary_type": "hourly",
        "base_amount": "20",
        "overtime_multiplier": "1.5",
        "currency": "USD"
    });
    let request = february_request(salary, two_worked_days(), vec![], "2026-03-01T08:00:00");

    let (status, result) = post("/payroll/calculate", request).await;

    assert_eq!(status, StatusCode::OK);
    let record = &result["record"];
    assert_decimal(&record["hourly_rate"], "20");
    // 17.5h x 20
    assert_decimal(&record["base_pay"], "350");
    // 1.5h x 20 x 1.5
    assert_decimal(&record["overtime_pay"], "45");
    assert_decimal(&record["net_pay"], "395");
}

#[tokio::test]
async fn test_payroll_leave_and_deductions() {
    let leave = vec![
        json!({
            "id": "lv_001",
            "leave_type": "unpaid",
            "start_date": "2026-02-10",
            "end_date": "2026-02-11",
            "days": "2",
            "status": "approved"
        }),
        json!({
            "id": "lv_002",
            "leave_type": "sick",
            "start_date": "2026-02-12",
            "end_date": "2026-02-12",
            "days": "1",
            "status": "approved"
        }),
        json!({
            "id": "lv_003",
            "leave_type": "unpaid",
            "start_date": "2026-02-16",
            "end_date": "2026-02-16",
            "days": "1",
            "status": "pending"
        }),
    ];
    let mut salary = monthly_salary();
    salary["other_deductions"] = json!("100");
    let request = february_request(salary, two_worked_days(), leave, "2026-03-01T08:00:00");

    let (status, result) = post("/payroll/calculate", request).await;

    assert_eq!(status, StatusCode::OK);
    let record = &result["record"];
    assert_decimal(&record["paid_leave_days"], "1");
    assert_decimal(&record["unpaid_leave_days"], "2");
    // 20 working - 2 present - 1 paid - 2 unpaid
    assert_decimal(&record["days_absent"], "15");
    // 2 days x 25 x 8
    assert_decimal(&record["unpaid_leave_deduction"], "400");
    assert_decimal(&record["other_deductions"], "100");
    // 4400 + 56.25 - 400 - 100
    assert_decimal(&record["net_pay"], "3956.25");
}

#[tokio::test]
async fn test_payroll_open_period_is_provisional() {
    let request = february_request(
        monthly_salary(),
        two_worked_days(),
        vec![],
        "2026-02-15T12:00:00",
    );

    let (status, result) = post("/payroll/calculate", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["record"]["is_provisional"], true);
    // Working days 2-6 and 9-13 February have elapsed
    assert_eq!(result["attendance"].as_array().unwrap().len(), 10);
    assert_eq!(result["record"]["working_days"], 20);
}

#[tokio::test]
async fn test_payroll_empty_period_is_zeroed() {
    // A single Saturday has no working days
    let request = json!({
        "employee_id": "emp_001",
        "salary": monthly_salary(),
        "pay_period": { "start_date": "2026-01-17", "end_date": "2026-01-17" },
        "now": "2026-02-01T08:00:00",
    });

    let (status, result) = post("/payroll/calculate", request).await;

    assert_eq!(status, StatusCode::OK);
    let record = &result["record"];
    assert_eq!(record["working_days"], 0);
    assert_decimal(&record["net_pay"], "0");
    assert_decimal(&record["hourly_rate"], "0");
    assert_eq!(record["is_provisional"], true);
}

#[tokio::test]
async fn test_payroll_holiday_reduces_working_days() {
    let request = json!({
        "employee_id": "emp_001",
        "salary": monthly_salary(),
        "pay_period": {
            "start_date": "2026-01-01",
            "end_date": "2026-01-31",
            "holidays": [{ "date": "2026-01-01", "name": "New Year's Day" }]
        },
        "now": "2026-02-01T08:00:00",
    });

    let (status, result) = post("/payroll/calculate", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["record"]["working_days"], 21);
}

#[tokio::test]
async fn test_payroll_missing_salary_warns_and_zeroes() {
    let request = json!({
        "employee_id": "emp_001",
        "pay_period": { "start_date": "2026-02-01", "end_date": "2026-02-28" },
        "entries": two_worked_days(),
        "now": "2026-03-01T08:00:00",
    });

    let (status, result) = post("/payroll/calculate", request).await;

    assert_eq!(status, StatusCode::OK);
    let record = &result["record"];
    assert_decimal(&record["net_pay"], "0");
    assert_eq!(record["is_provisional"], true);
    assert_eq!(record["currency"], "USD");

    let warnings = result["warnings"].as_array().unwrap();
    assert!(warnings.iter().any(|w| w["code"] == "MISSING_SALARY_CONFIG"));
}

#[tokio::test]
async fn test_payroll_warns_about_flags_and_ignored_entries() {
    let entries = vec![
        entry("2026-02-04", "17:00:00", Some("09:00:00")),
        // Saturday
        entry("2026-02-07", "09:00:00", Some("17:00:00")),
        // Second entry for the same day
        entry("2026-02-04", "09:00:00", Some("17:00:00")),
    ];
    let request = february_request(monthly_salary(), entries, vec![], "2026-03-01T08:00:00");

    let (status, result) = post("/payroll/calculate", request).await;

    assert_eq!(status, StatusCode::OK);
    let codes: Vec<&str> = result["warnings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["code"].as_str().unwrap())
        .collect();
    assert_eq!(
        codes,
        vec!["INVERTED_TIME_RANGE", "ENTRY_IGNORED", "ENTRY_IGNORED"]
    );
    // The flagged day still counts as present, with zero hours
    assert_eq!(result["record"]["days_present"], 1);
    assert_decimal(&result["record"]["total_hours_worked"], "0");
}

#[tokio::test]
async fn test_payroll_is_idempotent_apart_from_envelope() {
    let request = february_request(
        monthly_salary(),
        two_worked_days(),
        vec![],
        "2026-03-01T08:00:00",
    );

    let (_, first) = post("/payroll/calculate", request.clone()).await;
    let (_, second) = post("/payroll/calculate", request).await;

    assert_eq!(first["record"], second["record"]);
    assert_eq!(first["attendance"], second["attendance"]);
    assert_ne!(first["calculation_id"], second["calculation_id"]);
}

#[tokio::test]
async fn test_payroll_result_contains_all_required_fields() {
    let request = february_request(
        monthly_salary(),
        two_worked_days(),
        vec![],
        "2026-03-01T08:00:00",
    );

    let (status, result) = post("/payroll/calculate", request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(result["calculation_id"].is_string());
    assert!(result["timestamp"].is_string());
    assert!(result["engine_version"].is_string());
    assert!(result["pay_period"]["start_date"].is_string());
    assert!(result["duration_us"].is_number());

    let day = &result["attendance"][0];
    assert_eq!(day["date"], "2026-02-02");
    assert_eq!(day["status"], "completed");
    assert_eq!(day["late_by_minutes"], 5);
}

// =============================================================================
// SECTION 3: Upcoming Events
// =============================================================================

#[tokio::test]
async fn test_upcoming_anniversary() {
    let body = json!({
        "employees": [
            { "id": "emp_001", "name": "Aiko", "join_date": "2020-03-10" },
            { "id": "emp_002", "name": "Beatriz", "join_date": "2024-03-07" }
        ],
        "today": "2024-03-05",
        "days_ahead": 7
    });

    let (status, result) = post("/events/upcoming", body).await;

    assert_eq!(status, StatusCode::OK);
    let anniversaries = result["anniversaries"].as_array().unwrap();
    assert_eq!(anniversaries.len(), 1);
    assert_eq!(anniversaries[0]["employee_id"], "emp_001");
    assert_eq!(anniversaries[0]["event_date"], "2024-03-10");
    assert_eq!(anniversaries[0]["days_until"], 5);
    assert_eq!(anniversaries[0]["years_completed"], 4);
    assert_eq!(anniversaries[0]["kind"], "anniversary");
    assert!(result["birthdays"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_upcoming_birthdays_sorted() {
    let body = json!({
        "employees": [
            { "id": "emp_001", "name": "Chidi", "date_of_birth": "1991-01-02" },
            { "id": "emp_002", "name": "Aiko", "date_of_birth": "1995-12-31" },
            { "id": "emp_003", "name": "Dmitri", "date_of_birth": "1980-06-01" }
        ],
        "today": "2026-12-30",
        "days_ahead": 7
    });

    let (status, result) = post("/events/upcoming", body).await;

    assert_eq!(status, StatusCode::OK);
    let birthdays = result["birthdays"].as_array().unwrap();
    assert_eq!(birthdays.len(), 2);
    assert_eq!(birthdays[0]["employee_id"], "emp_002");
    assert_eq!(birthdays[0]["days_until"], 1);
    assert_eq!(birthdays[1]["employee_id"], "emp_001");
    assert_eq!(birthdays[1]["event_date"], "2027-01-02");
    assert!(birthdays[0].get("years_completed").is_none());
}

// =============================================================================
// SECTION 4: Leave Balance
// =============================================================================

#[tokio::test]
async fn test_leave_balance_against_configured_allotments() {
    let body = json!({
        "year": 2026,
        "leave_records": [
            {
                "id": "lv_001", "leave_type": "paid",
                "start_date": "2026-03-02", "end_date": "2026-03-04",
                "days": "3", "status": "approved"
            },
            {
                "id": "lv_002", "leave_type": "paid",
                "start_date": "2026-07-06", "end_date": "2026-07-07",
                "days": "2", "status": "pending"
            },
            {
                "id": "lv_003", "leave_type": "sick",
                "start_date": "2026-04-01", "end_date": "2026-04-01",
                "days": "0.5", "status": "approved"
            }
        ]
    });

    let (status, result) = post("/leave/balance", body).await;

    assert_eq!(status, StatusCode::OK);
    let balances = result.as_array().unwrap();
    assert_eq!(balances.len(), 2);
    assert_eq!(balances[0]["leave_type"], "paid");
    assert_decimal(&balances[0]["used"], "3");
    assert_decimal(&balances[0]["pending"], "2");
    assert_decimal(&balances[0]["remaining"], "15");
    assert_eq!(balances[1]["leave_type"], "sick");
    assert_decimal(&balances[1]["remaining"], "9.5");
}

// =============================================================================
// SECTION 5: Error Cases
// =============================================================================

#[tokio::test]
async fn test_error_malformed_json() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/attendance/status")
                .header("Content-Type", "application/json")
                .body(Body::from("{invalid json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let error: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(error["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_error_missing_content_type() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/leave/balance")
                .body(Body::from(r#"{"year": 2026}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let error: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(error["code"], "MISSING_CONTENT_TYPE");
}

#[tokio::test]
async fn test_error_missing_now() {
    let body = json!({ "shift_code": "general" });

    let (status, error) = post("/attendance/status", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert!(error["message"].as_str().unwrap().contains("now"));
}

#[tokio::test]
async fn test_error_unknown_shift_code() {
    let body = json!({ "shift_code": "graveyard", "now": "2026-01-15T12:00:00" });

    let (status, error) = post("/attendance/status", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "SHIFT_NOT_FOUND");
}

#[tokio::test]
async fn test_error_invalid_inline_shift() {
    let body = json!({
        "shift": {
            "standard_start": "09:00:00",
            "standard_end": "09:00:00",
            "standard_hours_per_day": "8"
        },
        "now": "2026-01-15T12:00:00"
    });

    let (status, error) = post("/attendance/status", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_SHIFT_CONFIG");
}

#[tokio::test]
async fn test_error_invalid_salary_currency() {
    let mut salary = monthly_salary();
    salary["currency"] = json!("usd");
    let request = february_request(salary, vec![], vec![], "2026-03-01T08:00:00");

    let (status, error) = post("/payroll/calculate", request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_SALARY_CONFIG");
}

#[tokio::test]
async fn test_error_oversized_hourly_salary_is_rejected() {
    let salary = json!({
        "salary_type": "hourly",
        "base_amount": "1000000000000000000000000000",
        "overtime_multiplier": "2",
        "currency": "USD"
    });
    let entries = vec![entry("2026-02-02", "09:00:00", Some("23:00:00"))];
    let request = february_request(salary, entries, vec![], "2026-03-01T08:00:00");

    let (status, error) = post("/payroll/calculate", request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_SALARY_CONFIG");
    assert!(error["message"].as_str().unwrap().contains("base_amount"));
}

#[tokio::test]
async fn test_error_leave_days_exceed_range() {
    let leave = vec![json!({
        "id": "lv_long",
        "leave_type": "unpaid",
        "start_date": "2026-02-10",
        "end_date": "2026-02-10",
        "days": "1000000000000000000000000000",
        "status": "approved"
    })];
    let request = february_request(monthly_salary(), vec![], leave, "2026-03-01T08:00:00");

    let (status, error) = post("/payroll/calculate", request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_LEAVE_RECORD");
    assert!(error["message"].as_str().unwrap().contains("lv_long"));
}

#[tokio::test]
async fn test_error_inverted_pay_period() {
    let request = json!({
        "employee_id": "emp_001",
        "salary": monthly_salary(),
        "pay_period": { "start_date": "2026-02-28", "end_date": "2026-02-01" },
        "now": "2026-03-01T08:00:00",
    });

    let (status, error) = post("/payroll/calculate", request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_PAY_PERIOD");
}

#[tokio::test]
async fn test_error_invalid_leave_record() {
    let body = json!({
        "year": 2026,
        "leave_records": [{
            "id": "lv_bad", "leave_type": "paid",
            "start_date": "2026-03-04", "end_date": "2026-03-02",
            "days": "3", "status": "approved"
        }]
    });

    let (status, error) = post("/leave/balance", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_LEAVE_RECORD");
    assert!(error["message"].as_str().unwrap().contains("lv_bad"));
}

#[tokio::test]
async fn test_error_unknown_leave_type() {
    let body = json!({
        "year": 2026,
        "leave_records": [{
            "id": "lv_001", "leave_type": "sabbatical",
            "start_date": "2026-03-02", "end_date": "2026-03-02",
            "days": "1", "status": "approved"
        }]
    });

    let (status, error) = post("/leave/balance", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "MALFORMED_JSON");
}
