//! Response types for the HR Engine API.
//!
//! This module defines the success bodies that are not plain domain types,
//! the error response structures, and error handling for the HTTP API.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::EventProjection;

/// Response body for the `/events/upcoming` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpcomingEventsResponse {
    /// Birthdays in the window, soonest first.
    pub birthdays: Vec<EventProjection>,
    /// Work anniversaries in the window, soonest first.
    pub anniversaries: Vec<EventProjection>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a shift not found error response.
    pub fn shift_not_found(code: &str) -> Self {
        Self::with_details(
            "SHIFT_NOT_FOUND",
            format!("Shift not found: {}", code),
            format!("The shift code '{}' is not defined in the organisation policy", code),
        )
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response carrying the given error.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::ShiftNotFound { code } => {
                ApiErrorResponse::bad_request(ApiError::shift_not_found(&code))
            }
            err @ EngineError::InvalidShiftConfig { .. } => {
                ApiErrorResponse::bad_request(ApiError::with_details(
                    "INVALID_SHIFT_CONFIG",
                    err.to_string(),
                    "The shift definition cannot be used for attendance",
                ))
            }
            err @ EngineError::InvalidSalaryConfig { .. } => {
                ApiErrorResponse::bad_request(ApiError::with_details(
                    "INVALID_SALARY_CONFIG",
                    err.to_string(),
                    "The salary configuration contains invalid information",
                ))
            }
            err @ EngineError::InvalidPayPeriod { .. } => {
                ApiErrorResponse::bad_request(ApiError::new("INVALID_PAY_PERIOD", err.to_string()))
            }
            err @ EngineError::InvalidLeaveRecord { .. } => {
                ApiErrorResponse::bad_request(ApiError::with_details(
                    "INVALID_LEAVE_RECORD",
                    err.to_string(),
                    "The leave record contains inconsistent data",
                ))
            }
        }
    }
}
