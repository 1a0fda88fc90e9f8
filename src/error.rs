//! Error types for the HR Engine.
//!
//! The calculation core never fails: data-quality problems are absorbed into
//! flags and default values. The errors in this module are raised at the
//! boundary, while loading configuration or validating incoming records.

use thiserror::Error;

/// The main error type for the HR Engine.
///
/// # Example
///
/// ```
/// use hr_engine::error::EngineError;
///
/// let error = EngineError::ShiftNotFound {
///     code: "night".to_string(),
/// };
/// assert_eq!(error.to_string(), "Shift not found: night");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Shift code was not found in the configuration.
    #[error("Shift not found: {code}")]
    ShiftNotFound {
        /// The shift code that was not found.
        code: String,
    },

    /// A shift configuration contained inconsistent data.
    #[error("Invalid shift config field '{field}': {message}")]
    InvalidShiftConfig {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A salary configuration contained inconsistent data.
    #[error("Invalid salary config field '{field}': {message}")]
    InvalidSalaryConfig {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A pay period was malformed.
    #[error("Invalid pay period: {message}")]
    InvalidPayPeriod {
        /// A description of what made the period invalid.
        message: String,
    },

    /// A leave record was malformed.
    #[error("Invalid leave record '{id}': {message}")]
    InvalidLeaveRecord {
        /// The ID of the invalid leave record.
        id: String,
        /// A description of what made the record invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
