//! Payroll result models.
//!
//! This module contains the [`PayrollResult`] envelope returned by a payroll
//! run. It wraps the [`SalaryRecord`] with the per-day attendance it was built
//! from and any warnings raised along the way.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AttendanceDay, PayPeriod, SalaryRecord};

/// A warning generated during calculation.
///
/// Warnings indicate data-quality issues that don't prevent calculation
/// but may require attention.
///
/// # Example
///
/// ```
/// use hr_engine::models::AuditWarning;
///
/// let warning = AuditWarning::new(
///     "MISSING_SALARY_CONFIG",
///     "No salary configuration supplied; record zeroed",
///     "high",
/// );
/// assert_eq!(warning.severity, "high");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

impl AuditWarning {
    /// Creates a new warning.
    pub fn new(
        code: impl Into<String>,
        message: impl Into<String>,
        severity: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            severity: severity.into(),
        }
    }
}

/// The complete result of a payroll run for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The ID of the employee the calculation is for.
    pub employee_id: String,
    /// The pay period for this calculation.
    pub pay_period: PayPeriod,
    /// Resolved attendance for each elapsed working day.
    pub attendance: Vec<AttendanceDay>,
    /// The computed salary record.
    pub record: SalaryRecord,
    /// Warnings raised while computing the record.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}
