//! Employee model.
//!
//! Only the fields the engine needs for event projection are carried here;
//! everything else about an employee lives with the host application.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An employee known to the engine.
///
/// # Examples
///
/// ```
/// use hr_engine::models::Employee;
/// use chrono::NaiveDate;
///
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     name: "Ana Souza".to_string(),
///     date_of_birth: Some(NaiveDate::from_ymd_opt(1990, 1, 15).unwrap()),
///     join_date: Some(NaiveDate::from_ymd_opt(2020, 3, 10).unwrap()),
/// };
/// assert!(employee.join_date.is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Date of birth, when known.
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    /// First day of employment, when known.
    #[serde(default)]
    pub join_date: Option<NaiveDate>,
}
