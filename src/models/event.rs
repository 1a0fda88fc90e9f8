//! Birthday and work-anniversary projections.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The kind of date being projected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Anniversary of the date of birth.
    Birthday,
    /// Anniversary of the join date.
    Anniversary,
}

/// The next occurrence of an employee's birthday or work anniversary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventProjection {
    /// The employee the event belongs to.
    pub employee_id: String,
    /// The employee's display name.
    pub employee_name: String,
    /// Birthday or anniversary.
    pub kind: EventKind,
    /// Date of the next occurrence.
    pub event_date: NaiveDate,
    /// Whole days from today until the occurrence; zero on the day itself.
    pub days_until: i64,
    /// Years of service completed at the occurrence, anniversaries only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years_completed: Option<i32>,
}
