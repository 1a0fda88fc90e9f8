//! Birthday and work-anniversary projection.
//!
//! Projects the next occurrence of a recurring date relative to today,
//! handling year rollover and 29 February anchors.

use chrono::{Datelike, NaiveDate};

use crate::models::{Employee, EventKind, EventProjection};

/// Places the anchor's month and day in `year`.
///
/// 29 February falls back to 28 February in common years.
fn on_year(anchor: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, anchor.month(), anchor.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
        .unwrap_or(anchor)
}

/// Returns the next date on or after `today` matching the anchor's month and day.
///
/// # Example
///
/// ```
/// use hr_engine::calculation::next_occurrence;
/// use chrono::NaiveDate;
///
/// let joined = NaiveDate::from_ymd_opt(2020, 3, 10).unwrap();
/// let today = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
/// assert_eq!(next_occurrence(joined, today), NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
///
/// // Already passed this year: rolls over
/// let today = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
/// assert_eq!(next_occurrence(joined, today), NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());
/// ```
pub fn next_occurrence(anchor: NaiveDate, today: NaiveDate) -> NaiveDate {
    let candidate = on_year(anchor, today.year());
    if candidate < today {
        on_year(anchor, today.year() + 1)
    } else {
        candidate
    }
}

/// Whole days from `today` until `event_date`.
pub fn days_until(event_date: NaiveDate, today: NaiveDate) -> i64 {
    (event_date - today).num_days()
}

/// Years completed at `occurrence` since `anchor`, with month/day borrow.
///
/// # Example
///
/// ```
/// use hr_engine::calculation::years_completed;
/// use chrono::NaiveDate;
///
/// let joined = NaiveDate::from_ymd_opt(2020, 3, 10).unwrap();
/// let occurrence = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
/// assert_eq!(years_completed(joined, occurrence), 4);
/// ```
pub fn years_completed(anchor: NaiveDate, occurrence: NaiveDate) -> i32 {
    let years = occurrence.year() - anchor.year();
    if (occurrence.month(), occurrence.day()) < (anchor.month(), anchor.day()) {
        years - 1
    } else {
        years
    }
}

fn project(
    employees: &[Employee],
    today: NaiveDate,
    days_ahead: i64,
    kind: EventKind,
) -> Vec<EventProjection> {
    let mut projections: Vec<EventProjection> = employees
        .iter()
        .filter_map(|employee| {
            let anchor = match kind {
                EventKind::Birthday => employee.date_of_birth,
                EventKind::Anniversary => employee.join_date,
            }?;
            let event_date = next_occurrence(anchor, today);
            let years_completed = match kind {
                EventKind::Birthday => None,
                EventKind::Anniversary => Some(years_completed(anchor, event_date)),
            };
            Some(EventProjection {
                employee_id: employee.id.clone(),
                employee_name: employee.name.clone(),
                kind,
                event_date,
                days_until: days_until(event_date, today),
                years_completed,
            })
        })
        .filter(|p| (0..=days_ahead).contains(&p.days_until))
        .filter(|p| p.years_completed.is_none_or(|years| years > 0))
        .collect();

    projections.sort_by(|a, b| {
        a.days_until
            .cmp(&b.days_until)
            .then_with(|| a.employee_name.cmp(&b.employee_name))
    });
    projections
}

/// Lists birthdays within the next `days_ahead` days, soonest first.
///
/// Employees without a date of birth are skipped.
pub fn project_birthdays(
    employees: &[Employee],
    today: NaiveDate,
    days_ahead: i64,
) -> Vec<EventProjection> {
    project(employees, today, days_ahead, EventKind::Birthday)
}

/// Lists work anniversaries within the next `days_ahead` days, soonest first.
///
/// Employees without a join date, and anniversaries that would complete zero
/// years (joined this year, or joining in the future), are skipped.
pub fn project_anniversaries(
    employees: &[Employee],
    today: NaiveDate,
    days_ahead: i64,
) -> Vec<EventProjection> {
    project(employees, today, days_ahead, EventKind::Anniversary)
}
