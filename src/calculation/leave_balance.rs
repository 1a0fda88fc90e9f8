//! Leave balance computation.
//!
//! Compares the days an organisation allots per leave type against the
//! approved and pending leave an employee has recorded for a year.

use rust_decimal::Decimal;

use crate::config::LeaveAllotment;
use crate::models::{LeaveBalance, LeaveRecord, LeaveStatus};

/// Computes the balance of every configured leave type for a year.
///
/// Leave is attributed to the year it starts in. Approved days are `used`,
/// pending days are reported separately and do not reduce `remaining`,
/// rejected records are ignored. Balances follow the order of `allotments`.
///
/// # Example
///
/// ```
/// use hr_engine::calculation::compute_leave_balances;
/// use hr_engine::config::LeaveAllotment;
/// use hr_engine::models::{LeaveRecord, LeaveStatus, LeaveType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let allotments = vec![LeaveAllotment {
///     leave_type: LeaveType::Sick,
///     annual_allotment: Decimal::new(10, 0),
/// }];
/// let records = vec![LeaveRecord {
///     id: "lv_001".to_string(),
///     leave_type: LeaveType::Sick,
///     start_date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 3, 3).unwrap(),
///     days: Decimal::new(2, 0),
///     status: LeaveStatus::Approved,
/// }];
///
/// let balances = compute_leave_balances(&allotments, &records, 2026);
/// assert_eq!(balances[0].remaining, Decimal::new(8, 0));
/// ```
pub fn compute_leave_balances(
    allotments: &[LeaveAllotment],
    records: &[LeaveRecord],
    year: i32,
) -> Vec<LeaveBalance> {
    allotments
        .iter()
        .map(|allotment| {
            let in_year = records
                .iter()
                .filter(|r| r.leave_type == allotment.leave_type && r.starts_in_year(year));

            let sum_with_status = |status: LeaveStatus| -> Decimal {
                in_year
                    .clone()
                    .filter(|r| r.status == status)
                    .fold(Decimal::ZERO, |total, r| total.saturating_add(r.days))
            };

            let used = sum_with_status(LeaveStatus::Approved);
            let pending = sum_with_status(LeaveStatus::Pending);

            LeaveBalance {
                leave_type: allotment.leave_type,
                allotted: allotment.annual_allotment,
                used,
                pending,
                remaining: allotment.annual_allotment.saturating_sub(used),
            }
        })
        .collect()
}
