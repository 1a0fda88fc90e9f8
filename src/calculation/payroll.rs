//! Payroll aggregation.
//!
//! Folds a period's daily statuses and leave records into a single
//! [`SalaryRecord`]: attendance counts, hours, overtime pay, unpaid leave
//! deduction, and net pay.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::models::{
    AttendanceStatus, DailyStatus, LeaveRecord, PayPeriod, SalaryConfig, SalaryRecord, SalaryType,
    ShiftConfig,
};

/// Working days assumed in a month when deriving an hourly rate from a
/// monthly salary.
pub const DEFAULT_WORKING_DAYS_PER_MONTH: u32 = 22;

/// Organisation-wide payroll policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollPolicy {
    /// Divisor used to turn a monthly salary into a daily amount.
    pub working_days_per_month: u32,
}

impl Default for PayrollPolicy {
    fn default() -> Self {
        Self {
            working_days_per_month: DEFAULT_WORKING_DAYS_PER_MONTH,
        }
    }
}

/// Approved leave days falling in a pay period, split by pay treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LeaveDays {
    /// Paid and sick leave days.
    pub paid: Decimal,
    /// Unpaid leave days.
    pub unpaid: Decimal,
}

/// Returns the effective hourly rate for a salary configuration.
///
/// Hourly employees are paid their base amount. For monthly employees the
/// rate is `base_amount / (working_days_per_month * standard_hours_per_day)`,
/// or zero when that divisor is zero or the division is not representable.
///
/// # Example
///
/// ```
/// use hr_engine::calculation::{hourly_rate, PayrollPolicy};
/// use hr_engine::models::{SalaryConfig, SalaryType, ShiftConfig};
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let salary = SalaryConfig {
///     salary_type: SalaryType::Monthly,
///     base_amount: Decimal::new(4400, 0),
///     overtime_multiplier: Decimal::new(15, 1),
///     currency: "USD".to_string(),
///     other_deductions: Decimal::ZERO,
/// };
/// let shift = ShiftConfig {
///     name: "General".to_string(),
///     standard_start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     standard_end: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     standard_hours_per_day: Decimal::new(8, 0),
/// };
///
/// assert_eq!(hourly_rate(&salary, &shift, &PayrollPolicy::default()), Decimal::new(25, 0));
/// ```
pub fn hourly_rate(salary: &SalaryConfig, shift: &ShiftConfig, policy: &PayrollPolicy) -> Decimal {
    match salary.salary_type {
        SalaryType::Hourly => salary.base_amount,
        SalaryType::Monthly => {
            let divisor = Decimal::from(policy.working_days_per_month)
                .checked_mul(shift.standard_hours_per_day);
            match divisor {
                Some(divisor) if divisor > Decimal::ZERO => salary
                    .base_amount
                    .checked_div(divisor)
                    .unwrap_or(Decimal::ZERO),
                _ => Decimal::ZERO,
            }
        }
    }
}

/// Counts the approved leave days that fall in a period.
///
/// A record wholly inside the period contributes its charged `days`, which
/// keeps half days intact. A record crossing the period boundary contributes
/// the number of the period's working days it overlaps.
pub fn leave_days_in_period(leave_records: &[LeaveRecord], period: &PayPeriod) -> LeaveDays {
    let mut days = LeaveDays::default();

    for record in leave_records.iter().filter(|r| r.is_approved()) {
        let inside_period =
            period.contains_date(record.start_date) && period.contains_date(record.end_date);
        let charged = if inside_period {
            record.days
        } else {
            Decimal::from(
                period
                    .working_dates_between(record.start_date, record.end_date)
                    .len() as u32,
            )
        };

        if record.leave_type.is_paid() {
            days.paid = days.paid.saturating_add(charged);
        } else {
            days.unpaid = days.unpaid.saturating_add(charged);
        }
    }

    days
}

fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn checked_sum(mut values: impl Iterator<Item = Decimal>) -> Option<Decimal> {
    values.try_fold(Decimal::ZERO, |total, value| total.checked_add(value))
}

/// Computes the salary record for one employee over one pay period.
///
/// # Arguments
///
/// * `statuses` - Resolved daily statuses for the period's working days
/// * `leave_records` - Leave records of the employee; only approved ones count
/// * `salary` - Salary terms, if the employee has any on file
/// * `shift` - The employee's shift, for the standard day length
/// * `period` - The pay period and its holidays
/// * `policy` - Organisation payroll policy
/// * `today` - The current date, used to decide whether the record is provisional
///
/// # Returns
///
/// A [`SalaryRecord`]. When the period has no working days or no salary
/// configuration is supplied, a zeroed provisional record is returned. The
/// same zeroed record stands in when an amount exceeds the range of
/// [`Decimal`]; use [`try_compute_salary_record`] to tell that case apart.
///
/// # Example
///
/// ```
/// use hr_engine::calculation::{compute_salary_record, PayrollPolicy};
/// use hr_engine::models::{PayPeriod, ShiftConfig, SalaryConfig, SalaryType};
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let shift = ShiftConfig {
///     name: "General".to_string(),
///     standard_start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     standard_end: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     standard_hours_per_day: Decimal::new(8, 0),
/// };
/// // A Saturday-only period has no working days.
/// let period = PayPeriod {
///     start_date: NaiveDate::from_ymd_opt(2026, 1, 17).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 1, 17).unwrap(),
///     holidays: vec![],
/// };
/// let today = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
///
/// let record = compute_salary_record(&[], &[], None, &shift, &period, &PayrollPolicy::default(), today);
/// assert_eq!(record.net_pay, Decimal::ZERO);
/// assert!(record.is_provisional);
/// ```
pub fn compute_salary_record(
    statuses: &[DailyStatus],
    leave_records: &[LeaveRecord],
    salary: Option<&SalaryConfig>,
    shift: &ShiftConfig,
    period: &PayPeriod,
    policy: &PayrollPolicy,
    today: NaiveDate,
) -> SalaryRecord {
    try_compute_salary_record(statuses, leave_records, salary, shift, period, policy, today)
        .unwrap_or_else(|| {
            let currency = salary.map(|s| s.currency.clone()).unwrap_or_default();
            warn!(
                currency = %currency,
                start_date = %period.start_date,
                end_date = %period.end_date,
                "Salary amounts out of range; returning zeroed salary record"
            );
            SalaryRecord::zeroed(currency)
        })
}

/// Computes the salary record, or `None` when an amount overflows.
///
/// Behaves like [`compute_salary_record`] except that hours, pay and
/// deductions too large for [`Decimal`] yield `None` instead of a zeroed
/// record.
pub fn try_compute_salary_record(
    statuses: &[DailyStatus],
    leave_records: &[LeaveRecord],
    salary: Option<&SalaryConfig>,
    shift: &ShiftConfig,
    period: &PayPeriod,
    policy: &PayrollPolicy,
    today: NaiveDate,
) -> Option<SalaryRecord> {
    let working_days = period.working_days();

    let salary = match salary {
        Some(salary) if working_days > 0 => salary,
        _ => {
            debug!(
                working_days,
                has_salary = salary.is_some(),
                "Returning zeroed salary record"
            );
            let currency = salary.map(|s| s.currency.clone()).unwrap_or_default();
            return Some(SalaryRecord::zeroed(currency));
        }
    };

    let days_present = statuses.iter().filter(|s| s.status.is_present()).count() as u32;
    let late_arrivals = statuses.iter().filter(|s| s.is_late).count() as u32;
    let early_leaves = statuses.iter().filter(|s| s.is_early_leave).count() as u32;

    let completed = statuses
        .iter()
        .filter(|s| s.status == AttendanceStatus::Completed);
    let total_hours_worked = checked_sum(completed.clone().filter_map(|s| s.total_hours))?;
    let overtime_hours = checked_sum(completed.map(|s| s.overtime_hours))?;

    let leave = leave_days_in_period(leave_records, period);
    let days_absent = Decimal::from(working_days)
        .checked_sub(Decimal::from(days_present))?
        .checked_sub(leave.paid)?
        .checked_sub(leave.unpaid)?
        .max(Decimal::ZERO);

    let rate = hourly_rate(salary, shift, policy);
    let base_pay = round_money(match salary.salary_type {
        SalaryType::Monthly => salary.base_amount,
        SalaryType::Hourly => total_hours_worked.checked_mul(rate)?,
    });
    let overtime_pay = round_money(
        overtime_hours
            .checked_mul(rate)?
            .checked_mul(salary.overtime_multiplier)?,
    );
    let unpaid_leave_deduction = round_money(
        leave
            .unpaid
            .checked_mul(rate)?
            .checked_mul(shift.standard_hours_per_day)?,
    );
    let other_deductions = round_money(salary.other_deductions);
    let net_pay = base_pay
        .checked_add(overtime_pay)?
        .checked_sub(unpaid_leave_deduction)?
        .checked_sub(other_deductions)?;

    Some(SalaryRecord {
        working_days,
        days_present,
        days_absent,
        paid_leave_days: leave.paid,
        unpaid_leave_days: leave.unpaid,
        late_arrivals,
        early_leaves,
        total_hours_worked,
        overtime_hours,
        hourly_rate: rate,
        base_pay,
        overtime_pay,
        unpaid_leave_deduction,
        other_deductions,
        net_pay,
        currency: salary.currency.clone(),
        is_provisional: period.end_date >= today,
    })
}
