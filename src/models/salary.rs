//! Salary configuration and the derived period salary record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// How an employee's base amount is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryType {
    /// `base_amount` is an hourly rate.
    Hourly,
    /// `base_amount` is a fixed monthly salary.
    Monthly,
}

/// Salary terms for an employee.
///
/// # Example
///
/// ```
/// use hr_engine::models::{SalaryConfig, SalaryType};
/// use rust_decimal::Decimal;
///
/// let salary = SalaryConfig {
///     salary_type: SalaryType::Monthly,
///     base_amount: Decimal::new(4400, 0),
///     overtime_multiplier: Decimal::new(15, 1),
///     currency: "USD".to_string(),
///     other_deductions: Decimal::ZERO,
/// };
/// assert!(salary.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryConfig {
    /// Whether the base amount is hourly or monthly.
    pub salary_type: SalaryType,
    /// The hourly rate or monthly salary.
    pub base_amount: Decimal,
    /// Multiplier applied to the hourly rate for overtime hours.
    pub overtime_multiplier: Decimal,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Fixed deductions applied to every period (benefits, advances).
    #[serde(default)]
    pub other_deductions: Decimal,
}

/// Largest accepted `base_amount` or `other_deductions`.
pub const MAX_SALARY_AMOUNT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Largest accepted `overtime_multiplier`.
pub const MAX_OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

impl SalaryConfig {
    /// Checks that the configuration is usable for calculation.
    ///
    /// Amounts are capped at [`MAX_SALARY_AMOUNT`] and the multiplier at
    /// [`MAX_OVERTIME_MULTIPLIER`].
    pub fn validate(&self) -> EngineResult<()> {
        if self.base_amount < Decimal::ZERO {
            return Err(invalid("base_amount", "cannot be negative"));
        }
        if self.base_amount > MAX_SALARY_AMOUNT {
            return Err(invalid("base_amount", "exceeds 1000000000"));
        }
        if self.overtime_multiplier < Decimal::ZERO {
            return Err(invalid("overtime_multiplier", "cannot be negative"));
        }
        if self.overtime_multiplier > MAX_OVERTIME_MULTIPLIER {
            return Err(invalid("overtime_multiplier", "exceeds 10"));
        }
        if self.other_deductions < Decimal::ZERO {
            return Err(invalid("other_deductions", "cannot be negative"));
        }
        if self.other_deductions > MAX_SALARY_AMOUNT {
            return Err(invalid("other_deductions", "exceeds 1000000000"));
        }
        if self.currency.len() != 3 || !self.currency.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(invalid(
                "currency",
                "must be a three letter uppercase currency code",
            ));
        }
        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> EngineError {
    EngineError::InvalidSalaryConfig {
        field: field.to_string(),
        message: message.to_string(),
    }
}

/// The salary computed for one employee over one pay period.
///
/// Monetary fields are rounded to two decimal places and `net_pay` is
/// always `base_pay + overtime_pay - unpaid_leave_deduction - other_deductions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRecord {
    /// Business days in the period.
    pub working_days: u32,
    /// Days with a clock-in.
    pub days_present: u32,
    /// Working days with neither attendance nor approved leave.
    ///
    /// Counted over the whole period, so on a provisional record the working
    /// days still to come are included.
    pub days_absent: Decimal,
    /// Approved paid and sick leave days in the period.
    pub paid_leave_days: Decimal,
    /// Approved unpaid leave days in the period.
    pub unpaid_leave_days: Decimal,
    /// Days the employee clocked in late.
    pub late_arrivals: u32,
    /// Days the employee clocked out early.
    pub early_leaves: u32,
    /// Hours worked on completed days.
    pub total_hours_worked: Decimal,
    /// Hours beyond the standard day, summed over the period.
    pub overtime_hours: Decimal,
    /// Effective hourly rate used for overtime and deductions.
    pub hourly_rate: Decimal,
    /// Base pay before overtime and deductions.
    pub base_pay: Decimal,
    /// Overtime premium.
    pub overtime_pay: Decimal,
    /// Deduction for unpaid leave days.
    pub unpaid_leave_deduction: Decimal,
    /// Fixed deductions from the salary configuration.
    pub other_deductions: Decimal,
    /// Amount payable for the period.
    pub net_pay: Decimal,
    /// Currency of the monetary fields.
    pub currency: String,
    /// True while the period has not fully elapsed.
    pub is_provisional: bool,
}

impl SalaryRecord {
    /// A record with every figure zeroed, marked provisional.
    ///
    /// # Example
    ///
    /// ```
    /// use hr_engine::models::SalaryRecord;
    /// use rust_decimal::Decimal;
    ///
    /// let record = SalaryRecord::zeroed("USD");
    /// assert_eq!(record.net_pay, Decimal::ZERO);
    /// assert!(record.is_provisional);
    /// ```
    pub fn zeroed(currency: impl Into<String>) -> Self {
        Self {
            working_days: 0,
            days_present: 0,
            days_absent: Decimal::ZERO,
            paid_leave_days: Decimal::ZERO,
            unpaid_leave_days: Decimal::ZERO,
            late_arrivals: 0,
            early_leaves: 0,
            total_hours_worked: Decimal::ZERO,
            overtime_hours: Decimal::ZERO,
            hourly_rate: Decimal::ZERO,
            base_pay: Decimal::ZERO,
            overtime_pay: Decimal::ZERO,
            unpaid_leave_deduction: Decimal::ZERO,
            other_deductions: Decimal::ZERO,
            net_pay: Decimal::ZERO,
            currency: currency.into(),
            is_provisional: true,
        }
    }
}
