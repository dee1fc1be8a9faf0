//! Payroll result model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The complete result of a period payroll computation.
///
/// Every field is derived from the inputs by
/// [`calculate_payroll`](crate::calculation::calculate_payroll); nothing is
/// independently mutable. Exactly one of `base_salary` / `hourly_rate` is
/// set, echoing which compensation basis governed the computation.
///
/// # Example
///
/// ```
/// use timecard_engine::models::PayrollResult;
/// use rust_decimal::Decimal;
///
/// let result = PayrollResult {
///     work_days: 3,
///     total_work_hours: Decimal::from(24),
///     regular_hours: Decimal::from(24),
///     overtime_hours: Decimal::ZERO,
///     base_salary: None,
///     hourly_rate: Some(Decimal::from(1500)),
///     base_pay: Decimal::from(36000),
///     overtime_pay: Decimal::ZERO,
///     allowances_total: Decimal::ZERO,
///     deductions_total: Decimal::ZERO,
///     total: Decimal::from(36000),
/// };
/// assert_eq!(result.total, Decimal::from(36000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// Number of attendance records in the period (by record, not by
    /// distinct calendar date).
    pub work_days: u32,
    /// Sum of the per-day worked-hours figures.
    pub total_work_hours: Decimal,
    /// Hours within the standard daily allowance.
    pub regular_hours: Decimal,
    /// Hours in excess of the standard allowance.
    pub overtime_hours: Decimal,
    /// The fixed period salary, when the salaried basis governed.
    #[serde(default)]
    pub base_salary: Option<Decimal>,
    /// The hourly rate applied, when the hourly basis governed.
    #[serde(default)]
    pub hourly_rate: Option<Decimal>,
    /// Pay for regular hours (0 for salaried staff, whose fixed salary is
    /// carried in `base_salary`).
    pub base_pay: Decimal,
    /// Pay for overtime hours including the premium (0 for salaried staff;
    /// their overtime is computed by a separate downstream process).
    pub overtime_pay: Decimal,
    /// Sum of allowance amounts.
    pub allowances_total: Decimal,
    /// Sum of deduction amounts.
    pub deductions_total: Decimal,
    /// Net total: pay plus allowances minus deductions.
    pub total: Decimal,
}
