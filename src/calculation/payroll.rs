//! Period payroll aggregation.
//!
//! Aggregates a staff member's per-day worked-hours figures into a payroll
//! result: regular/overtime split, base and overtime pay, and the net total
//! after allowances and deductions.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::PolicySettings;
use crate::models::{Adjustment, Attendance, CompensationTerms, PayrollResult};

use super::compensation::CompensationBasis;

/// Computes the payroll figure for one staff member over one period.
///
/// Total function: an empty attendance list yields all-zero hour figures,
/// and records with missing hours were already defaulted to 0 at the
/// boundary. The computation is a pure function of its inputs; calling it
/// twice with the same inputs yields the same result.
///
/// Salaried staff receive their fixed salary as the running total with
/// overtime pay left at 0 (their overtime is settled by a separate
/// downstream process); hourly staff are paid `regular_hours * rate` plus
/// `overtime_hours * rate * (1 + overtime_rate/100)`.
///
/// # Examples
///
/// ```
/// use timecard_engine::calculation::calculate_payroll;
/// use timecard_engine::config::PolicySettings;
/// use timecard_engine::models::{Attendance, CompensationTerms, TimeOfDay};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let policy = PolicySettings::default();
/// let terms = CompensationTerms {
///     hourly_rate: Some(Decimal::from(1500)),
///     ..CompensationTerms::default()
/// };
/// let attendances: Vec<Attendance> = (1..=3)
///     .map(|day| Attendance {
///         staff_id: "staff_01".to_string(),
///         date: NaiveDate::from_ymd_opt(2025, 2, day).unwrap(),
///         start_time: TimeOfDay::parse("t", "09:00").unwrap(),
///         end_time: TimeOfDay::parse("t", "18:00").unwrap(),
///         work_hours: Decimal::from(8),
///     })
///     .collect();
///
/// let result = calculate_payroll(&terms, &attendances, &policy);
/// assert_eq!(result.base_pay, Decimal::from(36000));
/// assert_eq!(result.total, Decimal::from(36000));
/// ```
pub fn calculate_payroll(
    terms: &CompensationTerms,
    attendances: &[Attendance],
    policy: &PolicySettings,
) -> PayrollResult {
    let total_work_hours: Decimal = attendances.iter().map(|a| a.work_hours).sum();
    let work_days = attendances.len() as u32;
    let standard_hours = policy.regular_hours_per_day * Decimal::from(work_days);

    let basis = CompensationBasis::resolve(terms, policy);

    let mut result = match basis {
        CompensationBasis::Monthly(salary) => {
            let regular_hours = standard_hours;
            let overtime_hours = (total_work_hours - regular_hours).max(Decimal::ZERO);
            PayrollResult {
                work_days,
                total_work_hours,
                regular_hours,
                overtime_hours,
                base_salary: Some(salary),
                hourly_rate: None,
                base_pay: Decimal::ZERO,
                overtime_pay: Decimal::ZERO,
                allowances_total: Decimal::ZERO,
                deductions_total: Decimal::ZERO,
                total: salary,
            }
        }
        CompensationBasis::Hourly(rate) => {
            let regular_hours = total_work_hours.min(standard_hours);
            let overtime_hours = (total_work_hours - regular_hours).max(Decimal::ZERO);
            let base_pay = regular_hours * rate;
            let overtime_pay = overtime_hours
                * rate
                * (Decimal::ONE + policy.overtime_rate / Decimal::ONE_HUNDRED);
            PayrollResult {
                work_days,
                total_work_hours,
                regular_hours,
                overtime_hours,
                base_salary: None,
                hourly_rate: Some(rate),
                base_pay,
                overtime_pay,
                allowances_total: Decimal::ZERO,
                deductions_total: Decimal::ZERO,
                total: base_pay + overtime_pay,
            }
        }
    };

    result.allowances_total = sum_adjustments(&terms.allowances);
    result.deductions_total = sum_adjustments(&terms.deductions);
    result.total = result.total + result.allowances_total - result.deductions_total;

    debug!(
        work_days = result.work_days,
        total_work_hours = %result.total_work_hours,
        overtime_hours = %result.overtime_hours,
        total = %result.total,
        "Calculated payroll"
    );

    result
}

/// Sums a list of adjustment amounts; an empty list sums to 0.
pub fn sum_adjustments(adjustments: &[Adjustment]) -> Decimal {
    adjustments.iter().map(|a| a.amount).sum()
}
