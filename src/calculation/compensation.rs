//! Compensation basis resolution.
//!
//! A staff record may carry a monthly salary, an hourly rate, both, or
//! neither. Exactly one basis governs a payroll computation; resolving it
//! up front keeps the aggregation itself branch-simple.

use rust_decimal::Decimal;

use crate::config::PolicySettings;
use crate::models::CompensationTerms;

/// The single compensation basis governing a payroll computation.
///
/// Precedence: a monthly salary wins over an explicit hourly rate, and when
/// neither is present the policy's default hourly rate applies.
///
/// # Examples
///
/// ```
/// use timecard_engine::calculation::CompensationBasis;
/// use timecard_engine::config::PolicySettings;
/// use timecard_engine::models::CompensationTerms;
/// use rust_decimal::Decimal;
///
/// let policy = PolicySettings::default();
/// let terms = CompensationTerms::default();
///
/// // Neither salary nor rate set: the policy default governs
/// let basis = CompensationBasis::resolve(&terms, &policy);
/// assert_eq!(basis, CompensationBasis::Hourly(Decimal::from(1200)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompensationBasis {
    /// A fixed salary for the period.
    Monthly(Decimal),
    /// An hourly rate (explicit or policy default).
    Hourly(Decimal),
}

impl CompensationBasis {
    /// Resolves the governing basis from a staff record's terms.
    pub fn resolve(terms: &CompensationTerms, policy: &PolicySettings) -> Self {
        if let Some(salary) = terms.monthly_salary {
            CompensationBasis::Monthly(salary)
        } else if let Some(rate) = terms.hourly_rate {
            CompensationBasis::Hourly(rate)
        } else {
            CompensationBasis::Hourly(policy.default_hourly_rate)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> PolicySettings {
        PolicySettings::default()
    }

    #[test]
    fn test_monthly_salary_governs() {
        let terms = CompensationTerms {
            monthly_salary: Some(Decimal::from(300000)),
            ..CompensationTerms::default()
        };
        assert_eq!(
            CompensationBasis::resolve(&terms, &policy()),
            CompensationBasis::Monthly(Decimal::from(300000))
        );
    }

    #[test]
    fn test_hourly_rate_governs_when_no_salary() {
        let terms = CompensationTerms {
            hourly_rate: Some(Decimal::from(1500)),
            ..CompensationTerms::default()
        };
        assert_eq!(
            CompensationBasis::resolve(&terms, &policy()),
            CompensationBasis::Hourly(Decimal::from(1500))
        );
    }

    #[test]
    fn test_salary_takes_precedence_over_rate() {
        let terms = CompensationTerms {
            monthly_salary: Some(Decimal::from(300000)),
            hourly_rate: Some(Decimal::from(1500)),
            ..CompensationTerms::default()
        };
        assert_eq!(
            CompensationBasis::resolve(&terms, &policy()),
            CompensationBasis::Monthly(Decimal::from(300000))
        );
    }

    #[test]
    fn test_policy_default_rate_is_the_fallback() {
        let terms = CompensationTerms::default();
        assert_eq!(
            CompensationBasis::resolve(&terms, &policy()),
            CompensationBasis::Hourly(Decimal::from(1200))
        );
    }

    #[test]
    fn test_fallback_tracks_policy_value() {
        let custom = PolicySettings {
            default_hourly_rate: Decimal::from(950),
            ..policy()
        };
        let terms = CompensationTerms::default();
        assert_eq!(
            CompensationBasis::resolve(&terms, &custom),
            CompensationBasis::Hourly(Decimal::from(950))
        );
    }
}
