//! Policy settings types.
//!
//! The organization-wide thresholds and rates governing both the interval
//! analyzer and the payroll aggregator. A settings record is immutable per
//! computation and threaded through every call explicitly; there is no
//! process-wide settings singleton.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Selects how the overtime and early-leave flags are derived.
///
/// Two rules are in active use across deployments and both are intentional
/// behavior, so the choice is policy data rather than a compile-time
/// decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OvertimeRule {
    /// Overtime triggers once the shift exceeds the standard daily duration
    /// measured from its own start. Under this rule `early_leave` is set
    /// when the shift ends *after* the early-leave standard hour (a
    /// premium-eligibility reading).
    #[default]
    RollingDuration,
    /// Overtime triggers whenever the shift runs past a fixed clock hour,
    /// regardless of start time. Under this rule `early_leave` is set when
    /// the shift ends *before* the early-leave standard hour (a
    /// left-early reading).
    FixedBoundary,
}

/// Organization-wide policy thresholds and rates.
///
/// All hour values are decimal hours on a 0-24 clock. The late-night window
/// may wrap past midnight: `late_night_end_hour <= late_night_start_hour`
/// means the window ends on the following day.
///
/// # Example
///
/// ```
/// use timecard_engine::config::PolicySettings;
/// use rust_decimal::Decimal;
///
/// let policy = PolicySettings::default();
/// assert_eq!(policy.regular_hours_per_day, Decimal::from(8));
/// assert_eq!(policy.late_night_start_hour, Decimal::from(22));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicySettings {
    /// Standard worked hours per day before overtime accrues.
    pub regular_hours_per_day: Decimal,
    /// Starting before this hour counts as early-start overtime.
    pub early_overtime_standard_hour: Decimal,
    /// The reference hour for the early-leave flag.
    pub early_leave_standard_hour: Decimal,
    /// The fixed clock hour used by [`OvertimeRule::FixedBoundary`].
    pub overtime_standard_hour: Decimal,
    /// Start of the late-night premium window.
    pub late_night_start_hour: Decimal,
    /// End of the late-night premium window; `<= start` wraps to next day.
    pub late_night_end_hour: Decimal,
    /// Overtime premium as a percentage (25 means a 1.25x multiplier).
    pub overtime_rate: Decimal,
    /// Hourly rate applied when a staff record sets neither a salary nor a
    /// rate.
    pub default_hourly_rate: Decimal,
    /// The overtime/early-leave derivation rule.
    #[serde(default)]
    pub overtime_rule: OvertimeRule,
}

impl Default for PolicySettings {
    /// The reference deployment's values.
    fn default() -> Self {
        Self {
            regular_hours_per_day: Decimal::from(8),
            early_overtime_standard_hour: Decimal::from(7),
            early_leave_standard_hour: Decimal::from(17),
            overtime_standard_hour: Decimal::from(17),
            late_night_start_hour: Decimal::from(22),
            late_night_end_hour: Decimal::from(5),
            overtime_rate: Decimal::from(25),
            default_hourly_rate: Decimal::from(1200),
            overtime_rule: OvertimeRule::RollingDuration,
        }
    }
}

/// A policy settings record with every field optional.
///
/// This is the shape of partial update payloads and of tolerantly-loaded
/// policy documents. Two resolution paths exist: [`require`](Self::require)
/// rejects the first missing field, [`merge_with_defaults`](Self::merge_with_defaults)
/// fills gaps from [`PolicySettings::default`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PartialPolicySettings {
    /// See [`PolicySettings::regular_hours_per_day`].
    #[serde(default)]
    pub regular_hours_per_day: Option<Decimal>,
    /// See [`PolicySettings::early_overtime_standard_hour`].
    #[serde(default)]
    pub early_overtime_standard_hour: Option<Decimal>,
    /// See [`PolicySettings::early_leave_standard_hour`].
    #[serde(default)]
    pub early_leave_standard_hour: Option<Decimal>,
    /// See [`PolicySettings::overtime_standard_hour`].
    #[serde(default)]
    pub overtime_standard_hour: Option<Decimal>,
    /// See [`PolicySettings::late_night_start_hour`].
    #[serde(default)]
    pub late_night_start_hour: Option<Decimal>,
    /// See [`PolicySettings::late_night_end_hour`].
    #[serde(default)]
    pub late_night_end_hour: Option<Decimal>,
    /// See [`PolicySettings::overtime_rate`].
    #[serde(default)]
    pub overtime_rate: Option<Decimal>,
    /// See [`PolicySettings::default_hourly_rate`].
    #[serde(default)]
    pub default_hourly_rate: Option<Decimal>,
    /// See [`PolicySettings::overtime_rule`].
    #[serde(default)]
    pub overtime_rule: Option<OvertimeRule>,
}

impl PartialPolicySettings {
    /// Resolves to full settings, rejecting the first missing numeric field.
    ///
    /// The overtime rule is exempt: existing settings records predate it,
    /// so an absent rule takes the default rather than failing.
    ///
    /// # Errors
    ///
    /// [`EngineError::PolicyGap`] naming the missing field.
    pub fn require(self) -> EngineResult<PolicySettings> {
        fn need(field: &'static str, value: Option<Decimal>) -> EngineResult<Decimal> {
            value.ok_or_else(|| EngineError::PolicyGap {
                field: field.to_string(),
            })
        }

        Ok(PolicySettings {
            regular_hours_per_day: need("regular_hours_per_day", self.regular_hours_per_day)?,
            early_overtime_standard_hour: need(
                "early_overtime_standard_hour",
                self.early_overtime_standard_hour,
            )?,
            early_leave_standard_hour: need(
                "early_leave_standard_hour",
                self.early_leave_standard_hour,
            )?,
            overtime_standard_hour: need("overtime_standard_hour", self.overtime_standard_hour)?,
            late_night_start_hour: need("late_night_start_hour", self.late_night_start_hour)?,
            late_night_end_hour: need("late_night_end_hour", self.late_night_end_hour)?,
            overtime_rate: need("overtime_rate", self.overtime_rate)?,
            default_hourly_rate: need("default_hourly_rate", self.default_hourly_rate)?,
            overtime_rule: self.overtime_rule.unwrap_or_default(),
        })
    }

    /// Overlays this partial record onto `base`, field by field.
    pub fn apply_to(self, base: PolicySettings) -> PolicySettings {
        PolicySettings {
            regular_hours_per_day: self
                .regular_hours_per_day
                .unwrap_or(base.regular_hours_per_day),
            early_overtime_standard_hour: self
                .early_overtime_standard_hour
                .unwrap_or(base.early_overtime_standard_hour),
            early_leave_standard_hour: self
                .early_leave_standard_hour
                .unwrap_or(base.early_leave_standard_hour),
            overtime_standard_hour: self
                .overtime_standard_hour
                .unwrap_or(base.overtime_standard_hour),
            late_night_start_hour: self
                .late_night_start_hour
                .unwrap_or(base.late_night_start_hour),
            late_night_end_hour: self.late_night_end_hour.unwrap_or(base.late_night_end_hour),
            overtime_rate: self.overtime_rate.unwrap_or(base.overtime_rate),
            default_hourly_rate: self.default_hourly_rate.unwrap_or(base.default_hourly_rate),
            overtime_rule: self.overtime_rule.unwrap_or(base.overtime_rule),
        }
    }

    /// Resolves to full settings, filling every gap from the defaults.
    ///
    /// This is the merge-with-defaults boundary step: after it, the core
    /// computation sees a complete record and stays total.
    pub fn merge_with_defaults(self) -> PolicySettings {
        self.apply_to(PolicySettings::default())
    }
}
