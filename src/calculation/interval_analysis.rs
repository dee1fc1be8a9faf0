//! Work interval classification.
//!
//! Classifies a single clock-in/clock-out interval against the policy
//! thresholds: early-start overtime, late-finish overtime, early leave,
//! and late-night overtime duration.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::{OvertimeRule, PolicySettings};
use crate::models::{AnalysisResult, WorkInterval};

use super::late_night::late_night_overlap_hours;

const MINUTES_PER_HOUR: u32 = 60;

/// Classifies one work interval.
///
/// Pure function of its inputs; a constructed [`WorkInterval`] is already
/// validated, so this never fails. A shift whose end time is numerically
/// earlier than its start time is treated as ending on the following day.
///
/// The `overtime` and `early_leave` flags are derived according to
/// `policy.overtime_rule`; see [`OvertimeRule`] for the two readings. A
/// zero-length interval is never overtime under either rule.
///
/// # Examples
///
/// ```
/// use timecard_engine::calculation::analyze_interval;
/// use timecard_engine::config::PolicySettings;
/// use timecard_engine::models::WorkInterval;
/// use rust_decimal::Decimal;
///
/// let policy = PolicySettings::default();
/// let interval = WorkInterval::from_strings("2025-02-12", "21:00", "02:00").unwrap();
/// let result = analyze_interval(&interval, &policy);
///
/// assert_eq!(result.late_night_overtime_hours, Decimal::from(4));
/// assert!(!result.overtime); // 5 hours worked, under the 8-hour standard day
/// ```
pub fn analyze_interval(interval: &WorkInterval, policy: &PolicySettings) -> AnalysisResult {
    let start_minutes = interval.start_minutes();
    let effective_end_minutes = interval.effective_end_minutes();

    let start_hour = interval.start_time.hour_decimal();
    let end_hour = effective_end_minutes / Decimal::from(MINUTES_PER_HOUR);

    let early_overtime = start_hour < policy.early_overtime_standard_hour;

    let (overtime, early_leave) = match policy.overtime_rule {
        OvertimeRule::RollingDuration => {
            // Statutory end = shift start + standard daily duration
            let regular_end_minutes = start_minutes
                + policy.regular_hours_per_day * Decimal::from(MINUTES_PER_HOUR);
            (
                effective_end_minutes > regular_end_minutes,
                end_hour > policy.early_leave_standard_hour,
            )
        }
        OvertimeRule::FixedBoundary => (
            end_hour > policy.overtime_standard_hour,
            end_hour < policy.early_leave_standard_hour,
        ),
    };

    // A zero-length interval is never overtime, whichever rule applies
    let overtime = overtime && effective_end_minutes > start_minutes;

    let late_night_overtime_hours =
        late_night_overlap_hours(start_minutes, effective_end_minutes, policy);

    debug!(
        date = %interval.date,
        early_overtime,
        overtime,
        early_leave,
        late_night_hours = %late_night_overtime_hours,
        "Classified work interval"
    );

    AnalysisResult {
        early_overtime,
        overtime,
        early_leave,
        late_night_overtime_hours,
    }
}
