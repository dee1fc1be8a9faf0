//! Late-night window overlap calculation.
//!
//! The late-night premium applies to the portion of a shift that falls
//! inside the policy's late-night window. The window commonly wraps past
//! midnight (e.g. 22:00-05:00), in which case its end is read as
//! next-day.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::PolicySettings;

const MINUTES_PER_HOUR: u32 = 60;

/// Computes the hours a shift overlaps the late-night window.
///
/// Both arguments are minutes since midnight of the shift's starting date;
/// `effective_end_minutes` is already pushed past 1440 for shifts crossing
/// midnight. The result is clamped at zero and rounded to 2 decimal
/// places, half away from zero.
///
/// # Examples
///
/// ```
/// use timecard_engine::calculation::late_night_overlap_hours;
/// use timecard_engine::config::PolicySettings;
/// use rust_decimal::Decimal;
///
/// let policy = PolicySettings::default(); // window 22:00-05:00
///
/// // 21:00-02:00 overlaps 22:00-02:00
/// let hours = late_night_overlap_hours(
///     Decimal::from(21 * 60),
///     Decimal::from(26 * 60),
///     &policy,
/// );
/// assert_eq!(hours, Decimal::from(4));
/// ```
pub fn late_night_overlap_hours(
    start_minutes: Decimal,
    effective_end_minutes: Decimal,
    policy: &PolicySettings,
) -> Decimal {
    let minutes_per_hour = Decimal::from(MINUTES_PER_HOUR);

    let window_start = policy.late_night_start_hour * minutes_per_hour;
    // An end hour at or before the start hour means the window ends next-day
    let window_end = if policy.late_night_end_hour <= policy.late_night_start_hour {
        (policy.late_night_end_hour + Decimal::from(24)) * minutes_per_hour
    } else {
        policy.late_night_end_hour * minutes_per_hour
    };

    let overlap_start = start_minutes.max(window_start);
    let overlap_end = effective_end_minutes.min(window_end);
    let overlap_minutes = (overlap_end - overlap_start).max(Decimal::ZERO);

    (overlap_minutes / minutes_per_hour)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
