//! Interval analysis result model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The classification of a single work interval.
///
/// Produced by [`analyze_interval`](crate::calculation::analyze_interval);
/// a pure function of the interval and the policy settings.
///
/// # Example
///
/// ```
/// use timecard_engine::models::AnalysisResult;
/// use rust_decimal::Decimal;
///
/// let result = AnalysisResult {
///     early_overtime: true,
///     overtime: false,
///     early_leave: false,
///     late_night_overtime_hours: Decimal::ZERO,
/// };
/// assert!(result.early_overtime);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// The shift started before the early-overtime standard hour.
    pub early_overtime: bool,
    /// The shift ran into overtime under the policy's overtime rule.
    pub overtime: bool,
    /// The early-leave flag; its reading depends on the policy's overtime
    /// rule (see [`OvertimeRule`](crate::config::OvertimeRule)).
    pub early_leave: bool,
    /// Hours of overlap with the late-night window, rounded to 2 decimal
    /// places. Never negative.
    pub late_night_overtime_hours: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization_field_names() {
        let result = AnalysisResult {
            early_overtime: true,
            overtime: true,
            early_leave: false,
            late_night_overtime_hours: Decimal::new(150, 2),
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"early_overtime\":true"));
        assert!(json.contains("\"overtime\":true"));
        assert!(json.contains("\"early_leave\":false"));
        assert!(json.contains("\"late_night_overtime_hours\":\"1.50\""));
    }

    #[test]
    fn test_deserialization() {
        let json = r#"{
            "early_overtime": false,
            "overtime": true,
            "early_leave": false,
            "late_night_overtime_hours": "4.00"
        }"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert!(result.overtime);
        assert_eq!(result.late_night_overtime_hours, Decimal::new(400, 2));
    }
}
