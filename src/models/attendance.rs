//! Attendance record models.
//!
//! An [`Attendance`] row is one staff member's clock data for one day. The
//! payroll aggregator consumes only the `work_hours` figure; the clock
//! times are kept for the interval analyzer and for record display.
//!
//! Bulk entry screens submit sparse [`BulkAttendanceItem`] rows that are
//! expanded into full records with midnight/zero defaults.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::TimeOfDay;

/// One day's attendance for one staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendance {
    /// Identifier of the staff member this record belongs to.
    pub staff_id: String,
    /// The calendar date of the attendance.
    pub date: NaiveDate,
    /// Clock-in time.
    pub start_time: TimeOfDay,
    /// Clock-out time.
    pub end_time: TimeOfDay,
    /// Worked hours for the day; absent values default to 0 so a partial
    /// record still contributes to a best-effort payroll figure.
    #[serde(default)]
    pub work_hours: Decimal,
}

impl Attendance {
    /// Validates a single record at the entry boundary.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidAttendance`] with index 0 when `staff_id` is
    /// empty.
    pub fn validate(&self) -> EngineResult<()> {
        if self.staff_id.is_empty() {
            return Err(EngineError::InvalidAttendance {
                index: 0,
                message: "staff_id is required".to_string(),
            });
        }
        Ok(())
    }
}

/// One row of a bulk attendance submission.
///
/// Only `staff_id` is required; times and hours left blank take the same
/// defaults the original entry form applied (midnight, zero hours).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkAttendanceItem {
    /// Identifier of the staff member.
    pub staff_id: String,
    /// Clock-in time, if entered.
    #[serde(default)]
    pub start_time: Option<TimeOfDay>,
    /// Clock-out time, if entered.
    #[serde(default)]
    pub end_time: Option<TimeOfDay>,
    /// Worked hours, if entered.
    #[serde(default)]
    pub work_hours: Option<Decimal>,
}

impl BulkAttendanceItem {
    /// Expands this row into a full [`Attendance`] record for `date`.
    ///
    /// # Example
    ///
    /// ```
    /// use timecard_engine::models::{BulkAttendanceItem, TimeOfDay};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let item = BulkAttendanceItem {
    ///     staff_id: "staff_01".to_string(),
    ///     start_time: None,
    ///     end_time: None,
    ///     work_hours: None,
    /// };
    /// let record = item.into_attendance(NaiveDate::from_ymd_opt(2025, 2, 12).unwrap());
    /// assert_eq!(record.start_time, TimeOfDay::MIDNIGHT);
    /// assert_eq!(record.work_hours, Decimal::ZERO);
    /// ```
    pub fn into_attendance(self, date: NaiveDate) -> Attendance {
        Attendance {
            staff_id: self.staff_id,
            date,
            start_time: self.start_time.unwrap_or(TimeOfDay::MIDNIGHT),
            end_time: self.end_time.unwrap_or(TimeOfDay::MIDNIGHT),
            work_hours: self.work_hours.unwrap_or(Decimal::ZERO),
        }
    }
}

/// Validates a bulk attendance list.
///
/// An empty list is allowed. Each item's `staff_id` must be non-empty; the
/// error message carries the offending index.
pub fn validate_bulk_list(items: &[BulkAttendanceItem]) -> EngineResult<()> {
    for (index, item) in items.iter().enumerate() {
        if item.staff_id.is_empty() {
            return Err(EngineError::InvalidAttendance {
                index,
                message: "staff_id is required".to_string(),
            });
        }
    }
    Ok(())
}

/// Expands a bulk attendance list into full records for `date`.
pub fn convert_bulk_list(items: Vec<BulkAttendanceItem>, date: NaiveDate) -> Vec<Attendance> {
    items
        .into_iter()
        .map(|item| item.into_attendance(date))
        .collect()
}
