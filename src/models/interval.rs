//! Work interval model.
//!
//! A [`WorkInterval`] is a single clock-in/clock-out pair on a calendar
//! date. An end time numerically earlier than the start time denotes a
//! shift that crosses midnight and ends on the following day.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::validation::parse_date;

use super::TimeOfDay;

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Represents one work interval: a date plus start and end times of day.
///
/// Intervals are constructed from caller-supplied strings via
/// [`WorkInterval::from_strings`], which performs all format and calendar
/// validation; a constructed interval is always well-formed, so the
/// analyzer that consumes it never fails. An interval may not span more
/// than 24 hours, which the clock-time representation makes unexpressible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkInterval {
    /// The calendar date the interval started on.
    pub date: NaiveDate,
    /// Clock-in time of day.
    pub start_time: TimeOfDay,
    /// Clock-out time of day; earlier than `start_time` means next-day end.
    pub end_time: TimeOfDay,
}

impl WorkInterval {
    /// Builds a validated interval from raw strings.
    ///
    /// # Arguments
    ///
    /// * `date` - `"YYYY-MM-DD"`, must be a real calendar date.
    /// * `start_time` / `end_time` - `"HH:MM"` or `"HH:MM:SS"`.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedDate`](crate::error::EngineError::MalformedDate) or
    /// [`MalformedTime`](crate::error::EngineError::MalformedTime) naming the
    /// offending field.
    ///
    /// # Examples
    ///
    /// ```
    /// use timecard_engine::models::WorkInterval;
    ///
    /// let interval = WorkInterval::from_strings("2025-02-12", "09:00", "18:00").unwrap();
    /// assert!(!interval.crosses_midnight());
    ///
    /// assert!(WorkInterval::from_strings("2025-02-29", "09:00", "18:00").is_err());
    /// ```
    pub fn from_strings(date: &str, start_time: &str, end_time: &str) -> EngineResult<Self> {
        Ok(Self {
            date: parse_date("date", date)?,
            start_time: TimeOfDay::parse("start_time", start_time)?,
            end_time: TimeOfDay::parse("end_time", end_time)?,
        })
    }

    /// Returns true if the shift ends on the day after it starts.
    pub fn crosses_midnight(&self) -> bool {
        self.end_time < self.start_time
    }

    /// Start time in minutes since midnight of the interval's date.
    pub fn start_minutes(&self) -> Decimal {
        self.start_time.minutes()
    }

    /// End time in minutes since midnight of the interval's date, with
    /// midnight-crossing shifts pushed into the next day (`+ 1440`).
    pub fn effective_end_minutes(&self) -> Decimal {
        let end = self.end_time.minutes();
        if self.crosses_midnight() {
            end + Decimal::from(MINUTES_PER_DAY)
        } else {
            end
        }
    }

    /// Worked duration in minutes.
    pub fn duration_minutes(&self) -> Decimal {
        self.effective_end_minutes() - self.start_minutes()
    }
}
