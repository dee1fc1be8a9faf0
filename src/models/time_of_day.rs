//! Clock-time type for attendance timestamps.
//!
//! Work intervals are keyed by wall-clock times of day rather than full
//! datetimes; crossing midnight is inferred from ordering, not encoded in
//! the value.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

const SECONDS_PER_MINUTE: u32 = 60;
const SECONDS_PER_HOUR: u32 = 3600;

/// A time of day parsed from `"H:MM"`, `"HH:MM"`, or `"HH:MM:SS"`.
///
/// Stored as seconds since midnight. The minute and decimal-hour views used
/// by the interval analyzer are exposed as [`Decimal`] values so downstream
/// arithmetic stays in fixed-point.
///
/// # Example
///
/// ```
/// use timecard_engine::models::TimeOfDay;
/// use rust_decimal::Decimal;
///
/// let t = TimeOfDay::parse("start_time", "09:30").unwrap();
/// assert_eq!(t.minutes(), Decimal::new(570, 0));
/// assert_eq!(t.hour_decimal(), Decimal::new(95, 1)); // 9.5
/// assert_eq!(t.to_string(), "09:30:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    seconds: u32,
}

impl TimeOfDay {
    /// Midnight (`00:00:00`), the default for bulk-entered records without
    /// explicit clock times.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay { seconds: 0 };

    /// Parses a time-of-day string.
    ///
    /// Accepts a one-or-two-digit hour (0-23), a two-digit minute, and an
    /// optional two-digit second, colon-separated. Anything else is rejected
    /// with [`EngineError::MalformedTime`] naming `field`.
    ///
    /// # Examples
    ///
    /// ```
    /// use timecard_engine::models::TimeOfDay;
    ///
    /// assert!(TimeOfDay::parse("start_time", "6:00").is_ok());
    /// assert!(TimeOfDay::parse("start_time", "22:15:30").is_ok());
    /// assert!(TimeOfDay::parse("start_time", "24:00").is_err());
    /// assert!(TimeOfDay::parse("start_time", "9:5").is_err());
    /// ```
    pub fn parse(field: &str, value: &str) -> EngineResult<Self> {
        let malformed = || EngineError::MalformedTime {
            field: field.to_string(),
            value: value.to_string(),
        };

        let parts: Vec<&str> = value.split(':').collect();
        if parts.len() < 2 || parts.len() > 3 {
            return Err(malformed());
        }

        let hour_part = parts[0];
        if hour_part.is_empty()
            || hour_part.len() > 2
            || !hour_part.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(malformed());
        }
        let hour: u32 = hour_part.parse().map_err(|_| malformed())?;
        if hour > 23 {
            return Err(malformed());
        }

        let minute = parse_two_digit(parts[1]).ok_or_else(malformed)?;
        if minute > 59 {
            return Err(malformed());
        }

        let second = match parts.get(2) {
            Some(part) => {
                let second = parse_two_digit(part).ok_or_else(malformed)?;
                if second > 59 {
                    return Err(malformed());
                }
                second
            }
            None => 0,
        };

        Ok(Self {
            seconds: hour * SECONDS_PER_HOUR + minute * SECONDS_PER_MINUTE + second,
        })
    }

    /// Returns the seconds elapsed since midnight.
    pub fn seconds_from_midnight(&self) -> u32 {
        self.seconds
    }

    /// Returns the minutes elapsed since midnight (`hh*60 + mm + ss/60`).
    pub fn minutes(&self) -> Decimal {
        Decimal::from(self.seconds) / Decimal::from(SECONDS_PER_MINUTE)
    }

    /// Returns the time as a decimal hour on the 0-24 clock.
    pub fn hour_decimal(&self) -> Decimal {
        Decimal::from(self.seconds) / Decimal::from(SECONDS_PER_HOUR)
    }
}

fn parse_two_digit(part: &str) -> Option<u32> {
    if part.len() != 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.seconds / SECONDS_PER_HOUR,
            self.seconds % SECONDS_PER_HOUR / SECONDS_PER_MINUTE,
            self.seconds % SECONDS_PER_MINUTE
        )
    }
}

impl FromStr for TimeOfDay {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse("time", s)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.to_string()
    }
}
