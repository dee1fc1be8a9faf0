//! Validation helpers for caller-supplied strings.
//!
//! Date, month, and identifier values arrive at the engine boundary as raw
//! strings. These helpers reject malformed values with a descriptive error
//! naming the offending field; nothing is silently coerced.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

/// Distinguishes UUID-form identifiers from plain opaque identifiers.
///
/// The surrounding system uses both randomly generated UUIDs and
/// human-assigned codes as record identifiers; routing logic treats the
/// two differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    /// Hyphenated 8-4-4-4-12 hexadecimal form, case-insensitive.
    Uuid,
    /// Any other non-empty string.
    Opaque,
}

impl IdentifierKind {
    /// Classifies an identifier string.
    ///
    /// # Examples
    ///
    /// ```
    /// use timecard_engine::validation::IdentifierKind;
    ///
    /// let kind = IdentifierKind::classify("550e8400-e29b-41d4-a716-446655440000");
    /// assert_eq!(kind, IdentifierKind::Uuid);
    /// assert_eq!(IdentifierKind::classify("staff_42"), IdentifierKind::Opaque);
    /// ```
    pub fn classify(identifier: &str) -> Self {
        // Uuid::try_parse also accepts braced, simple, and urn forms; the
        // length check pins this to the hyphenated form only.
        if identifier.len() == 36 && Uuid::try_parse(identifier).is_ok() {
            IdentifierKind::Uuid
        } else {
            IdentifierKind::Opaque
        }
    }
}

/// A calendar month, parsed from a `"YYYY-MM"` string.
///
/// Used to derive the attendance date range for a payroll period.
///
/// # Example
///
/// ```
/// use timecard_engine::validation::Month;
/// use chrono::NaiveDate;
///
/// let month = Month::parse("2025-02").unwrap();
/// assert_eq!(month.first_day(), NaiveDate::from_ymd_opt(2025, 2, 1).unwrap());
/// assert_eq!(month.last_day(), NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Month {
    /// The four-digit year.
    pub year: i32,
    /// The month number (1-12).
    pub month: u32,
}

impl Month {
    /// Parses a `"YYYY-MM"` string into a [`Month`].
    ///
    /// Rejects anything that is not exactly four digits, a hyphen, and two
    /// digits in the 01-12 range.
    pub fn parse(value: &str) -> EngineResult<Self> {
        let malformed = || EngineError::MalformedMonth {
            value: value.to_string(),
        };

        if !has_shape(value, &[4, 2]) {
            return Err(malformed());
        }
        let year: i32 = value[..4].parse().map_err(|_| malformed())?;
        let month: u32 = value[5..7].parse().map_err(|_| malformed())?;
        if !(1..=12).contains(&month) {
            return Err(malformed());
        }
        Ok(Self { year, month })
    }

    /// Returns the first day of the month.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or(NaiveDate::MIN)
    }

    /// Returns the last day of the month, accounting for leap years.
    pub fn last_day(&self) -> NaiveDate {
        let (next_year, next_month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|d| d.pred_opt())
            .unwrap_or(NaiveDate::MAX)
    }
}

/// Parses a `"YYYY-MM-DD"` string into a calendar-valid date.
///
/// The shape check is strict (four-digit year, two-digit month, two-digit
/// day, hyphen-separated) and the date must exist on the calendar, so
/// `"2025-02-29"` is rejected while `"2024-02-29"` is accepted.
///
/// # Arguments
///
/// * `field` - The field name used in the error message.
/// * `value` - The raw date string.
///
/// # Examples
///
/// ```
/// use timecard_engine::validation::parse_date;
///
/// assert!(parse_date("date", "2024-02-29").is_ok());
/// assert!(parse_date("date", "2025-02-29").is_err());
/// assert!(parse_date("date", "2025-04-31").is_err());
/// ```
pub fn parse_date(field: &str, value: &str) -> EngineResult<NaiveDate> {
    let malformed = || EngineError::MalformedDate {
        field: field.to_string(),
        value: value.to_string(),
    };

    if !has_shape(value, &[4, 2, 2]) {
        return Err(malformed());
    }
    let year: i32 = value[..4].parse().map_err(|_| malformed())?;
    let month: u32 = value[5..7].parse().map_err(|_| malformed())?;
    let day: u32 = value[8..10].parse().map_err(|_| malformed())?;

    // from_ymd_opt enforces calendar validity, including leap-year February.
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(malformed)
}

/// Checks that `value` consists of hyphen-separated all-digit groups with
/// the given lengths.
fn has_shape(value: &str, group_lens: &[usize]) -> bool {
    let groups: Vec<&str> = value.split('-').collect();
    groups.len() == group_lens.len()
        && groups.iter().zip(group_lens).all(|(group, len)| {
            group.len() == *len && group.bytes().all(|b| b.is_ascii_digit())
        })
}
