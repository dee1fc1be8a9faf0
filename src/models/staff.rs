//! Staff record and compensation models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::validation::parse_date;

/// A named allowance or deduction applied to a payroll total.
///
/// The amount is a signed magnitude; whether it is added or subtracted is
/// determined by which list it appears in on the staff record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adjustment {
    /// Display label, e.g. a commuting or housing allowance name.
    pub name: String,
    /// The amount; absent values default to 0 rather than failing.
    #[serde(default)]
    pub amount: Decimal,
}

/// The compensation terms read from a staff record.
///
/// Exactly one basis governs a payroll computation: a monthly salary takes
/// precedence over an hourly rate, and when neither is present the policy's
/// default hourly rate applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CompensationTerms {
    /// Fixed salary for the period, if the staff member is salaried.
    #[serde(default)]
    pub monthly_salary: Option<Decimal>,
    /// Explicit hourly rate, if one is set on the record.
    #[serde(default)]
    pub hourly_rate: Option<Decimal>,
    /// Allowances added to the payroll total.
    #[serde(default)]
    pub allowances: Vec<Adjustment>,
    /// Deductions subtracted from the payroll total.
    #[serde(default)]
    pub deductions: Vec<Adjustment>,
}

/// A staff master record as submitted by the caller.
///
/// Date fields arrive as raw strings from form input and may legitimately
/// be blank; [`StaffRecord::normalize_dates`] maps blanks to `None` and
/// validates the rest before the record is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffRecord {
    /// Record identifier; absent for not-yet-persisted records.
    #[serde(default)]
    pub id: Option<String>,
    /// Display name.
    pub name: String,
    /// Contact email, if any.
    #[serde(default)]
    pub email: Option<String>,
    /// Hire date as a raw `"YYYY-MM-DD"` string.
    #[serde(default)]
    pub hire_date: Option<String>,
    /// Birth date as a raw `"YYYY-MM-DD"` string.
    #[serde(default)]
    pub birth_date: Option<String>,
    /// Retirement date as a raw `"YYYY-MM-DD"` string.
    #[serde(default)]
    pub retire_date: Option<String>,
}

impl StaffRecord {
    /// Normalizes the date fields: empty strings become `None`, anything
    /// else must be a valid calendar date.
    ///
    /// # Errors
    ///
    /// [`MalformedDate`](crate::error::EngineError::MalformedDate) naming
    /// the offending field.
    ///
    /// # Example
    ///
    /// ```
    /// use timecard_engine::models::StaffRecord;
    ///
    /// let record = StaffRecord {
    ///     id: None,
    ///     name: "Yamada".to_string(),
    ///     email: None,
    ///     hire_date: Some("2023-04-01".to_string()),
    ///     birth_date: Some("".to_string()),
    ///     retire_date: None,
    /// };
    /// let normalized = record.normalize_dates().unwrap();
    /// assert_eq!(normalized.hire_date.as_deref(), Some("2023-04-01"));
    /// assert_eq!(normalized.birth_date, None);
    /// ```
    pub fn normalize_dates(mut self) -> EngineResult<Self> {
        self.hire_date = normalize_date_field("hire_date", self.hire_date)?;
        self.birth_date = normalize_date_field("birth_date", self.birth_date)?;
        self.retire_date = normalize_date_field("retire_date", self.retire_date)?;
        Ok(self)
    }
}

fn normalize_date_field(field: &str, value: Option<String>) -> EngineResult<Option<String>> {
    match value {
        None => Ok(None),
        Some(raw) if raw.is_empty() => Ok(None),
        Some(raw) => {
            parse_date(field, &raw)?;
            Ok(Some(raw))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn record() -> StaffRecord {
        StaffRecord {
            id: Some("staff_01".to_string()),
            name: "Yamada".to_string(),
            email: Some("yamada@example.com".to_string()),
            hire_date: Some("2023-04-01".to_string()),
            birth_date: Some("1990-01-15".to_string()),
            retire_date: None,
        }
    }

    #[test]
    fn test_normalize_keeps_valid_dates() {
        let normalized = record().normalize_dates().unwrap();
        assert_eq!(normalized.hire_date.as_deref(), Some("2023-04-01"));
        assert_eq!(normalized.birth_date.as_deref(), Some("1990-01-15"));
        assert_eq!(normalized.retire_date, None);
    }

    #[test]
    fn test_normalize_maps_empty_to_none() {
        let mut raw = record();
        raw.hire_date = Some(String::new());
        let normalized = raw.normalize_dates().unwrap();
        assert_eq!(normalized.hire_date, None);
    }

    #[test]
    fn test_normalize_rejects_malformed_date() {
        let mut raw = record();
        raw.retire_date = Some("2025-2-1".to_string());
        let err = raw.normalize_dates().unwrap_err();
        assert!(err.to_string().contains("retire_date"));
    }

    #[test]
    fn test_normalize_rejects_impossible_date() {
        let mut raw = record();
        raw.birth_date = Some("1990-02-30".to_string());
        assert!(raw.normalize_dates().is_err());
    }

    #[test]
    fn test_adjustment_amount_defaults_to_zero() {
        let adjustment: Adjustment = serde_json::from_str(r#"{"name": "commute"}"#).unwrap();
        assert_eq!(adjustment.amount, Decimal::ZERO);
    }

    #[test]
    fn test_compensation_terms_deserialize_salaried() {
        let json = r#"{
            "monthly_salary": "300000",
            "allowances": [{"name": "commute", "amount": "15000"}],
            "deductions": [{"name": "insurance", "amount": "35000"}]
        }"#;
        let terms: CompensationTerms = serde_json::from_str(json).unwrap();
        assert_eq!(terms.monthly_salary, Some(Decimal::from(300000)));
        assert_eq!(terms.hourly_rate, None);
        assert_eq!(terms.allowances.len(), 1);
        assert_eq!(terms.deductions[0].amount, Decimal::from(35000));
    }

    #[test]
    fn test_compensation_terms_deserialize_hourly() {
        let json = r#"{"hourly_rate": "1500.50"}"#;
        let terms: CompensationTerms = serde_json::from_str(json).unwrap();
        assert_eq!(terms.hourly_rate, Some(Decimal::from_str("1500.50").unwrap()));
        assert!(terms.allowances.is_empty());
        assert!(terms.deductions.is_empty());
    }

    #[test]
    fn test_compensation_terms_default_is_empty() {
        let terms = CompensationTerms::default();
        assert_eq!(terms.monthly_salary, None);
        assert_eq!(terms.hourly_rate, None);
        assert!(terms.allowances.is_empty());
    }

    #[test]
    fn test_staff_record_serde_round_trip() {
        let original = record();
        let json = serde_json::to_string(&original).unwrap();
        let back: StaffRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, original);
    }
}
