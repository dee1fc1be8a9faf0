//! Error types for the work-time engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all failure conditions at the engine's validation and configuration
//! boundary. The computation functions themselves are total and never
//! return these errors.

use thiserror::Error;

/// The main error type for the work-time engine.
///
/// All fallible operations in the crate return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use timecard_engine::error::EngineError;
///
/// let error = EngineError::MalformedDate {
///     field: "date".to_string(),
///     value: "2025-02-29".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Field 'date' is not a valid calendar date: '2025-02-29'"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A date string failed its format or calendar-validity check.
    #[error("Field '{field}' is not a valid calendar date: '{value}'")]
    MalformedDate {
        /// The name of the offending field.
        field: String,
        /// The rejected value.
        value: String,
    },

    /// A time-of-day string failed its format check.
    #[error("Field '{field}' is not a valid time of day: '{value}' (expected HH:MM or HH:MM:SS)")]
    MalformedTime {
        /// The name of the offending field.
        field: String,
        /// The rejected value.
        value: String,
    },

    /// A month string failed its format check.
    #[error("Not a valid month: '{value}' (expected YYYY-MM)")]
    MalformedMonth {
        /// The rejected value.
        value: String,
    },

    /// A policy-settings field required for a computation is absent.
    #[error("Policy settings are missing required field '{field}'")]
    PolicyGap {
        /// The missing policy field.
        field: String,
    },

    /// Policy document was not found at the specified path.
    #[error("Policy document not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Policy document could not be parsed.
    #[error("Failed to parse policy document '{path}': {message}")]
    ConfigParseError {
        /// The path to the document that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An attendance record was invalid or incomplete.
    #[error("Invalid attendance record [{index}]: {message}")]
    InvalidAttendance {
        /// The position of the record in its list (0 for a single record).
        index: usize,
        /// A description of what made the record invalid.
        message: String,
    },

    /// A staff record field was invalid.
    #[error("Invalid staff field '{field}': {message}")]
    InvalidStaff {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
