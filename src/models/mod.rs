//! Data models for the work-time engine.
//!
//! All entities are transient: constructed fresh per computation from
//! caller-supplied data and discarded after the result is returned.

mod analysis;
mod attendance;
mod interval;
mod payroll;
mod staff;
mod time_of_day;

pub use analysis::AnalysisResult;
pub use attendance::{
    Attendance, BulkAttendanceItem, convert_bulk_list, validate_bulk_list,
};
pub use interval::WorkInterval;
pub use payroll::PayrollResult;
pub use staff::{Adjustment, CompensationTerms, StaffRecord};
pub use time_of_day::TimeOfDay;
