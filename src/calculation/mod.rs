//! Calculation logic for the work-time engine.
//!
//! This module contains the two computation entry points — work interval
//! classification and period payroll aggregation — together with the
//! late-night window overlap and compensation basis resolution they build
//! on. Everything here is a pure function over in-memory values; the two
//! entry points are independent and composed only by the caller.

mod compensation;
mod interval_analysis;
mod late_night;
mod payroll;

pub use compensation::CompensationBasis;
pub use interval_analysis::analyze_interval;
pub use late_night::late_night_overlap_hours;
pub use payroll::{calculate_payroll, sum_adjustments};
