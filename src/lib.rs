//! Work-time classification and payroll calculation engine.
//!
//! This crate provides the computation core of an attendance management
//! system: classifying clock-in/clock-out intervals into overtime
//! categories and aggregating a period's worked hours into a payroll
//! figure. It holds no state and performs no I/O beyond loading a policy
//! document; the surrounding service supplies records and persists results.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod validation;
