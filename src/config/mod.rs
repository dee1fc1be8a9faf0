//! Policy settings and their loading.
//!
//! The settings record is an explicit parameter of every computation; this
//! module defines its shape, the partial form used for sparse documents and
//! updates, and the YAML loader.

mod loader;
mod types;

pub use loader::PolicyLoader;
pub use types::{OvertimeRule, PartialPolicySettings, PolicySettings};
