//! File-backed stores for massa-checker
//!
//! Loads live in `loads.json`, application records in `applications.json`,
//! both under the configured data directory. Every mutation rewrites the
//! file; volumes here are small (dozens of loads, single-digit passes each).

mod applications;
mod loads;

pub use applications::ApplicationStore;
pub use loads::LoadStore;
