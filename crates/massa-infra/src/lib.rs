//! Infrastructure layer for massa-checker
//!
//! CSV import for deliveries and application records, plus CSV-backed
//! implementations of the domain repository traits.

pub mod csv_import;
pub mod persistence;
