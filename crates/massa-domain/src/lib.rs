//! Domain layer for massa-checker
//!
//! Models, pure calculation services, and repository traits for asphalt
//! application bookkeeping (loads, application records, remaining mass).

pub mod model;
pub mod repository;
pub mod service;
