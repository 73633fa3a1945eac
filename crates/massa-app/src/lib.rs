//! Application service layer for massa-checker

pub mod config;
pub mod ledger_service;

pub use config::Config;
pub use ledger_service::{
    ApplicationOutcome, LedgerService, LoadStatus, RecordApplication, RegisterLoad,
};
