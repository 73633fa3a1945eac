//! Core types for asphalt application bookkeeping

mod error;

pub use error::*;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Output format for results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Explicit mass unit for user input.
///
/// When absent, the heuristic in `normalize_to_tonnes` decides. The forms
/// never asked for a unit, so the heuristic is the compatibility default;
/// passing a unit here bypasses it entirely.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MassUnit {
    #[value(name = "kg")]
    Kilograms,
    #[value(name = "t")]
    Tonnes,
}

impl std::fmt::Display for MassUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MassUnit::Kilograms => write!(f, "kg"),
            MassUnit::Tonnes => write!(f, "t"),
        }
    }
}
