//! Error types for massa-checker

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[allow(dead_code)]
    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// Validation errors reported back to the caller; nothing is committed
/// when one of these is returned.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Massa deve ser maior que zero / Mass must be greater than zero")]
    NonPositiveMass,

    #[error("Valor muito alto ({0}). Use kg ou toneladas / Value too large ({0}). Use kg or tonnes")]
    MassTooLarge(f64),

    #[error(
        "Aplicação de {requested:.3}t excede massa remanescente de {remaining:.3}t / \
         Application of {requested:.3}t exceeds remaining mass of {remaining:.3}t"
    )]
    MassExceedsRemaining { requested: f64, remaining: f64 },

    #[error("Comprimento e largura devem ser positivos / Length and width must be positive")]
    InvalidGeometry,

    #[error("Massa total da carga deve ser maior que zero / Load total mass must be greater than zero")]
    NonPositiveLoadMass,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("CSV import error: {0}")]
    CsvImport(String),

    #[error("Load not found: {0}")]
    LoadNotFound(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

pub type Result<T> = std::result::Result<T, Error>;
