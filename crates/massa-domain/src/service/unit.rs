//! Mass unit conversion and normalization
//!
//! Standardization used across the tool:
//! - Input: forms and CSVs accept raw numbers in kg or tonnes
//! - Storage: always tonnes (3 decimal places)
//! - Display: tonnes with 1 decimal place (e.g., "120.0t")

use massa_types::{MassUnit, ValidationError};

pub fn kg_to_tonnes(kg: f64) -> f64 {
    kg / 1000.0
}

/// Normalize a user-entered mass value with no explicit unit to tonnes.
///
/// Typical tonnage values for this domain are at most double digits, while
/// kilogram entries are always in the thousands, so anything above 100 is
/// taken as kg. Values in the 100-1000 dead zone are ambiguous and also
/// treated as kg; callers that know the unit should use
/// [`normalize_with_unit`] instead.
pub fn normalize_to_tonnes(value: f64) -> f64 {
    if value <= 0.0 {
        return 0.0;
    }
    if value > 100.0 {
        return kg_to_tonnes(value);
    }
    value
}

/// Normalize with an explicit unit, falling back to the heuristic when the
/// unit was not supplied.
pub fn normalize_with_unit(value: f64, unit: Option<MassUnit>) -> f64 {
    match unit {
        Some(MassUnit::Kilograms) => {
            if value <= 0.0 {
                0.0
            } else {
                kg_to_tonnes(value)
            }
        }
        Some(MassUnit::Tonnes) => {
            if value <= 0.0 {
                0.0
            } else {
                value
            }
        }
        None => normalize_to_tonnes(value),
    }
}

/// Normalize and round to 3 decimal places for storage.
pub fn prepare_for_storage(value: f64, unit: Option<MassUnit>) -> f64 {
    let tonnes = normalize_with_unit(value, unit);
    (tonnes * 1000.0).round() / 1000.0
}

/// Validate a raw mass input before normalization.
pub fn validate_mass_input(value: f64) -> Result<(), ValidationError> {
    if value <= 0.0 {
        return Err(ValidationError::NonPositiveMass);
    }
    // 1000 tonnes expressed in kg
    if value > 1_000_000.0 {
        return Err(ValidationError::MassTooLarge(value));
    }
    Ok(())
}

/// Format a tonnes value for display, e.g. "120.0t".
pub fn format_mass(tonnes: f64, decimals: usize) -> String {
    format!("{:.*}t", decimals, tonnes)
}
