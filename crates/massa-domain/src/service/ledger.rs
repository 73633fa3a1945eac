//! Remaining-mass ledger
//!
//! Remaining mass is always recomputed from the full application history of
//! a load, never kept as a running counter that could drift.

use serde::{Deserialize, Serialize};

use massa_types::ValidationError;

use crate::model::ApplicationRecord;
use crate::service::calculation::{percent_applied, round_mass};

/// Remaining mass given the total and every applied mass so far, floored at 0.
pub fn remaining(total_t: f64, applied_so_far: &[f64]) -> f64 {
    let applied: f64 = applied_so_far.iter().sum();
    (total_t - applied).max(0.0)
}

/// Remaining mass from a load's application history.
pub fn remaining_for_records(total_t: f64, records: &[ApplicationRecord]) -> f64 {
    let applied: Vec<f64> = records.iter().map(|r| r.applied_mass_t).collect();
    remaining(total_t, &applied)
}

/// Validate a new application request against the current remaining mass.
///
/// Rejects rather than clamps. Both sides are compared at storage precision
/// (3 decimal places): summing the history in floats can leave the remaining
/// a hair below its stored value, and that noise must not reject a request
/// for exactly what is left.
pub fn validate_new_application(requested_t: f64, remaining_t: f64) -> Result<(), ValidationError> {
    let requested = round_mass(requested_t);
    let remaining = round_mass(remaining_t);
    if requested > remaining {
        return Err(ValidationError::MassExceedsRemaining {
            requested,
            remaining,
        });
    }
    Ok(())
}

/// Progress of a load's consumption.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MassProgress {
    pub total_t: f64,
    pub applied_t: f64,
    pub remaining_t: f64,
    pub percent_applied: f64,
    pub is_complete: bool,
}

/// Compute progress from the full history.
pub fn progress(total_t: f64, records: &[ApplicationRecord]) -> MassProgress {
    let applied_t: f64 = records.iter().map(|r| r.applied_mass_t).sum();
    let remaining_t = (total_t - applied_t).max(0.0);
    MassProgress {
        total_t,
        applied_t: round_mass(applied_t),
        remaining_t: round_mass(remaining_t),
        percent_applied: percent_applied(applied_t, total_t),
        is_complete: round_mass(applied_t) >= round_mass(total_t),
    }
}
