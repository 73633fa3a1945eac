//! Mass and thickness arithmetic for asphalt application
//!
//! Formulas (CBUQ density = 2400 kg/m³):
//! - mass (t) = area (m²) × thickness (m) × 2400 / 1000
//! - thickness (cm) = ((mass × 1000) / 2400 / area) × 100
//!
//! The two formulas are exact inverses of one another. Rounding (3 decimals
//! for tonnes, 2 for cm) happens only at the [`compute_application`] boundary
//! so the round-trip property holds for the raw functions.

use serde::{Deserialize, Serialize};

use crate::service::thickness::{classify, ThicknessStatus};

/// CBUQ (hot-mix asphalt) density in kg/m³
pub const ASPHALT_DENSITY_KG_M3: f64 = 2400.0;

/// Thickness assumed when the caller does not supply one
pub const DEFAULT_THICKNESS_CM: f64 = 5.0;

/// Area from geometry. `None` unless both dimensions are positive.
pub fn area(length_m: Option<f64>, width_m: Option<f64>) -> Option<f64> {
    match (length_m, width_m) {
        (Some(l), Some(w)) if l > 0.0 && w > 0.0 => Some(l * w),
        _ => None,
    }
}

/// Mass in tonnes for a given area and thickness.
pub fn mass_for_thickness(area_m2: f64, thickness_cm: f64) -> f64 {
    let thickness_m = thickness_cm / 100.0;
    let volume_m3 = area_m2 * thickness_m;
    volume_m3 * ASPHALT_DENSITY_KG_M3 / 1000.0
}

/// Thickness in cm for a given mass and area. `None` when not computable.
pub fn thickness_from_mass(mass_t: f64, area_m2: f64) -> Option<f64> {
    if area_m2 <= 0.0 || mass_t <= 0.0 {
        return None;
    }
    Some(((mass_t * 1000.0) / ASPHALT_DENSITY_KG_M3 / area_m2) * 100.0)
}

/// Applied mass for a pass, respecting the apply-all-remaining toggle.
///
/// - non-positive area yields 0
/// - apply-all mode claims the full remaining mass
/// - otherwise the 5cm default thickness applies, capped at remaining
pub fn applied_mass(area_m2: f64, remaining_t: f64, apply_all: bool) -> f64 {
    if area_m2 <= 0.0 {
        return 0.0;
    }
    if apply_all {
        remaining_t
    } else {
        mass_for_thickness(area_m2, DEFAULT_THICKNESS_CM).min(remaining_t)
    }
}

/// Percentage of a total that has been applied, capped at 100.
pub fn percent_applied(applied_t: f64, total_t: f64) -> f64 {
    if total_t <= 0.0 {
        return 0.0;
    }
    ((applied_t / total_t) * 100.0).min(100.0)
}

pub fn round_mass(tonnes: f64) -> f64 {
    (tonnes * 1000.0).round() / 1000.0
}

pub fn round_thickness(cm: f64) -> f64 {
    (cm * 100.0).round() / 100.0
}

/// Derived values for one application pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationComputation {
    pub area_m2: f64,
    /// Tonnes, rounded to 3 decimal places
    pub applied_mass_t: f64,
    /// cm, rounded to 2 decimal places
    pub thickness_cm: f64,
    pub status: Option<ThicknessStatus>,
    /// Remaining mass of the load after this pass
    pub remaining_after_t: f64,
}

/// Full pipeline for one pass: area, applied mass, back-computed thickness,
/// classification, and remaining mass after the pass.
pub fn compute_application(
    length_m: Option<f64>,
    width_m: Option<f64>,
    remaining_t: f64,
    apply_all: bool,
) -> ApplicationComputation {
    let area_m2 = area(length_m, width_m).unwrap_or(0.0);
    let mass_t = round_mass(applied_mass(area_m2, remaining_t, apply_all));
    let thickness_cm = thickness_from_mass(mass_t, area_m2)
        .map(round_thickness)
        .unwrap_or(0.0);
    let status = classify(thickness_cm);
    let remaining_after_t = round_mass((remaining_t - mass_t).max(0.0));

    ApplicationComputation {
        area_m2,
        applied_mass_t: mass_t,
        thickness_cm,
        status,
        remaining_after_t,
    }
}
