//! Application record (one paving pass against a load)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One paving pass consuming part of a load's mass over a measured area.
///
/// Append-only: records are never mutated after creation. `sequence` is
/// 1-based within the owning load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationRecord {
    /// Unique identifier
    pub id: String,
    /// Owning load id
    pub load_id: String,
    /// 1-based position within the load's application history
    pub sequence: u32,
    /// Street / logradouro where the pass was applied
    #[serde(default)]
    pub street: Option<String>,
    /// Measured length in meters
    #[serde(default)]
    pub length_m: Option<f64>,
    /// Measured average width in meters
    #[serde(default)]
    pub width_m: Option<f64>,
    /// Applied area in m² (length × width when geometry is known)
    #[serde(default)]
    pub area_m2: Option<f64>,
    /// Applied mass in tonnes (3 decimal places)
    pub applied_mass_t: f64,
    /// Computed thickness in cm (2 decimal places)
    #[serde(default)]
    pub thickness_cm: Option<f64>,
    /// Whether this pass consumed all remaining mass of the load
    #[serde(default)]
    pub applied_all_remaining: bool,
    /// Application temperature in °C
    #[serde(default)]
    pub temperature_c: Option<f64>,
    /// Free-form notes from the apontador
    #[serde(default)]
    pub notes: Option<String>,
    /// Application date
    #[serde(default)]
    pub applied_at: Option<NaiveDate>,
}

impl ApplicationRecord {
    pub fn new(load_id: String, sequence: u32, applied_mass_t: f64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            load_id,
            sequence,
            street: None,
            length_m: None,
            width_m: None,
            area_m2: None,
            applied_mass_t,
            thickness_cm: None,
            applied_all_remaining: false,
            temperature_c: None,
            notes: None,
            applied_at: None,
        }
    }
}
