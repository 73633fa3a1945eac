//! Delivered load (batch of paving material)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use massa_types::ValidationError;

/// A delivered batch of paving material with a fixed total mass.
///
/// Immutable once created; remaining mass is derived from the application
/// records made against it, never stored here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Load {
    /// Unique identifier
    pub id: String,
    /// Delivery reference (ticket number, programação id, etc.)
    pub delivery_ref: String,
    /// Total delivered mass in tonnes, always > 0
    pub total_mass_t: f64,
    /// Material name (e.g., "CBUQ")
    #[serde(default)]
    pub material: Option<String>,
    /// Delivery date
    #[serde(default)]
    pub delivered_at: Option<NaiveDate>,
}

impl Load {
    /// Create a new load. Rejects non-positive total mass.
    pub fn new(delivery_ref: String, total_mass_t: f64) -> Result<Self, ValidationError> {
        if total_mass_t <= 0.0 {
            return Err(ValidationError::NonPositiveLoadMass);
        }
        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            delivery_ref,
            total_mass_t,
            material: None,
            delivered_at: None,
        })
    }

    pub fn with_material(mut self, material: Option<String>) -> Self {
        self.material = material;
        self
    }

    pub fn with_delivered_at(mut self, date: Option<NaiveDate>) -> Self {
        self.delivered_at = date;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_load() {
        let load = Load::new("CR-001".to_string(), 32.5).unwrap();
        assert_eq!(load.delivery_ref, "CR-001");
        assert!((load.total_mass_t - 32.5).abs() < f64::EPSILON);
        assert!(!load.id.is_empty());
    }

    #[test]
    fn test_rejects_zero_mass() {
        assert_eq!(
            Load::new("CR-002".to_string(), 0.0).unwrap_err(),
            ValidationError::NonPositiveLoadMass
        );
    }

    #[test]
    fn test_rejects_negative_mass() {
        assert!(Load::new("CR-003".to_string(), -5.0).is_err());
    }
}
