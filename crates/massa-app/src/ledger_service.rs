//! Ledger use cases: register loads, record application passes, query status
//!
//! All remaining-mass figures are recomputed from the stored history; the
//! stores re-validate on append, so a stale remaining value read by the CLI
//! can never over-commit a load.

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::Serialize;

use massa_domain::model::{ApplicationRecord, Load};
use massa_domain::service::calculation::{
    area, compute_application, round_thickness, thickness_from_mass,
};
use massa_domain::service::ledger::{progress, remaining_for_records, MassProgress};
use massa_domain::service::thickness::{check, ThicknessCheck};
use massa_domain::service::unit::{prepare_for_storage, validate_mass_input};
use massa_store::{ApplicationStore, LoadStore};
use massa_types::{Error, MassUnit, Result, ValidationError};

/// Parameters for registering a delivered load
#[derive(Debug, Clone)]
pub struct RegisterLoad {
    pub delivery_ref: String,
    /// Raw user-entered mass (unit resolved by `unit` or the heuristic)
    pub total_mass: f64,
    pub unit: Option<MassUnit>,
    pub material: Option<String>,
    pub delivered_at: Option<NaiveDate>,
}

/// Parameters for recording one application pass
#[derive(Debug, Clone)]
pub struct RecordApplication {
    /// Load id or delivery reference
    pub load: String,
    pub street: Option<String>,
    pub length_m: Option<f64>,
    pub width_m: Option<f64>,
    /// Explicit applied mass; when absent it is derived from geometry at the
    /// 5cm default thickness, capped at the remaining mass
    pub applied_mass: Option<f64>,
    pub unit: Option<MassUnit>,
    /// Consume all remaining mass of the load
    pub apply_all_remaining: bool,
    pub temperature_c: Option<f64>,
    pub notes: Option<String>,
    pub applied_at: Option<NaiveDate>,
}

/// Result of a recorded application pass
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationOutcome {
    pub record: ApplicationRecord,
    pub thickness: ThicknessCheck,
    pub remaining_t: f64,
    pub progress: MassProgress,
}

/// Current state of a load
#[derive(Debug, Clone, Serialize)]
pub struct LoadStatus {
    pub load: Load,
    pub progress: MassProgress,
    pub records: Vec<ApplicationRecord>,
}

/// Application service over the file stores
pub struct LedgerService {
    loads: LoadStore,
    applications: ApplicationStore,
}

impl LedgerService {
    /// Open (or create) the stores under the given data directory
    pub fn open(data_dir: PathBuf) -> Result<Self> {
        Ok(Self {
            loads: LoadStore::open(data_dir.clone())?,
            applications: ApplicationStore::open(data_dir)?,
        })
    }

    /// Register a delivered load
    pub fn register_load(&mut self, params: RegisterLoad) -> Result<Load> {
        validate_mass_input(params.total_mass)?;
        let total_t = prepare_for_storage(params.total_mass, params.unit);

        let load = Load::new(params.delivery_ref, total_t)?
            .with_material(params.material)
            .with_delivered_at(params.delivered_at);
        self.loads.add_load(load.clone())?;
        Ok(load)
    }

    /// Record one application pass against a load
    pub fn record_application(&mut self, params: RecordApplication) -> Result<ApplicationOutcome> {
        let load = self.resolve_load(&params.load)?;
        let history = self.applications.for_load(&load.id);
        let remaining = remaining_for_records(load.total_mass_t, &history);

        let (mass_t, thickness_cm, area_m2) = match params.applied_mass {
            Some(raw) => {
                // Explicit mass: taken as requested, validated on append
                // (rejected, never clamped, when it exceeds remaining)
                validate_mass_input(raw)?;
                let mass_t = prepare_for_storage(raw, params.unit);
                let area_m2 = area(params.length_m, params.width_m);
                let thickness_cm = area_m2
                    .and_then(|a| thickness_from_mass(mass_t, a))
                    .map(round_thickness);
                (mass_t, thickness_cm, area_m2)
            }
            None => {
                let calc = compute_application(
                    params.length_m,
                    params.width_m,
                    remaining,
                    params.apply_all_remaining,
                );
                if calc.area_m2 <= 0.0 {
                    return Err(ValidationError::InvalidGeometry.into());
                }
                let thickness_cm = if calc.thickness_cm > 0.0 {
                    Some(calc.thickness_cm)
                } else {
                    None
                };
                (calc.applied_mass_t, thickness_cm, Some(calc.area_m2))
            }
        };

        if mass_t <= 0.0 {
            return Err(ValidationError::NonPositiveMass.into());
        }

        let mut record = ApplicationRecord::new(
            load.id.clone(),
            self.applications.next_sequence(&load.id),
            mass_t,
        );
        record.street = params.street;
        record.length_m = params.length_m;
        record.width_m = params.width_m;
        record.area_m2 = area_m2;
        record.thickness_cm = thickness_cm;
        record.applied_all_remaining = params.apply_all_remaining;
        record.temperature_c = params.temperature_c;
        record.notes = params.notes;
        record.applied_at = params.applied_at;

        self.applications.append_checked(&load, record.clone())?;

        let records = self.applications.for_load(&load.id);
        let progress = progress(load.total_mass_t, &records);
        Ok(ApplicationOutcome {
            thickness: check(record.thickness_cm.unwrap_or(0.0)),
            remaining_t: progress.remaining_t,
            progress,
            record,
        })
    }

    /// Status of a load by id or delivery reference
    pub fn load_status(&self, key: &str) -> Result<LoadStatus> {
        let load = self.resolve_load(key)?;
        let records = self.applications.for_load(&load.id);
        Ok(LoadStatus {
            progress: progress(load.total_mass_t, &records),
            load,
            records,
        })
    }

    /// All registered loads with their progress
    pub fn all_statuses(&self) -> Vec<LoadStatus> {
        self.loads
            .all_loads()
            .into_iter()
            .map(|load| {
                let records = self.applications.for_load(&load.id);
                LoadStatus {
                    progress: progress(load.total_mass_t, &records),
                    load: load.clone(),
                    records,
                }
            })
            .collect()
    }

    /// Application history, optionally restricted to one load
    pub fn history(&self, load_key: Option<&str>) -> Result<Vec<ApplicationRecord>> {
        match load_key {
            Some(key) => {
                let load = self.resolve_load(key)?;
                Ok(self.applications.for_load(&load.id))
            }
            None => Ok(self.applications.all_records().to_vec()),
        }
    }

    /// All registered loads
    pub fn all_loads(&self) -> Vec<Load> {
        self.loads.all_loads().into_iter().cloned().collect()
    }

    fn resolve_load(&self, key: &str) -> Result<Load> {
        self.loads
            .resolve(key)
            .cloned()
            .ok_or_else(|| Error::LoadNotFound(key.to_string()))
    }
}
