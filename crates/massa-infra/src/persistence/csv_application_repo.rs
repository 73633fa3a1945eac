//! CSV-backed implementation of ApplicationRepository

use std::path::PathBuf;

use massa_domain::model::{ApplicationRecord, Load};
use massa_domain::repository::ApplicationRepository;
use massa_domain::service::thickness::{classify, ThicknessStatus};
use massa_types::{Error, MassUnit};

use crate::csv_import::load_applications_from_csv;

/// Application repository reading from an application CSV file
pub struct CsvApplicationRepository {
    records: Vec<ApplicationRecord>,
}

impl CsvApplicationRepository {
    /// Create a new repository from a CSV file path, resolving load
    /// references against the given loads
    pub fn new(csv_path: PathBuf, loads: &[Load], unit: Option<MassUnit>) -> Result<Self, Error> {
        let records = load_applications_from_csv(&csv_path, loads, unit)?;
        Ok(Self { records })
    }
}

impl ApplicationRepository for CsvApplicationRepository {
    fn find_all(&self) -> Result<Vec<ApplicationRecord>, Error> {
        Ok(self.records.clone())
    }

    fn find_by_load(&self, load_id: &str) -> Result<Vec<ApplicationRecord>, Error> {
        let mut records: Vec<_> = self
            .records
            .iter()
            .filter(|r| r.load_id == load_id)
            .cloned()
            .collect();
        records.sort_by_key(|r| r.sequence);
        Ok(records)
    }

    fn find_out_of_standard(&self) -> Result<Vec<ApplicationRecord>, Error> {
        Ok(self
            .records
            .iter()
            .filter(|r| classify(r.thickness_cm.unwrap_or(0.0)) == Some(ThicknessStatus::Error))
            .cloned()
            .collect())
    }
}
