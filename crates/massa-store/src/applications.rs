//! Application record store (append-only)

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use massa_domain::model::{ApplicationRecord, Load};
use massa_domain::service::ledger::{remaining_for_records, validate_new_application};
use massa_types::Result;

/// Persistent store for application records.
///
/// Records form an append-only sequence per load; nothing here is ever
/// updated or deleted.
pub struct ApplicationStore {
    store_path: PathBuf,
    records: Vec<ApplicationRecord>,
}

impl ApplicationStore {
    /// Create or load an application store
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let store_path = store_dir.join("applications.json");

        let records = if store_path.exists() {
            let file = File::open(&store_path)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).unwrap_or_default()
        } else {
            Vec::new()
        };

        Ok(Self { store_path, records })
    }

    /// Save store to disk
    fn save(&self) -> Result<()> {
        let file = File::create(&self.store_path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &self.records)?;
        Ok(())
    }

    /// Append a record, re-validating against the stored history first.
    ///
    /// The remaining-mass check runs here, inside the mutation path, so a
    /// stale value computed earlier by a caller can never over-commit a load.
    pub fn append_checked(&mut self, load: &Load, record: ApplicationRecord) -> Result<String> {
        let history = self.for_load(&load.id);
        let remaining = remaining_for_records(load.total_mass_t, &history);
        validate_new_application(record.applied_mass_t, remaining)?;

        let id = record.id.clone();
        self.records.push(record);
        self.save()?;
        Ok(id)
    }

    /// All records for a load, ordered by sequence
    pub fn for_load(&self, load_id: &str) -> Vec<ApplicationRecord> {
        let mut records: Vec<_> = self
            .records
            .iter()
            .filter(|r| r.load_id == load_id)
            .cloned()
            .collect();
        records.sort_by_key(|r| r.sequence);
        records
    }

    /// All records
    pub fn all_records(&self) -> &[ApplicationRecord] {
        &self.records
    }

    /// Next 1-based sequence number for a load
    pub fn next_sequence(&self, load_id: &str) -> u32 {
        self.records
            .iter()
            .filter(|r| r.load_id == load_id)
            .map(|r| r.sequence)
            .max()
            .unwrap_or(0)
            + 1
    }

    /// Total record count
    pub fn count(&self) -> usize {
        self.records.len()
    }
}
