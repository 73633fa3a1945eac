//! Load store for delivered batches

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use massa_domain::model::Load;
use massa_types::Result;

/// Persistent store for delivered loads
pub struct LoadStore {
    store_path: PathBuf,
    loads: HashMap<String, Load>,
}

impl LoadStore {
    /// Create or load a load store
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let store_path = store_dir.join("loads.json");

        let loads = if store_path.exists() {
            let file = File::open(&store_path)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).unwrap_or_default()
        } else {
            HashMap::new()
        };

        Ok(Self { store_path, loads })
    }

    /// Save store to disk
    fn save(&self) -> Result<()> {
        let file = File::create(&self.store_path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &self.loads)?;
        Ok(())
    }

    /// Add a new load
    pub fn add_load(&mut self, load: Load) -> Result<String> {
        let id = load.id.clone();
        self.loads.insert(id.clone(), load);
        self.save()?;
        Ok(id)
    }

    /// Get a load by id
    pub fn get_load(&self, id: &str) -> Option<&Load> {
        self.loads.get(id)
    }

    /// Find a load by delivery reference
    pub fn get_by_ref(&self, delivery_ref: &str) -> Option<&Load> {
        self.loads.values().find(|l| l.delivery_ref == delivery_ref)
    }

    /// Resolve an id or delivery reference to a load
    pub fn resolve(&self, key: &str) -> Option<&Load> {
        self.get_load(key).or_else(|| self.get_by_ref(key))
    }

    /// Get all loads sorted by delivery reference
    pub fn all_loads(&self) -> Vec<&Load> {
        let mut loads: Vec<_> = self.loads.values().collect();
        loads.sort_by(|a, b| a.delivery_ref.cmp(&b.delivery_ref));
        loads
    }

    /// Get total load count
    pub fn count(&self) -> usize {
        self.loads.len()
    }
}
