//! CSV-backed implementation of LoadRepository

use std::path::PathBuf;

use massa_domain::model::Load;
use massa_domain::repository::LoadRepository;
use massa_types::{Error, MassUnit};

use crate::csv_import::load_loads_from_csv;

/// Load repository reading from a delivery CSV file
pub struct CsvLoadRepository {
    loads: Vec<Load>,
}

impl CsvLoadRepository {
    /// Create a new repository from a CSV file path
    pub fn new(csv_path: PathBuf, unit: Option<MassUnit>) -> Result<Self, Error> {
        let loads = load_loads_from_csv(&csv_path, unit)?;
        Ok(Self { loads })
    }
}

impl LoadRepository for CsvLoadRepository {
    fn find_all(&self) -> Result<Vec<Load>, Error> {
        Ok(self.loads.clone())
    }

    fn find_by_ref(&self, delivery_ref: &str) -> Result<Option<Load>, Error> {
        Ok(self
            .loads
            .iter()
            .find(|l| l.delivery_ref == delivery_ref)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_csv() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        let content = "reference,total_mass,date,material\n\
                       CR-001,32.5,2025-08-20,CBUQ\n\
                       CR-002,18.0,2025-08-21,CBUQ\n";
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_find_all() {
        let csv = create_test_csv();
        let repo = CsvLoadRepository::new(csv.path().to_path_buf(), None).unwrap();
        let loads = repo.find_all().unwrap();
        assert_eq!(loads.len(), 2);
    }

    #[test]
    fn test_find_by_ref() {
        let csv = create_test_csv();
        let repo = CsvLoadRepository::new(csv.path().to_path_buf(), None).unwrap();
        let load = repo.find_by_ref("CR-002").unwrap().unwrap();
        assert!((load.total_mass_t - 18.0).abs() < f64::EPSILON);
        assert!(repo.find_by_ref("CR-404").unwrap().is_none());
    }
}
