//! CSV import for deliveries and application records
//!
//! Delivery CSV columns: `reference,total_mass,date,material`
//! Application CSV columns:
//! `load_ref,street,length,width,applied_mass,thickness,date`
//!
//! Masses go through the unit normalizer, so kg and tonnes entries can be
//! mixed in one file. Dates accept `2025-08-26` and `26/08/2025`.

use std::path::Path;

use serde::Deserialize;

use massa_domain::model::{ApplicationRecord, Load};
use massa_domain::service::calculation::{area, round_thickness, thickness_from_mass};
use massa_domain::service::unit::{prepare_for_storage, validate_mass_input};
use massa_types::{Error, MassUnit, Result};

#[derive(Debug, Deserialize)]
struct DeliveryRow {
    reference: String,
    total_mass: f64,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    material: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApplicationRow {
    load_ref: String,
    #[serde(default)]
    street: Option<String>,
    #[serde(default)]
    length: Option<f64>,
    #[serde(default)]
    width: Option<f64>,
    applied_mass: f64,
    #[serde(default)]
    thickness: Option<f64>,
    #[serde(default)]
    date: Option<String>,
}

/// Import delivered loads from a CSV file.
pub fn load_loads_from_csv(path: &Path, unit: Option<MassUnit>) -> Result<Vec<Load>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| Error::CsvImport(format!("failed to open {}: {}", path.display(), e)))?;

    let mut loads = Vec::new();
    for (index, row) in reader.deserialize::<DeliveryRow>().enumerate() {
        let line = index + 2; // 1-based, after the header
        let row = row.map_err(|e| Error::CsvImport(format!("line {}: {}", line, e)))?;

        validate_mass_input(row.total_mass)
            .map_err(|e| Error::CsvImport(format!("line {}: {}", line, e)))?;
        let total_t = prepare_for_storage(row.total_mass, unit);

        let load = Load::new(row.reference, total_t)
            .map_err(|e| Error::CsvImport(format!("line {}: {}", line, e)))?
            .with_material(row.material.filter(|m| !m.is_empty()))
            .with_delivered_at(parse_optional_date(row.date.as_deref()));
        loads.push(load);
    }
    Ok(loads)
}

/// Import application records from a CSV file, resolving load references
/// against the given loads.
///
/// Unresolved references keep the raw reference as `load_id` so that checks
/// can report them as unmatched. Sequence numbers are assigned per load in
/// file order. Missing thickness is back-computed from mass and geometry.
pub fn load_applications_from_csv(
    path: &Path,
    loads: &[Load],
    unit: Option<MassUnit>,
) -> Result<Vec<ApplicationRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| Error::CsvImport(format!("failed to open {}: {}", path.display(), e)))?;

    let mut records: Vec<ApplicationRecord> = Vec::new();
    for (index, row) in reader.deserialize::<ApplicationRow>().enumerate() {
        let line = index + 2;
        let row = row.map_err(|e| Error::CsvImport(format!("line {}: {}", line, e)))?;

        validate_mass_input(row.applied_mass)
            .map_err(|e| Error::CsvImport(format!("line {}: {}", line, e)))?;
        let mass_t = prepare_for_storage(row.applied_mass, unit);

        let load_id = loads
            .iter()
            .find(|l| l.delivery_ref == row.load_ref)
            .map(|l| l.id.clone())
            .unwrap_or_else(|| row.load_ref.clone());

        let sequence = records.iter().filter(|r| r.load_id == load_id).count() as u32 + 1;
        let area_m2 = area(row.length, row.width);
        let thickness_cm = row
            .thickness
            .filter(|t| *t > 0.0)
            .or_else(|| area_m2.and_then(|a| thickness_from_mass(mass_t, a)))
            .map(round_thickness);

        let mut record = ApplicationRecord::new(load_id, sequence, mass_t);
        record.street = row.street.filter(|s| !s.is_empty());
        record.length_m = row.length;
        record.width_m = row.width;
        record.area_m2 = area_m2;
        record.thickness_cm = thickness_cm;
        record.applied_at = parse_optional_date(row.date.as_deref());
        records.push(record);
    }
    Ok(records)
}

fn parse_optional_date(s: Option<&str>) -> Option<chrono::NaiveDate> {
    let s = s?.trim();
    if s.is_empty() {
        return None;
    }
    let formats = ["%Y-%m-%d", "%d/%m/%Y"];
    for fmt in formats {
        if let Ok(date) = chrono::NaiveDate::parse_from_str(s, fmt) {
            return Some(date);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_import_loads_mixed_units() {
        let csv = write_csv(
            "reference,total_mass,date,material\n\
             CR-001,32.5,2025-08-20,CBUQ\n\
             CR-002,18000,20/08/2025,CBUQ\n",
        );
        let loads = load_loads_from_csv(csv.path(), None).unwrap();
        assert_eq!(loads.len(), 2);
        assert!((loads[0].total_mass_t - 32.5).abs() < f64::EPSILON);
        // 18000kg normalized to 18t by the heuristic
        assert!((loads[1].total_mass_t - 18.0).abs() < f64::EPSILON);
        assert_eq!(loads[0].material.as_deref(), Some("CBUQ"));
        assert!(loads[0].delivered_at.is_some());
        assert!(loads[1].delivered_at.is_some());
    }

    #[test]
    fn test_import_loads_rejects_zero_mass() {
        let csv = write_csv("reference,total_mass,date,material\nCR-001,0,,\n");
        let err = load_loads_from_csv(csv.path(), None).unwrap_err();
        assert!(matches!(err, Error::CsvImport(_)));
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_import_applications_resolves_and_sequences() {
        let load = Load::new("CR-001".to_string(), 30.0).unwrap();
        let csv = write_csv(
            "load_ref,street,length,width,applied_mass,thickness,date\n\
             CR-001,Rua A,10,2,2.4,,2025-08-21\n\
             CR-001,Rua B,8,2,1.9,,2025-08-21\n\
             CR-999,Rua C,5,2,1.0,,\n",
        );
        let records = load_applications_from_csv(csv.path(), &[load.clone()], None).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].load_id, load.id);
        assert_eq!(records[0].sequence, 1);
        assert_eq!(records[1].sequence, 2);
        // unmatched keeps the raw reference
        assert_eq!(records[2].load_id, "CR-999");
        assert_eq!(records[2].sequence, 1);
    }

    #[test]
    fn test_import_applications_back_computes_thickness() {
        let load = Load::new("CR-001".to_string(), 30.0).unwrap();
        let csv = write_csv(
            "load_ref,street,length,width,applied_mass,thickness,date\n\
             CR-001,Rua A,10,2,2.4,,\n",
        );
        let records = load_applications_from_csv(csv.path(), &[load], None).unwrap();
        // 2.4t over 20m² at 2400kg/m³ = 5cm
        assert!((records[0].thickness_cm.unwrap() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_import_applications_explicit_unit() {
        let load = Load::new("CR-001".to_string(), 30.0).unwrap();
        let csv = write_csv(
            "load_ref,street,length,width,applied_mass,thickness,date\n\
             CR-001,Rua A,10,2,2400,,\n",
        );
        let records =
            load_applications_from_csv(csv.path(), &[load], Some(MassUnit::Kilograms)).unwrap();
        assert!((records[0].applied_mass_t - 2.4).abs() < f64::EPSILON);
    }
}
