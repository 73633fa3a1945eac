//! End-to-end ledger flow: register a load, record passes, check status

use std::io::Write;

use tempfile::{tempdir, NamedTempFile};

use massa_app::{LedgerService, RecordApplication, RegisterLoad};
use massa_domain::repository::{ApplicationRepository, LoadRepository};
use massa_domain::service::report::{check_applications, generate_application_report};
use massa_domain::service::thickness::ThicknessStatus;
use massa_infra::persistence::{CsvApplicationRepository, CsvLoadRepository};
use massa_types::{Error, MassUnit, ValidationError};

fn apply(load: &str) -> RecordApplication {
    RecordApplication {
        load: load.to_string(),
        street: Some("Av. Brasil".to_string()),
        length_m: Some(10.0),
        width_m: Some(2.0),
        applied_mass: None,
        unit: None,
        apply_all_remaining: false,
        temperature_c: Some(150.0),
        notes: None,
        applied_at: None,
    }
}

#[test]
fn test_register_apply_status_flow() {
    let dir = tempdir().unwrap();
    let mut service = LedgerService::open(dir.path().to_path_buf()).unwrap();

    // 32500kg normalized to 32.5t by the heuristic
    let load = service
        .register_load(RegisterLoad {
            delivery_ref: "CR-2025-041".to_string(),
            total_mass: 32500.0,
            unit: None,
            material: Some("CBUQ".to_string()),
            delivered_at: None,
        })
        .unwrap();
    assert!((load.total_mass_t - 32.5).abs() < f64::EPSILON);

    // Standard 5cm pass over 20m²: 2.4t, within standard
    let first = service.record_application(apply("CR-2025-041")).unwrap();
    assert!((first.record.applied_mass_t - 2.4).abs() < 1e-9);
    assert_eq!(first.thickness.status, Some(ThicknessStatus::Success));

    // Explicit pass of 28t
    let mut explicit = apply("CR-2025-041");
    explicit.applied_mass = Some(28.0);
    explicit.unit = Some(MassUnit::Tonnes);
    service.record_application(explicit).unwrap();

    // Remaining is 2.1t; a 5t request must be rejected without commit
    let mut too_much = apply("CR-2025-041");
    too_much.applied_mass = Some(5.0);
    too_much.unit = Some(MassUnit::Tonnes);
    let err = service.record_application(too_much).unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationError::MassExceedsRemaining { .. })
    ));

    // Apply-all consumes exactly what is left
    let mut rest = apply("CR-2025-041");
    rest.apply_all_remaining = true;
    let outcome = service.record_application(rest).unwrap();
    assert!((outcome.record.applied_mass_t - 2.1).abs() < 1e-9);
    assert_eq!(outcome.remaining_t, 0.0);
    assert!(outcome.progress.is_complete);

    let status = service.load_status("CR-2025-041").unwrap();
    assert_eq!(status.records.len(), 3);
    assert_eq!(status.records.last().unwrap().sequence, 3);
    assert!((status.progress.percent_applied - 100.0).abs() < 1e-9);
}

#[test]
fn test_reopened_service_sees_history() {
    let dir = tempdir().unwrap();
    {
        let mut service = LedgerService::open(dir.path().to_path_buf()).unwrap();
        service
            .register_load(RegisterLoad {
                delivery_ref: "CR-001".to_string(),
                total_mass: 10.0,
                unit: Some(MassUnit::Tonnes),
                material: None,
                delivered_at: None,
            })
            .unwrap();
        service.record_application(apply("CR-001")).unwrap();
    }

    let service = LedgerService::open(dir.path().to_path_buf()).unwrap();
    let status = service.load_status("CR-001").unwrap();
    assert_eq!(status.records.len(), 1);
    assert!((status.progress.remaining_t - 7.6).abs() < 1e-9);
}

#[test]
fn test_csv_check_report() {
    let mut loads_csv = NamedTempFile::new().unwrap();
    loads_csv
        .write_all(
            b"reference,total_mass,date,material\n\
              CR-001,5.0,2025-08-20,CBUQ\n",
        )
        .unwrap();

    let mut apps_csv = NamedTempFile::new().unwrap();
    apps_csv
        .write_all(
            b"load_ref,street,length,width,applied_mass,thickness,date\n\
              CR-001,Rua A,10,2,2.4,,2025-08-21\n\
              CR-001,Rua B,10,2,3.0,,2025-08-21\n",
        )
        .unwrap();

    let load_repo = CsvLoadRepository::new(loads_csv.path().to_path_buf(), None).unwrap();
    let loads = load_repo.find_all().unwrap();
    let app_repo =
        CsvApplicationRepository::new(apps_csv.path().to_path_buf(), &loads, None).unwrap();

    let records = app_repo.find_all().unwrap();
    let results = check_applications(&records, &loads);
    assert_eq!(results.len(), 2);
    // second pass pushes the cumulative 5.4t over the 5.0t delivered
    assert!(results[1].over_applied);
    assert!((results[1].excess_t.unwrap() - 0.4).abs() < 1e-9);

    let report = generate_application_report(&results);
    assert!(report.contains("Mass Application Check Report"));
    assert!(report.contains("Massa excedida / Over-applied:         1"));
}
