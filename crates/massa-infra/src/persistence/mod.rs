//! CSV-backed repository implementations

mod csv_application_repo;
mod csv_load_repo;

pub use csv_application_repo::CsvApplicationRepository;
pub use csv_load_repo::CsvLoadRepository;
