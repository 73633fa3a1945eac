//! Domain services

pub mod calculation;
pub mod ledger;
pub mod report;
pub mod thickness;
pub mod unit;

pub use calculation::{compute_application, ApplicationComputation};
pub use ledger::{remaining, validate_new_application, MassProgress};
pub use report::{check_applications, generate_application_report, ApplicationCheckResult};
pub use thickness::{classify, ThicknessStatus};
pub use unit::normalize_to_tonnes;
