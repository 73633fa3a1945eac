//! Repository trait definitions for querying bookkeeping data

use massa_types::Error;

use crate::model::{ApplicationRecord, Load};

/// Repository for delivered loads
pub trait LoadRepository {
    /// Find all loads
    fn find_all(&self) -> Result<Vec<Load>, Error>;

    /// Find a load by its delivery reference
    fn find_by_ref(&self, delivery_ref: &str) -> Result<Option<Load>, Error>;
}

/// Repository for application records
pub trait ApplicationRepository {
    /// Find all records
    fn find_all(&self) -> Result<Vec<ApplicationRecord>, Error>;

    /// Find all records for a load, ordered by sequence
    fn find_by_load(&self, load_id: &str) -> Result<Vec<ApplicationRecord>, Error>;

    /// Find records whose thickness falls outside the standard band
    fn find_out_of_standard(&self) -> Result<Vec<ApplicationRecord>, Error>;
}
