//! Domain model types

pub mod application;
pub mod load;

pub use application::ApplicationRecord;
pub use load::Load;
