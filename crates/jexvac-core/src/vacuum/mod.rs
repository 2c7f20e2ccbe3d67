//! End-to-end vacuum run: discover, authorize, scan, list, compare, delete.

pub mod errors;
pub mod handler;
pub mod types;

pub use errors::VacuumError;
pub use handler::run;
pub use types::{VacuumContext, VacuumOutcome, VacuumRequest};
