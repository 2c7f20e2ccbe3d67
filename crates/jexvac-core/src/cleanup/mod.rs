pub mod errors;
pub mod handler;
mod operations;
pub mod types;

pub use errors::CleanupError;
pub use handler::{find_orphans, select_for_deletion};
pub use types::{DeletionScope, OrphanReport, OrphanedResource};
