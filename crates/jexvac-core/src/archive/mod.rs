//! Reading referenced resource ids out of a JEX export.
//!
//! A JEX file is a plain tar archive. Attachments that notes still reference
//! are stored as `resources/<id>.<ext>`, so the entry names alone say which
//! resources the export kept.

pub mod errors;
pub mod handler;
pub mod operations;

pub use errors::ArchiveError;
pub use handler::{entry_names, scan_archive};
pub use operations::{RESOURCE_ID_LEN, RESOURCE_PREFIX, ReferencedIds, referenced_ids};
