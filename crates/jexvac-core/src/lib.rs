//! jexvac-core: find and remove Joplin attachments that an export no longer
//! references.
//!
//! Joplin only writes attachments that notes still link to into a JEX
//! export. Comparing the export against the live resource list of a running
//! Joplin instance (through its Web Clipper API) therefore yields the
//! orphaned attachments, which can then be deleted.
//!
//! # Main Entry Points
//!
//! - [`vacuum`] - Full run with the dry-run/confirm policy
//! - [`discovery`] - Locate the clipper service port
//! - [`auth`] - Obtain or reuse an API token
//! - [`resources`] - List and delete attachments
//! - [`archive`] - Read referenced ids from a JEX export
//! - [`cleanup`] - Orphan detection and the integrity check
//! - [`config`] - Configuration management

pub mod archive;
pub mod auth;
pub mod cleanup;
pub mod config;
pub mod discovery;
pub mod errors;
pub mod events;
pub mod logging;
pub mod progress;
pub mod resources;
pub mod transport;
pub mod vacuum;

// Re-export commonly used types at crate root for convenience
pub use auth::{ApprovalGate, AuthError, FileTokenStore, TokenSource, TokenStore};
pub use cleanup::{DeletionScope, OrphanReport, OrphanedResource};
pub use config::JexvacConfig;
pub use errors::JexvacError;
pub use progress::{NoopReporter, Progress, ProgressReporter};
pub use transport::{HttpTransport, ReqwestTransport};
pub use vacuum::{VacuumContext, VacuumError, VacuumOutcome, VacuumRequest};

// Re-export logging initialization
pub use logging::init_logging;
