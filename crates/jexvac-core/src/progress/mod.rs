//! Run progress notifications.
//!
//! Core operations report what they are doing through [`ProgressReporter`]
//! so the CLI can print progress as the run proceeds without the core
//! writing to stdout itself.

use crate::auth::TokenSource;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    /// A discovery probe finished; `found` is true for the service port.
    PortProbed { port: u16, found: bool },
    /// Where the API token came from.
    TokenResolved { source: TokenSource },
    /// The archive was read and yielded this many referenced ids.
    ArchiveScanned { referenced: usize },
    /// One catalog page arrived; `total` is the running item count.
    PageFetched {
        page: u32,
        items: usize,
        total: usize,
        has_more: bool,
    },
    /// About to delete item `index` (1-based) of `total`.
    Deleting {
        index: usize,
        total: usize,
        id: String,
    },
    Deleted { id: String },
}

pub trait ProgressReporter {
    fn report(&self, progress: Progress);
}

/// Discards every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn report(&self, _progress: Progress) {}
}
