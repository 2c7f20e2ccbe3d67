use std::path::PathBuf;

use crate::auth::{ApprovalGate, TokenStore};
use crate::cleanup::{DeletionScope, OrphanReport};
use crate::config::JexvacConfig;
use crate::progress::ProgressReporter;
use crate::transport::HttpTransport;

/// What the operator asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VacuumRequest {
    /// JEX export to compare against.
    pub archive_path: PathBuf,
    /// Skip discovery and use this port.
    pub port: Option<u16>,
    /// Skip the cache and handshake and use this token.
    pub token: Option<String>,
    /// Page size; overrides `listing.page_limit`.
    pub limit: Option<u32>,
    /// Without this nothing is deleted.
    pub confirm: bool,
    pub scope: DeletionScope,
}

impl VacuumRequest {
    /// A dry run over `archive_path` with everything else left to defaults.
    pub fn new(archive_path: impl Into<PathBuf>) -> Self {
        Self {
            archive_path: archive_path.into(),
            port: None,
            token: None,
            limit: None,
            confirm: false,
            scope: DeletionScope::All,
        }
    }
}

/// Collaborators a run talks to.
pub struct VacuumContext<'a> {
    pub config: &'a JexvacConfig,
    pub transport: &'a dyn HttpTransport,
    pub token_store: &'a dyn TokenStore,
    pub approval: &'a dyn ApprovalGate,
    pub reporter: &'a dyn ProgressReporter,
}

/// How a successful run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VacuumOutcome {
    /// Every catalog resource is referenced.
    NothingToDo { report: OrphanReport },
    /// Orphans found but `confirm` was not set.
    DryRun { report: OrphanReport },
    /// `deleted` lists the ids removed, in order.
    Deleted {
        report: OrphanReport,
        deleted: Vec<String>,
    },
}

impl VacuumOutcome {
    pub fn report(&self) -> &OrphanReport {
        match self {
            VacuumOutcome::NothingToDo { report }
            | VacuumOutcome::DryRun { report }
            | VacuumOutcome::Deleted { report, .. } => report,
        }
    }
}
