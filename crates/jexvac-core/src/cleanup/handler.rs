use tracing::{error, info};

use crate::archive::ReferencedIds;
use crate::cleanup::errors::CleanupError;
use crate::cleanup::operations;
use crate::cleanup::types::{DeletionScope, OrphanReport};
use crate::resources::ResourceCatalog;

/// Compare the catalog against the export's referenced ids.
///
/// Fails with [`CleanupError::IntegrityViolation`] when the export references
/// anything the catalog lacks; nothing should be deleted in that case.
pub fn find_orphans(
    referenced: &ReferencedIds,
    catalog: &ResourceCatalog,
) -> Result<OrphanReport, CleanupError> {
    info!(
        event = "core.cleanup.scan_started",
        referenced = referenced.len(),
        catalog = catalog.len()
    );

    let report = operations::detect_orphans(referenced, catalog).map_err(|e| {
        error!(event = "core.cleanup.integrity_violation", error = %e);
        e
    })?;

    info!(
        event = "core.cleanup.scan_completed",
        orphaned = report.len()
    );

    Ok(report)
}

/// Ids a confirmed run should delete, in report order.
pub fn select_for_deletion(report: &OrphanReport, scope: DeletionScope) -> Vec<String> {
    let selected = operations::select_for_deletion(report, scope);
    info!(
        event = "core.cleanup.selection_completed",
        scope = ?scope,
        selected = selected.len()
    );
    selected
}
