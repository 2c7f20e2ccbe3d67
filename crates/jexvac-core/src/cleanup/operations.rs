use std::collections::{HashMap, HashSet};

use crate::archive::ReferencedIds;
use crate::cleanup::errors::CleanupError;
use crate::cleanup::types::{DeletionScope, OrphanReport, OrphanedResource};
use crate::resources::ResourceCatalog;

/// Catalog ids minus referenced ids, after checking that every referenced id
/// is in the catalog.
pub fn detect_orphans(
    referenced: &ReferencedIds,
    catalog: &ResourceCatalog,
) -> Result<OrphanReport, CleanupError> {
    let titles: HashMap<&str, &str> = catalog
        .iter()
        .map(|r| (r.id.as_str(), r.title.as_str()))
        .collect();

    let missing: Vec<String> = referenced
        .iter()
        .filter(|id| !titles.contains_key(id.as_str()))
        .cloned()
        .collect();
    if !missing.is_empty() {
        return Err(CleanupError::IntegrityViolation { missing });
    }

    let mut seen = HashSet::new();
    let orphans = catalog
        .iter()
        .filter(|r| !referenced.contains(&r.id) && seen.insert(r.id.as_str()))
        .map(|r| OrphanedResource::new(r.id.clone(), r.title.clone()))
        .collect();

    Ok(OrphanReport {
        orphans,
        referenced_count: referenced.len(),
        catalog_count: titles.len(),
    })
}

pub fn select_for_deletion(report: &OrphanReport, scope: DeletionScope) -> Vec<String> {
    let ids = report.ids().map(str::to_string);
    match scope {
        DeletionScope::All => ids.collect(),
        DeletionScope::SingleItem => ids.take(1).collect(),
    }
}
