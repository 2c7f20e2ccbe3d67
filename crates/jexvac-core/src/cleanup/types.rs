use std::fmt;

/// A catalog resource that the export does not reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrphanedResource {
    pub id: String,
    pub title: String,
}

impl OrphanedResource {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

impl fmt::Display for OrphanedResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.id, self.title)
    }
}

/// Result of comparing the catalog against the export.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrphanReport {
    /// Orphans in catalog order.
    pub orphans: Vec<OrphanedResource>,
    /// Distinct ids referenced by the export.
    pub referenced_count: usize,
    /// Distinct ids in the catalog.
    pub catalog_count: usize,
}

impl OrphanReport {
    pub fn is_empty(&self) -> bool {
        self.orphans.is_empty()
    }

    pub fn len(&self) -> usize {
        self.orphans.len()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.orphans.iter().map(|o| o.id.as_str())
    }
}

/// Which orphans a confirmed run deletes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeletionScope {
    #[default]
    All,
    /// Only one orphan, for trying deletion out before a full run.
    SingleItem,
}
