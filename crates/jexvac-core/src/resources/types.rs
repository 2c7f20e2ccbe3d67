use serde::{Deserialize, Serialize};

/// One attachment as listed by `GET /resources`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    #[serde(default)]
    pub title: String,
}

impl Resource {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// One page of `GET /resources`.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourcePage {
    pub items: Vec<Resource>,
    pub has_more: bool,
}

/// Every resource the service reported for this run, in page order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceCatalog {
    resources: Vec<Resource>,
}

impl ResourceCatalog {
    pub fn new(resources: Vec<Resource>) -> Self {
        Self { resources }
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Resource> {
        self.resources.iter()
    }
}

/// Pagination knobs for [`super::list_resources`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Requested page size; clamped by [`super::clamp_page_limit`].
    pub limit: Option<u32>,
    /// Stop with an error after this many pages if the service still
    /// reports more. `None` paginates until the service says it is done.
    pub max_pages: Option<u32>,
}
