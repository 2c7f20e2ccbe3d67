use crate::resources::types::ResourcePage;

pub const DEFAULT_PAGE_LIMIT: u32 = 50;

/// Largest page size the Joplin API accepts.
pub const MAX_PAGE_LIMIT: u32 = 100;

/// Page size actually requested: `limit` if it lies in `1..=100`,
/// otherwise 50.
pub fn clamp_page_limit(limit: Option<u32>) -> u32 {
    match limit {
        Some(limit) if (1..=MAX_PAGE_LIMIT).contains(&limit) => limit,
        _ => DEFAULT_PAGE_LIMIT,
    }
}

pub fn resources_path(token: &str, limit: u32, page: u32) -> String {
    format!("/resources?token={token}&limit={limit}&page={page}")
}

pub fn resource_path(id: &str, token: &str) -> String {
    format!("/resources/{id}?token={token}")
}

pub fn parse_page(body: &str) -> Result<ResourcePage, String> {
    serde_json::from_str(body).map_err(|e| e.to_string())
}
