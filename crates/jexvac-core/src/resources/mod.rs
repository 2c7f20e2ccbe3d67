pub mod errors;
pub mod handler;
pub mod operations;
pub mod types;

pub use errors::ResourceError;
pub use handler::{delete_resources, list_resources};
pub use operations::{DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT, clamp_page_limit};
pub use types::{ListOptions, Resource, ResourceCatalog, ResourcePage};
