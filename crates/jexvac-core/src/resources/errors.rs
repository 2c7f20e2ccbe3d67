use crate::errors::JexvacError;
use crate::transport::TransportError;

#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    #[error("Listing resources failed on page {page} with HTTP status {status}")]
    ListFailed { page: u32, status: u16 },

    #[error("Invalid resource page {page}: {message}")]
    InvalidResponse { page: u32, message: String },

    #[error("Service still reports more resources after {max_pages} pages (listing.max_pages)")]
    PageLimitExceeded { max_pages: u32 },

    #[error("Failed to delete resource '{id}' after {completed} successful deletion(s): {message}")]
    DeleteFailed {
        id: String,
        completed: usize,
        message: String,
    },

    #[error("Resource request failed: {source}")]
    Transport {
        #[from]
        source: TransportError,
    },
}

impl JexvacError for ResourceError {
    fn error_code(&self) -> &'static str {
        match self {
            ResourceError::ListFailed { .. } => "RESOURCE_LIST_FAILED",
            ResourceError::InvalidResponse { .. } => "RESOURCE_INVALID_RESPONSE",
            ResourceError::PageLimitExceeded { .. } => "RESOURCE_PAGE_LIMIT_EXCEEDED",
            ResourceError::DeleteFailed { .. } => "RESOURCE_DELETE_FAILED",
            ResourceError::Transport { .. } => "RESOURCE_TRANSPORT_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, ResourceError::PageLimitExceeded { .. })
    }
}
