use crate::errors::JexvacError;
use crate::transport::TransportError;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Token request was rejected with HTTP status {status}")]
    RequestFailed { status: u16 },

    #[error("Token status check failed with HTTP status {status}")]
    CheckFailed { status: u16 },

    #[error("Token was not accepted (status: '{status}'). Grant access in the Joplin app and retry")]
    NotAccepted { status: String },

    #[error("Accepted authorization response did not contain a token")]
    MissingToken,

    #[error("Invalid authorization response: {message}")]
    InvalidResponse { message: String },

    #[error("Token cache '{path}' is unreadable ({message}). Delete it to request a new token")]
    CacheCorrupted { path: String, message: String },

    #[error("Failed to write token cache '{path}': {message}")]
    CacheWriteFailed { path: String, message: String },

    #[error("Approval prompt failed: {message}")]
    ApprovalAborted { message: String },

    #[error("Authorization request failed: {source}")]
    Transport {
        #[from]
        source: TransportError,
    },
}

impl JexvacError for AuthError {
    fn error_code(&self) -> &'static str {
        match self {
            AuthError::RequestFailed { .. } => "AUTH_REQUEST_FAILED",
            AuthError::CheckFailed { .. } => "AUTH_CHECK_FAILED",
            AuthError::NotAccepted { .. } => "AUTH_NOT_ACCEPTED",
            AuthError::MissingToken => "AUTH_MISSING_TOKEN",
            AuthError::InvalidResponse { .. } => "AUTH_INVALID_RESPONSE",
            AuthError::CacheCorrupted { .. } => "AUTH_CACHE_CORRUPTED",
            AuthError::CacheWriteFailed { .. } => "AUTH_CACHE_WRITE_FAILED",
            AuthError::ApprovalAborted { .. } => "AUTH_APPROVAL_ABORTED",
            AuthError::Transport { .. } => "AUTH_TRANSPORT_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            AuthError::NotAccepted { .. }
                | AuthError::CacheCorrupted { .. }
                | AuthError::ApprovalAborted { .. }
        )
    }
}
