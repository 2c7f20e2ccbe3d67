use crate::errors::JexvacError;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Failed to build HTTP client: {message}")]
    ClientBuildFailed { message: String },

    #[error("Request to {url} failed: {message}")]
    RequestFailed { url: String, message: String },

    #[error("Failed to read response body from {url}: {message}")]
    BodyReadFailed { url: String, message: String },
}

impl JexvacError for TransportError {
    fn error_code(&self) -> &'static str {
        match self {
            TransportError::ClientBuildFailed { .. } => "TRANSPORT_CLIENT_BUILD_FAILED",
            TransportError::RequestFailed { .. } => "TRANSPORT_REQUEST_FAILED",
            TransportError::BodyReadFailed { .. } => "TRANSPORT_BODY_READ_FAILED",
        }
    }
}
