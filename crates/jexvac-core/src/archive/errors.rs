use crate::errors::JexvacError;

#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("Failed to open archive '{path}': {message}")]
    OpenFailed { path: String, message: String },

    #[error("Failed to read archive '{path}': {message}")]
    ReadFailed { path: String, message: String },
}

impl JexvacError for ArchiveError {
    fn error_code(&self) -> &'static str {
        match self {
            ArchiveError::OpenFailed { .. } => "ARCHIVE_OPEN_FAILED",
            ArchiveError::ReadFailed { .. } => "ARCHIVE_READ_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, ArchiveError::OpenFailed { .. })
    }
}
