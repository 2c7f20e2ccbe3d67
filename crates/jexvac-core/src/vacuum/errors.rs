use crate::archive::ArchiveError;
use crate::auth::AuthError;
use crate::cleanup::CleanupError;
use crate::errors::JexvacError;
use crate::resources::ResourceError;

#[derive(Debug, thiserror::Error)]
pub enum VacuumError {
    #[error(
        "Failed to connect to Joplin: no clipper service on {host} ports {start}..{end}. Is the Web Clipper service enabled?"
    )]
    PortNotFound { host: String, start: u16, end: u16 },

    #[error("Failed to obtain Joplin API token: {source}")]
    Auth {
        #[from]
        source: AuthError,
    },

    #[error(transparent)]
    Archive {
        #[from]
        source: ArchiveError,
    },

    #[error(transparent)]
    Resources {
        #[from]
        source: ResourceError,
    },

    #[error(transparent)]
    Cleanup {
        #[from]
        source: CleanupError,
    },
}

impl JexvacError for VacuumError {
    fn error_code(&self) -> &'static str {
        match self {
            VacuumError::PortNotFound { .. } => "VACUUM_PORT_NOT_FOUND",
            VacuumError::Auth { source } => source.error_code(),
            VacuumError::Archive { source } => source.error_code(),
            VacuumError::Resources { source } => source.error_code(),
            VacuumError::Cleanup { source } => source.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            VacuumError::PortNotFound { .. } => true,
            VacuumError::Auth { source } => source.is_user_error(),
            VacuumError::Archive { source } => source.is_user_error(),
            VacuumError::Resources { source } => source.is_user_error(),
            VacuumError::Cleanup { source } => source.is_user_error(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_not_found_display() {
        let error = VacuumError::PortNotFound {
            host: "localhost".to_string(),
            start: 41184,
            end: 41194,
        };
        assert!(error.to_string().contains("localhost ports 41184..41194"));
        assert_eq!(error.error_code(), "VACUUM_PORT_NOT_FOUND");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_wrapped_codes_pass_through() {
        let error: VacuumError = CleanupError::IntegrityViolation {
            missing: vec!["w".to_string()],
        }
        .into();
        assert_eq!(error.error_code(), "CLEANUP_INTEGRITY_VIOLATION");
        assert!(error.to_string().starts_with("Sanity check failed"));
    }
}
