//! Token cache persistence.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::auth::errors::AuthError;

/// Key-value persistence for the approved token.
///
/// The cache holds the full last approval response; only its `token` field
/// is read back.
pub trait TokenStore {
    /// Returns the cached token, or `None` when nothing has been cached.
    fn load(&self) -> Result<Option<String>, AuthError>;

    /// Replaces the cache with `response`.
    fn save(&self, response: &serde_json::Value) -> Result<(), AuthError>;
}

/// Token cache stored as a JSON file.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn corrupted(&self, message: impl Into<String>) -> AuthError {
        AuthError::CacheCorrupted {
            path: self.path.display().to_string(),
            message: message.into(),
        }
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>, AuthError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content =
            std::fs::read_to_string(&self.path).map_err(|e| self.corrupted(e.to_string()))?;
        let cached: serde_json::Value =
            serde_json::from_str(&content).map_err(|e| self.corrupted(e.to_string()))?;

        let token = cached
            .get("token")
            .and_then(|t| t.as_str())
            .ok_or_else(|| self.corrupted("no 'token' field"))?;

        info!(
            event = "core.auth.cache_loaded",
            path = %self.path.display()
        );

        Ok(Some(token.to_string()))
    }

    fn save(&self, response: &serde_json::Value) -> Result<(), AuthError> {
        let write_failed = |message: String| AuthError::CacheWriteFailed {
            path: self.path.display().to_string(),
            message,
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| write_failed(e.to_string()))?;
        }

        let json = serde_json::to_string(response).map_err(|e| write_failed(e.to_string()))?;
        std::fs::write(&self.path, json).map_err(|e| write_failed(e.to_string()))?;

        info!(
            event = "core.auth.cache_saved",
            path = %self.path.display()
        );

        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_file_loads_none() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(temp_dir.path().join(".joplin_token"));
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_save_keeps_full_response() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nested").join(".joplin_token");
        let store = FileTokenStore::new(&path);

        let response = json!({"status": "accepted", "token": "abc123"});
        store.save(&response).unwrap();

        let on_disk: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(on_disk, response);
        assert_eq!(store.load().unwrap(), Some("abc123".to_string()));
    }

    #[test]
    fn test_minimal_cache_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join(".joplin_token");
        std::fs::write(&path, r#"{"token":"T"}"#).unwrap();

        let store = FileTokenStore::new(&path);
        assert_eq!(store.load().unwrap(), Some("T".to_string()));
    }

    #[test]
    fn test_cache_without_token_is_corrupted() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join(".joplin_token");
        std::fs::write(&path, r#"{"status":"accepted"}"#).unwrap();

        let err = FileTokenStore::new(&path).load().unwrap_err();
        assert!(matches!(err, AuthError::CacheCorrupted { .. }));
        assert!(err.to_string().contains("no 'token' field"));
    }

    #[test]
    fn test_invalid_json_is_corrupted() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join(".joplin_token");
        std::fs::write(&path, "not json").unwrap();

        let err = FileTokenStore::new(&path).load().unwrap_err();
        assert!(err.to_string().contains("Delete it"));
    }
}
