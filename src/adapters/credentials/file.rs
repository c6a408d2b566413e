//! File-based Credential Store Adapter
//!
//! Keeps the API token in a small YAML document so a session survives
//! restarts of the console.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::ports::{CredentialError, CredentialStore};

#[derive(Serialize, Deserialize)]
struct StoredCredential {
    token: String,
}

/// File-backed storage for the API token.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    /// Create a store writing to `path`. Parent directories are created on
    /// first save.
    ///
    /// # Example
    /// ```ignore
    /// let store = FileCredentialStore::new("~/.config/review-console/credentials.yaml");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CredentialStore for FileCredentialStore {
    fn load(&self) -> Result<Option<SecretString>, CredentialError> {
        let yaml = match fs::read_to_string(&self.path) {
            Ok(yaml) => yaml,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(CredentialError::Io(e.to_string())),
        };

        let stored: StoredCredential = serde_yaml::from_str(&yaml)
            .map_err(|e| CredentialError::DeserializationFailed(e.to_string()))?;

        if stored.token.is_empty() {
            return Ok(None);
        }
        Ok(Some(SecretString::new(stored.token)))
    }

    fn save(&self, token: &SecretString) -> Result<(), CredentialError> {
        if let Some(dir) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| CredentialError::Io(e.to_string()))?;
        }

        let yaml = serde_yaml::to_string(&StoredCredential {
            token: token.expose_secret().clone(),
        })
        .map_err(|e| CredentialError::SerializationFailed(e.to_string()))?;

        fs::write(&self.path, yaml).map_err(|e| CredentialError::Io(e.to_string()))?;
        tracing::debug!(path = %self.path.display(), "credential saved");
        Ok(())
    }

    fn clear(&self) -> Result<(), CredentialError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "credential cleared");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CredentialError::Io(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn token(value: &str) -> SecretString {
        SecretString::new(value.to_string())
    }

    #[test]
    fn load_from_missing_file_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileCredentialStore::new(temp_dir.path().join("credentials.yaml"));

        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_returns_token() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileCredentialStore::new(temp_dir.path().join("nested/credentials.yaml"));

        store.save(&token("abc123")).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.expose_secret(), "abc123");
    }

    #[test]
    fn save_overwrites_previous_token() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileCredentialStore::new(temp_dir.path().join("credentials.yaml"));

        store.save(&token("first")).unwrap();
        store.save(&token("second")).unwrap();

        assert_eq!(store.load().unwrap().unwrap().expose_secret(), "second");
    }

    #[test]
    fn clear_removes_token_and_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileCredentialStore::new(temp_dir.path().join("credentials.yaml"));

        store.save(&token("abc123")).unwrap();
        store.clear().unwrap();
        store.clear().unwrap();

        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn corrupt_document_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("credentials.yaml");
        fs::write(&path, "- not\n- a\n- credential\n").unwrap();

        let result = FileCredentialStore::new(&path).load();

        assert!(matches!(result, Err(CredentialError::DeserializationFailed(_))));
    }
}
