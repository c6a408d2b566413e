//! In-Memory Credential Store Adapter
//!
//! Holds the API token for the lifetime of the process.

use std::sync::{Arc, PoisonError, RwLock};

use secrecy::{ExposeSecret, SecretString};

use crate::ports::{CredentialError, CredentialStore};

/// In-memory storage for the API token.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCredentialStore {
    token: Arc<RwLock<Option<SecretString>>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `token`, as if a previous run had saved it.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Arc::new(RwLock::new(Some(SecretString::new(token.into())))),
        }
    }

    /// Whether a token is held (useful for tests)
    pub fn is_set(&self) -> bool {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

impl CredentialStore for InMemoryCredentialStore {
    fn load(&self) -> Result<Option<SecretString>, CredentialError> {
        let token = self.token.read().unwrap_or_else(PoisonError::into_inner);
        Ok(token
            .as_ref()
            .map(|secret| SecretString::new(secret.expose_secret().clone())))
    }

    fn save(&self, token: &SecretString) -> Result<(), CredentialError> {
        let mut slot = self.token.write().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(SecretString::new(token.expose_secret().clone()));
        Ok(())
    }

    fn clear(&self) -> Result<(), CredentialError> {
        self.token
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        Ok(())
    }
}
