//! Credential Store Port - where the API token survives restarts.
//!
//! Synchronous on purpose: the session flag is read synchronously and the
//! stored document is a single short token.

use secrecy::SecretString;

/// Errors that can occur while reading or writing the stored token.
#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Failed to serialize credential: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize credential: {0}")]
    DeserializationFailed(String),
}

/// Port for persisting the API token.
pub trait CredentialStore: Send + Sync {
    /// Returns the stored token, if any.
    fn load(&self) -> Result<Option<SecretString>, CredentialError>;

    /// Replaces the stored token.
    fn save(&self, token: &SecretString) -> Result<(), CredentialError>;

    /// Removes the stored token. Clearing an empty store is not an error.
    fn clear(&self) -> Result<(), CredentialError>;
}
