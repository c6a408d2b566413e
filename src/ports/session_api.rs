//! Session API port.
//!
//! Sign-in and sign-out. The implementation owns the credential: it persists
//! the token on login and forgets it on logout, so the session store never
//! touches credential storage directly.

use async_trait::async_trait;
use secrecy::SecretString;

use crate::domain::employee::Employee;
use crate::domain::foundation::RemoteError;

/// Remote session operations.
#[async_trait]
pub trait SessionApi: Send + Sync {
    /// Exchanges credentials for a token and returns the signed-in employee.
    async fn login(&self, username: &str, password: &SecretString) -> Result<Employee, RemoteError>;

    /// Drops the stored credential. Never fails.
    fn logout(&self);

    /// Whether a credential is currently held.
    fn is_authenticated(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_api_is_object_safe() {
        fn _accepts_dyn(_api: &dyn SessionApi) {}
    }
}
