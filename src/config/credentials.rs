//! Credential storage settings

use serde::Deserialize;
use std::path::PathBuf;

/// Where the API token is kept between runs
///
/// Without a `token_path` the token lives only as long as the process.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CredentialsConfig {
    pub token_path: Option<PathBuf>,
}

impl CredentialsConfig {
    pub fn is_persistent(&self) -> bool {
        self.token_path.is_some()
    }
}
