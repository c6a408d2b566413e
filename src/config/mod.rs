//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `REVIEW_CONSOLE`
//! prefix and nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use review_console::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Talking to {}", config.api.base_url);
//! ```

mod api;
mod credentials;
mod error;
mod logging;

pub use api::ApiConfig;
pub use credentials::CredentialsConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a console
/// pointed at a local service with an in-memory credential.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Review service connection
    #[serde(default)]
    pub api: ApiConfig,

    /// Token persistence
    #[serde(default)]
    pub credentials: CredentialsConfig,

    /// Tracing output
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `REVIEW_CONSOLE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `REVIEW_CONSOLE__API__BASE_URL=https://...` -> `api.base_url`
    /// - `REVIEW_CONSOLE__CREDENTIALS__TOKEN_PATH=...` -> `credentials.token_path`
    /// - `REVIEW_CONSOLE__LOGGING__FORMAT=json` -> `logging.format`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("REVIEW_CONSOLE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.api.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
