//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the stores to external systems:
//! - `http` - Review service over its REST API (reqwest)
//! - `credentials` - Token persistence (YAML file, in-memory)
//! - `mock` - In-memory review service for tests

pub mod credentials;
pub mod http;
pub mod mock;

pub use credentials::{FileCredentialStore, InMemoryCredentialStore};
pub use http::{HttpClientConfig, HttpRemoteClient};
pub use mock::MockRemoteClient;
