//! Credential storage adapters.
//!
//! - `FileCredentialStore` - YAML document on disk
//! - `InMemoryCredentialStore` - Process-local, for tests and one-shot runs

mod file;
mod in_memory;

pub use file::FileCredentialStore;
pub use in_memory::InMemoryCredentialStore;
