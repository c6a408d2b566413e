//! Mock adapters for tests and demos.

mod remote;

pub use remote::MockRemoteClient;
