//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the stores and the outside world. Adapters implement these ports.
//!
//! ## Remote Resource Client
//!
//! - `EmployeeApi` - Employee accounts and the signed-in employee
//! - `ReviewApi` - Reviews, participants and invitations
//! - `FeedbackApi` - Feedback requests and answers
//! - `SessionApi` - Login, logout and the authentication flag
//!
//! ## Credentials
//!
//! - `CredentialStore` - Persistence of the API token

mod credential_store;
mod employee_api;
mod feedback_api;
mod review_api;
mod session_api;

pub use credential_store::{CredentialError, CredentialStore};
pub use employee_api::EmployeeApi;
pub use feedback_api::FeedbackApi;
pub use review_api::ReviewApi;
pub use session_api::SessionApi;

/// A client implementing the whole remote contract.
///
/// Blanket-implemented; lets a single adapter be handed to
/// [`ClientContext::from_client`](crate::application::ClientContext::from_client).
pub trait RemoteClient: EmployeeApi + ReviewApi + FeedbackApi + SessionApi {}

impl<T> RemoteClient for T where T: EmployeeApi + ReviewApi + FeedbackApi + SessionApi {}
