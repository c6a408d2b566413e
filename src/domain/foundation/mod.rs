//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, value objects and error types
//! that form the vocabulary of the review console domain.

mod errors;
mod ids;
mod score;
mod state_machine;

pub use errors::{RemoteError, ValidationError};
pub use ids::{EmployeeId, FeedbackId, ReviewId};
pub use score::Score;
pub use state_machine::Reducer;
