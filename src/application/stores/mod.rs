//! Per-domain stores.
//!
//! Each store pairs a state value with an action handle and is opened
//! through [`ClientContext::enter`](crate::application::ClientContext::enter).
//!
//! - `EmployeeStore` - Employee accounts
//! - `ReviewStore` - Reviews of one owner, participants and invitations
//! - `FeedbackStore` - Feedback requests and answers
//! - `SessionStore` - Login state

mod employee;
mod feedback;
mod review;
mod session;

pub use employee::{EmployeeActions, EmployeeState, EmployeeStore};
pub use feedback::{FeedbackActions, FeedbackState, FeedbackStore};
pub use review::{ReviewActions, ReviewState, ReviewStore};
pub use session::{SessionActions, SessionStore};
