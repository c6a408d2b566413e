//! Domain layer containing the records and pure state machines.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (IDs, value objects, errors)
//! - `employee` - Employee accounts
//! - `review` - Performance reviews and their participants
//! - `feedback` - Feedback requests and answers
//! - `resource` - Normalized collections and the shared reducer
//! - `session` - Sign-in state and its reducer

pub mod employee;
pub mod feedback;
pub mod foundation;
pub mod resource;
pub mod review;
pub mod session;
