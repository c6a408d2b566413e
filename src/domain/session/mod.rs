//! Session domain module.
//!
//! Tracks who is signed in to the console. Unlike the entity collections the
//! session is a single record plus an authentication flag, so it has its own
//! narrower state and action set.
//!
//! # Actions
//!
//! - `HeartBeat` - Resynchronizes the flag with stored credentials
//! - `LoginBegin` - Resets to the signed-out record before a login attempt
//! - `LoginEnd` - Records the signed-in employee
//! - `Logout` - Resets to the signed-out record
//! - `Error` - A failed session call; no state change

mod action;
mod reducer;
mod state;

pub use action::SessionAction;
pub use reducer::{reduce, SessionReducer};
pub use state::SessionState;
