//! Application layer - stores that turn remote calls into observable state.
//!
//! Stores depend only on the ports. The collaborators are bundled in a
//! [`ClientContext`] and handed to whatever opens a store scope.

mod context;
pub mod store;
pub mod stores;

pub use context::ClientContext;
pub use store::{Dispatch, ScopeHandle, ScopedStore, StateHandle, StoreScope};
pub use stores::{
    EmployeeActions, EmployeeState, EmployeeStore, FeedbackActions, FeedbackState, FeedbackStore,
    ReviewActions, ReviewState, ReviewStore, SessionActions, SessionStore,
};
