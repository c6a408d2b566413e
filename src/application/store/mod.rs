//! Store engine shared by every domain store.
//!
//! - `Store` - Owns a state value and folds reducer actions into it
//! - `StateHandle` - Read handle published to consumers
//! - `single_flight` - Guarded execution of one remote operation
//! - `StoreScope` / `ScopeHandle` - Lifetime and visibility of a store

mod scope;
mod single_flight;
mod state_handle;
#[allow(clippy::module_inception)]
mod store;

pub use scope::{ScopeHandle, ScopedStore, StoreScope};
pub use single_flight::{single_flight, Dispatch, ResourceStore};
pub use state_handle::StateHandle;
pub use store::Store;
