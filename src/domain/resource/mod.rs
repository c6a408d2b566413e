//! Normalized resource collections.
//!
//! The pure half of a resource store: the entity contract, the normalizer,
//! the state value and the reducer that moves it between transitions.

mod action;
mod entity;
mod normalize;
mod reducer;
mod state;

pub use action::ResourceAction;
pub use entity::Entity;
pub use normalize::{normalize, Normalized};
pub use reducer::{reduce, ResourceReducer};
pub use state::ResourceState;
