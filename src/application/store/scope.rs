//! Store scopes: the lifetime and visibility boundary of a store instance.
//!
//! A [`StoreScope`] owns one store. While it lives, any [`ScopeHandle`]
//! cloned from it hands out the store's action and state handles. Once the
//! scope is dropped the store is gone, in-flight responses are discarded,
//! and asking a handle for the store is a wiring bug that panics.

use std::fmt;
use std::sync::{Arc, Weak};

use crate::application::ClientContext;

use super::StateHandle;

/// A store that can be opened inside a [`StoreScope`].
pub trait ScopedStore: Send + Sync + Sized + 'static {
    /// Domain name used in logs and scope errors.
    const NAME: &'static str;

    /// State value exposed through [`StateHandle`].
    type State: Clone + Send + Sync + 'static;

    /// Handle used to invoke operations.
    type Actions: Clone + Send + Sync + 'static;

    /// Builds a fresh store with default state.
    fn open(context: &ClientContext) -> Self;

    /// Returns a handle for invoking operations.
    fn actions(&self) -> Self::Actions;

    /// Returns a handle for reading state.
    fn state(&self) -> StateHandle<Self::State>;
}

/// Owner of one store instance.
///
/// Entering creates the store with default state; dropping destroys it.
pub struct StoreScope<S: ScopedStore> {
    store: Arc<S>,
}

impl<S: ScopedStore> StoreScope<S> {
    /// Opens `S` against the collaborators in `context`.
    pub fn enter(context: &ClientContext) -> Self {
        tracing::debug!(store = S::NAME, "store scope entered");
        Self {
            store: Arc::new(S::open(context)),
        }
    }

    /// A handle to pass down to consumers of this scope.
    pub fn handle(&self) -> ScopeHandle<S> {
        ScopeHandle {
            store: Arc::downgrade(&self.store),
        }
    }

    pub fn actions(&self) -> S::Actions {
        self.store.actions()
    }

    pub fn state(&self) -> StateHandle<S::State> {
        self.store.state()
    }
}

impl<S: ScopedStore> Drop for StoreScope<S> {
    fn drop(&mut self) {
        tracing::debug!(store = S::NAME, "store scope exited");
    }
}

impl<S: ScopedStore> fmt::Debug for StoreScope<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreScope").field("store", &S::NAME).finish()
    }
}

/// Consumer-side reference to a store scope.
///
/// Handles are cheap to clone and do not keep the store alive.
pub struct ScopeHandle<S: ScopedStore> {
    store: Weak<S>,
}

impl<S: ScopedStore> ScopeHandle<S> {
    /// A handle that was never bound to a scope.
    ///
    /// Every accessor panics; useful to model a consumer wired up outside
    /// any scope.
    pub fn detached() -> Self {
        Self { store: Weak::new() }
    }

    /// True while the owning scope is alive.
    pub fn is_active(&self) -> bool {
        self.store.strong_count() > 0
    }

    /// Returns the store's action handle.
    ///
    /// # Panics
    ///
    /// Panics if the scope is not active. That is a wiring bug, not a
    /// runtime condition, and must not be caught.
    pub fn actions(&self) -> S::Actions {
        self.live().actions()
    }

    /// Returns the store's state handle.
    ///
    /// # Panics
    ///
    /// Panics if the scope is not active.
    pub fn state(&self) -> StateHandle<S::State> {
        self.live().state()
    }

    fn live(&self) -> Arc<S> {
        match self.store.upgrade() {
            Some(store) => store,
            None => panic!("{} store scope is not active", S::NAME),
        }
    }
}

impl<S: ScopedStore> Clone for ScopeHandle<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<S: ScopedStore> fmt::Debug for ScopeHandle<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopeHandle")
            .field("store", &S::NAME)
            .field("active", &self.is_active())
            .finish()
    }
}
