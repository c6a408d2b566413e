//! Single-flight execution of remote operations against a resource store.
//!
//! At most one operation per store is in flight. The `is_fetching` flag is
//! tested and raised in one step before the remote call starts, and lowered
//! by whichever of `*End`, `Error` or the drop guard runs first.

use std::future::Future;
use std::sync::Weak;

use crate::domain::foundation::RemoteError;
use crate::domain::resource::{Entity, ResourceAction, ResourceReducer};

use super::Store;

/// A store holding a normalized entity collection.
pub type ResourceStore<E> = Store<ResourceReducer<E>>;

/// What happened to one store operation.
///
/// Remote failures are absorbed into state; this value only tells the caller
/// which path was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// The remote call succeeded and its result was applied.
    Completed,
    /// The remote call failed; `is_fetching` was cleared and data kept.
    Failed,
    /// Another operation was in flight; nothing was sent.
    Busy,
    /// The store's scope had already exited; nothing was applied.
    Closed,
}

impl Dispatch {
    pub fn is_completed(&self) -> bool {
        matches!(self, Dispatch::Completed)
    }
}

impl<E: Entity> Store<ResourceReducer<E>> {
    /// Raises `is_fetching` with `begin` unless an operation is already in flight.
    pub fn try_begin(&self, begin: ResourceAction<E>) -> bool {
        self.dispatch_if(|state| !state.is_fetching(), begin)
    }
}

/// Lowers `is_fetching` if the operation future is dropped before settling.
struct InFlight<'a, E: Entity> {
    store: &'a Weak<ResourceStore<E>>,
    armed: bool,
}

impl<E: Entity> InFlight<'_, E> {
    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl<E: Entity> Drop for InFlight<'_, E> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        if let Some(store) = self.store.upgrade() {
            tracing::debug!(store = store.name(), "operation abandoned mid-flight");
            store.dispatch(ResourceAction::Error(RemoteError::Cancelled));
        }
    }
}

/// Runs `call` as the single in-flight operation of `store`.
///
/// `begin` is dispatched only if no other operation is outstanding; `finish`
/// maps the remote result to the closing action. The store is held weakly
/// across the await so a scope that exits mid-request drops the late
/// response instead of resurrecting the store.
pub async fn single_flight<E, T, F, Fut>(
    store: &Weak<ResourceStore<E>>,
    begin: ResourceAction<E>,
    call: F,
    finish: impl FnOnce(T) -> ResourceAction<E>,
) -> Dispatch
where
    E: Entity,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, RemoteError>>,
{
    let name = {
        let Some(live) = store.upgrade() else {
            tracing::debug!("operation requested on a closed store");
            return Dispatch::Closed;
        };
        let kind = begin.kind();
        if !live.try_begin(begin) {
            tracing::debug!(store = live.name(), action = kind, "skipped: operation already in flight");
            return Dispatch::Busy;
        }
        tracing::debug!(store = live.name(), action = kind, "operation started");
        live.name()
    };

    let mut guard = InFlight { store, armed: true };
    let result = call().await;
    guard.disarm();

    let Some(live) = store.upgrade() else {
        tracing::debug!(store = name, "scope exited before response arrived; dropping it");
        return Dispatch::Closed;
    };

    match result {
        Ok(value) => {
            live.dispatch(finish(value));
            Dispatch::Completed
        }
        Err(error) => {
            tracing::warn!(store = name, error = %error, "remote operation failed");
            live.dispatch(ResourceAction::Error(error));
            Dispatch::Failed
        }
    }
}
