//! Read handle on a store's state.

use tokio::sync::watch;

/// Read-only view of a store's state.
///
/// Cheap to clone. Outlives the store: once the owning scope exits, the
/// handle keeps returning the last published value and [`changed`] reports
/// `false`.
///
/// [`changed`]: StateHandle::changed
#[derive(Debug, Clone)]
pub struct StateHandle<S> {
    rx: watch::Receiver<S>,
}

impl<S: Clone> StateHandle<S> {
    pub(crate) fn new(rx: watch::Receiver<S>) -> Self {
        Self { rx }
    }

    /// Clones the current state.
    pub fn snapshot(&self) -> S {
        self.rx.borrow().clone()
    }

    /// Reads the current state without cloning it.
    pub fn read<T>(&self, f: impl FnOnce(&S) -> T) -> T {
        f(&self.rx.borrow())
    }

    /// True if a transition was published since this handle last looked.
    pub fn has_changed(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }

    /// Waits for the next transition and marks it seen.
    ///
    /// Returns `false` once the store is gone.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }

    /// Waits until the state satisfies `predicate` and returns a copy of it.
    ///
    /// Returns `None` if the store goes away first.
    pub async fn wait_for(&mut self, predicate: impl FnMut(&S) -> bool) -> Option<S> {
        self.rx.wait_for(predicate).await.ok().map(|state| state.clone())
    }
}
