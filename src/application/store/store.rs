//! Store - owns one state value and folds actions into it.

use tokio::sync::watch;

use crate::domain::foundation::Reducer;

use super::StateHandle;

/// Holds the current state of one store instance and publishes every
/// transition to its [`StateHandle`]s.
///
/// Each dispatch replaces the state wholesale under the channel's lock, so
/// readers never observe a half-applied action.
pub struct Store<R: Reducer> {
    name: &'static str,
    state: watch::Sender<R::State>,
}

impl<R: Reducer> Store<R> {
    /// Creates a store holding `R::State::default()`.
    pub fn new(name: &'static str) -> Self {
        Self::with_state(name, R::State::default())
    }

    /// Creates a store holding `initial`.
    pub fn with_state(name: &'static str, initial: R::State) -> Self {
        let (state, _) = watch::channel(initial);
        Self { name, state }
    }

    /// Name used in log lines and scope errors.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Applies `action` unconditionally.
    pub fn dispatch(&self, action: R::Action) {
        tracing::trace!(store = self.name, action = R::action_kind(&action), "dispatch");
        self.state.send_modify(|state| {
            let current = std::mem::take(state);
            *state = R::reduce(current, action);
        });
    }

    /// Applies `action` only if `guard` accepts the current state.
    ///
    /// The check and the transition happen under one lock, which makes this
    /// a test-and-set even when callers run on several threads.
    pub fn dispatch_if(&self, guard: impl FnOnce(&R::State) -> bool, action: R::Action) -> bool {
        let kind = R::action_kind(&action);
        let applied = self.state.send_if_modified(|state| {
            if !guard(state) {
                return false;
            }
            let current = std::mem::take(state);
            *state = R::reduce(current, action);
            true
        });
        tracing::trace!(store = self.name, action = kind, applied, "conditional dispatch");
        applied
    }

    /// Clones the current state.
    pub fn snapshot(&self) -> R::State {
        self.state.borrow().clone()
    }

    /// Opens a read handle on this store's state.
    pub fn subscribe(&self) -> StateHandle<R::State> {
        StateHandle::new(self.state.subscribe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Toggle;

    impl Reducer for Toggle {
        type State = bool;
        type Action = ();

        fn reduce(state: bool, _action: ()) -> bool {
            !state
        }

        fn action_kind(_action: &()) -> &'static str {
            "TOGGLE"
        }
    }

    #[test]
    fn dispatch_replaces_state() {
        let store: Store<Toggle> = Store::new("toggle");
        store.dispatch(());
        assert!(store.snapshot());
        store.dispatch(());
        assert!(!store.snapshot());
    }

    #[test]
    fn dispatch_if_skips_when_guard_rejects() {
        let store: Store<Toggle> = Store::with_state("toggle", true);
        assert!(!store.dispatch_if(|on| !on, ()));
        assert!(store.snapshot());

        assert!(store.dispatch_if(|on| *on, ()));
        assert!(!store.snapshot());
    }

    #[tokio::test]
    async fn subscribers_see_each_transition() {
        let store: Store<Toggle> = Store::new("toggle");
        let mut handle = store.subscribe();

        store.dispatch(());
        assert!(handle.changed().await);
        assert!(handle.snapshot());
    }

    #[test]
    fn rejected_conditional_dispatch_does_not_notify() {
        let store: Store<Toggle> = Store::new("toggle");
        let handle = store.subscribe();

        store.dispatch_if(|_| false, ());
        assert!(!handle.has_changed());
    }
}
