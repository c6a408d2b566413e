//! SessionStore - who is signed in.
//!
//! Not a resource collection and not guarded: a login may be retried while
//! an earlier attempt is still outstanding, and the last response wins.

use std::sync::{Arc, Weak};

use secrecy::SecretString;

use crate::application::store::{Dispatch, ScopedStore, StateHandle, Store};
use crate::application::ClientContext;
use crate::domain::employee::Employee;
use crate::domain::foundation::RemoteError;
use crate::domain::session::{SessionAction, SessionReducer, SessionState};
use crate::ports::{EmployeeApi, SessionApi};

type SessionInner = Store<SessionReducer>;

pub struct SessionStore {
    store: Arc<SessionInner>,
    session: Arc<dyn SessionApi>,
    employees: Arc<dyn EmployeeApi>,
}

impl ScopedStore for SessionStore {
    const NAME: &'static str = "session";
    type State = SessionState;
    type Actions = SessionActions;

    /// Opens the store and reconciles the flag with the held credential.
    fn open(context: &ClientContext) -> Self {
        let session = context.session();
        let store = Arc::new(SessionInner::new(Self::NAME));
        store.dispatch(SessionAction::HeartBeat(session.is_authenticated()));
        Self {
            store,
            session,
            employees: context.employees(),
        }
    }

    fn actions(&self) -> SessionActions {
        SessionActions {
            store: Arc::downgrade(&self.store),
            session: Arc::clone(&self.session),
            employees: Arc::clone(&self.employees),
        }
    }

    fn state(&self) -> StateHandle<SessionState> {
        self.store.subscribe()
    }
}

/// Operations on the session store.
#[derive(Clone)]
pub struct SessionActions {
    store: Weak<SessionInner>,
    session: Arc<dyn SessionApi>,
    employees: Arc<dyn EmployeeApi>,
}

impl SessionActions {
    /// Signs in. The client persists the token on success.
    pub async fn login(&self, username: &str, password: &SecretString) -> Dispatch {
        let Some(live) = self.store.upgrade() else {
            return Dispatch::Closed;
        };
        live.dispatch(SessionAction::LoginBegin);
        drop(live);

        let result = self.session.login(username, password).await;
        self.settle(result)
    }

    /// Signs out immediately. Always succeeds.
    pub fn logout(&self) {
        self.session.logout();
        if let Some(live) = self.store.upgrade() {
            live.dispatch(SessionAction::Logout);
        }
    }

    /// Loads the signed-in employee for a credential found at startup.
    ///
    /// Opening the scope does not call this. Use
    /// [`ClientContext::enter_restored`] or call it after entering.
    ///
    /// [`ClientContext::enter_restored`]: crate::application::ClientContext::enter_restored
    pub async fn restore(&self) -> Dispatch {
        if self.store.strong_count() == 0 {
            return Dispatch::Closed;
        }
        if !self.session.is_authenticated() {
            tracing::debug!(store = SessionStore::NAME, "no stored credential to restore");
            return self.settle(Err(RemoteError::NotAuthenticated));
        }

        let result = self.employees.fetch_self().await;
        self.settle(result)
    }

    /// Re-reads the authentication flag from the client.
    pub fn heart_beat(&self) {
        if let Some(live) = self.store.upgrade() {
            live.dispatch(SessionAction::HeartBeat(self.session.is_authenticated()));
        }
    }

    fn settle(&self, result: Result<Employee, RemoteError>) -> Dispatch {
        let Some(live) = self.store.upgrade() else {
            tracing::debug!(store = SessionStore::NAME, "scope exited before response arrived; dropping it");
            return Dispatch::Closed;
        };
        match result {
            Ok(user) => {
                live.dispatch(SessionAction::LoginEnd(user));
                Dispatch::Completed
            }
            Err(error) => {
                tracing::warn!(store = SessionStore::NAME, error = %error, "session call failed");
                live.dispatch(SessionAction::Error(error));
                Dispatch::Failed
            }
        }
    }
}

impl std::fmt::Debug for SessionActions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionActions")
            .field("active", &(self.store.strong_count() > 0))
            .finish()
    }
}
