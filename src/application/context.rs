//! ClientContext - the collaborators every store is built from.
//!
//! Handed explicitly to whatever opens a store scope. There is no global
//! lookup: a store sees exactly the ports it was opened with.

use std::sync::Arc;

use crate::ports::{EmployeeApi, FeedbackApi, RemoteClient, ReviewApi, SessionApi};

use super::store::{Dispatch, ScopedStore, StoreScope};
use super::stores::SessionStore;

/// Remote Resource Client ports, one per domain.
#[derive(Clone)]
pub struct ClientContext {
    employees: Arc<dyn EmployeeApi>,
    reviews: Arc<dyn ReviewApi>,
    feedbacks: Arc<dyn FeedbackApi>,
    session: Arc<dyn SessionApi>,
}

impl ClientContext {
    pub fn new(
        employees: Arc<dyn EmployeeApi>,
        reviews: Arc<dyn ReviewApi>,
        feedbacks: Arc<dyn FeedbackApi>,
        session: Arc<dyn SessionApi>,
    ) -> Self {
        Self {
            employees,
            reviews,
            feedbacks,
            session,
        }
    }

    /// Uses one client for every port.
    pub fn from_client<C: RemoteClient + 'static>(client: Arc<C>) -> Self {
        Self {
            employees: client.clone(),
            reviews: client.clone(),
            feedbacks: client.clone(),
            session: client,
        }
    }

    pub fn employees(&self) -> Arc<dyn EmployeeApi> {
        Arc::clone(&self.employees)
    }

    pub fn reviews(&self) -> Arc<dyn ReviewApi> {
        Arc::clone(&self.reviews)
    }

    pub fn feedbacks(&self) -> Arc<dyn FeedbackApi> {
        Arc::clone(&self.feedbacks)
    }

    pub fn session(&self) -> Arc<dyn SessionApi> {
        Arc::clone(&self.session)
    }

    /// Opens a fresh scope for store `S`.
    pub fn enter<S: ScopedStore>(&self) -> StoreScope<S> {
        StoreScope::enter(self)
    }

    /// Opens a session scope and restores the signed-in employee.
    ///
    /// Entering alone only reads the authentication flag; the user record
    /// stays empty until a restore completes.
    pub async fn enter_restored(&self) -> (StoreScope<SessionStore>, Dispatch) {
        let scope = self.enter::<SessionStore>();
        let outcome = scope.actions().restore().await;
        (scope, outcome)
    }
}

impl std::fmt::Debug for ClientContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientContext").finish_non_exhaustive()
    }
}
