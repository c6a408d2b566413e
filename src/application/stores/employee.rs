//! EmployeeStore - normalized employee list with guarded CRUD.

use std::sync::{Arc, Weak};

use secrecy::SecretString;

use crate::application::store::{
    single_flight, Dispatch, ResourceStore, ScopedStore, StateHandle,
};
use crate::application::ClientContext;
use crate::domain::employee::Employee;
use crate::domain::foundation::EmployeeId;
use crate::domain::resource::{ResourceAction, ResourceState};
use crate::ports::EmployeeApi;

/// State exposed by the employee store.
pub type EmployeeState = ResourceState<Employee>;

/// Store of every employee account.
pub struct EmployeeStore {
    store: Arc<ResourceStore<Employee>>,
    api: Arc<dyn EmployeeApi>,
}

impl ScopedStore for EmployeeStore {
    const NAME: &'static str = "employee";
    type State = EmployeeState;
    type Actions = EmployeeActions;

    fn open(context: &ClientContext) -> Self {
        Self {
            store: Arc::new(ResourceStore::new(Self::NAME)),
            api: context.employees(),
        }
    }

    fn actions(&self) -> EmployeeActions {
        EmployeeActions {
            store: Arc::downgrade(&self.store),
            api: Arc::clone(&self.api),
        }
    }

    fn state(&self) -> StateHandle<EmployeeState> {
        self.store.subscribe()
    }
}

/// Operations on the employee store.
///
/// Every operation is dropped with [`Dispatch::Busy`] while another one is
/// in flight.
#[derive(Clone)]
pub struct EmployeeActions {
    store: Weak<ResourceStore<Employee>>,
    api: Arc<dyn EmployeeApi>,
}

impl EmployeeActions {
    /// Replaces the list with the server's.
    pub async fn fetch_employee_list(&self) -> Dispatch {
        single_flight(
            &self.store,
            ResourceAction::FetchListBegin,
            || self.api.list_employees(),
            ResourceAction::FetchListEnd,
        )
        .await
    }

    /// Creates an account and appends it to the list.
    pub async fn create_employee(&self, username: &str, password: &SecretString) -> Dispatch {
        single_flight(
            &self.store,
            ResourceAction::CreateBegin,
            || self.api.create_employee(username, password),
            ResourceAction::CreateEnd,
        )
        .await
    }

    /// Changes an employee's email in place.
    pub async fn update_employee(&self, id: EmployeeId, email: &str) -> Dispatch {
        single_flight(
            &self.store,
            ResourceAction::UpdateBegin(id),
            || self.api.update_employee(id, email),
            ResourceAction::UpdateEnd,
        )
        .await
    }

    /// Deletes an account and removes it from the list.
    pub async fn delete_employee(&self, id: EmployeeId) -> Dispatch {
        single_flight(
            &self.store,
            ResourceAction::DeleteBegin(id),
            || self.api.delete_employee(id),
            move |()| ResourceAction::DeleteEnd(id),
        )
        .await
    }
}

impl std::fmt::Debug for EmployeeActions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmployeeActions")
            .field("active", &(self.store.strong_count() > 0))
            .finish()
    }
}
