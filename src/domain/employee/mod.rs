//! Employee accounts.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::EmployeeId;
use crate::domain::resource::Entity;

/// An employee account as returned by the review service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub is_admin: bool,
}

impl Employee {
    pub fn new(id: EmployeeId, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
            is_admin: false,
        }
    }

    /// Marks the account as an administrator.
    pub fn admin(mut self) -> Self {
        self.is_admin = true;
        self
    }
}

impl Entity for Employee {
    type Id = EmployeeId;

    fn id(&self) -> EmployeeId {
        self.id
    }
}
