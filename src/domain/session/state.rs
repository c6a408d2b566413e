//! Session state.

use crate::domain::employee::Employee;

/// Who is signed in.
///
/// `user` is `None` for the signed-out record. `is_authenticated` may be true
/// while `user` is still `None`: a stored credential was found but the
/// employee record has not been fetched yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub(crate) is_authenticated: bool,
    pub(crate) user: Option<Employee>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    pub fn user(&self) -> Option<&Employee> {
        self.user.as_ref()
    }

    /// True when the signed-in employee is an administrator.
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().map_or(false, |user| user.is_admin)
    }
}
