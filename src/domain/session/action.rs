//! Actions accepted by the session reducer.

use crate::domain::employee::Employee;
use crate::domain::foundation::RemoteError;

#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    HeartBeat(bool),
    LoginBegin,
    LoginEnd(Employee),
    Logout,
    Error(RemoteError),
}

impl SessionAction {
    /// Short name used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            SessionAction::HeartBeat(_) => "HEART_BEAT",
            SessionAction::LoginBegin => "LOGIN_BEGIN",
            SessionAction::LoginEnd(_) => "LOGIN_END",
            SessionAction::Logout => "LOGOUT",
            SessionAction::Error(_) => "ERROR",
        }
    }
}
