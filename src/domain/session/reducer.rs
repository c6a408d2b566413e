//! Session reducer.

use crate::domain::foundation::Reducer;

use super::{SessionAction, SessionState};

/// [`Reducer`] binding of [`reduce`].
pub struct SessionReducer;

impl Reducer for SessionReducer {
    type State = SessionState;
    type Action = SessionAction;

    fn reduce(state: SessionState, action: SessionAction) -> SessionState {
        reduce(state, action)
    }

    fn action_kind(action: &SessionAction) -> &'static str {
        action.kind()
    }
}

/// Applies `action` to `state`, returning the next state.
pub fn reduce(state: SessionState, action: SessionAction) -> SessionState {
    match action {
        SessionAction::HeartBeat(is_authenticated) => SessionState {
            is_authenticated,
            ..state
        },
        SessionAction::LoginBegin | SessionAction::Logout => SessionState::default(),
        SessionAction::LoginEnd(user) => SessionState {
            is_authenticated: true,
            user: Some(user),
        },
        SessionAction::Error(_) => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::employee::Employee;
    use crate::domain::foundation::{EmployeeId, RemoteError};

    fn signed_in() -> SessionState {
        reduce(
            SessionState::default(),
            SessionAction::LoginEnd(Employee::new(EmployeeId::new(1), "root", "root@corp.test").admin()),
        )
    }

    #[test]
    fn login_end_records_user() {
        let state = signed_in();
        assert!(state.is_authenticated());
        assert_eq!(state.user().unwrap().username, "root");
        assert!(state.is_admin());
    }

    #[test]
    fn login_begin_resets_to_signed_out() {
        let state = reduce(signed_in(), SessionAction::LoginBegin);
        assert_eq!(state, SessionState::default());
    }

    #[test]
    fn logout_resets_to_signed_out() {
        let state = reduce(signed_in(), SessionAction::Logout);
        assert!(!state.is_authenticated());
        assert!(state.user().is_none());
    }

    #[test]
    fn heart_beat_only_touches_flag() {
        let state = reduce(signed_in(), SessionAction::HeartBeat(false));
        assert!(!state.is_authenticated());
        assert_eq!(state.user().unwrap().username, "root");

        let state = reduce(SessionState::default(), SessionAction::HeartBeat(true));
        assert!(state.is_authenticated());
        assert!(state.user().is_none());
    }

    #[test]
    fn error_is_identity() {
        let before = signed_in();
        let after = reduce(before.clone(), SessionAction::Error(RemoteError::NotAuthenticated));
        assert_eq!(before, after);
    }
}
