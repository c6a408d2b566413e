//! Actions accepted by the resource reducer.

use crate::domain::foundation::RemoteError;

use super::Entity;

/// Transitions of a resource store.
///
/// Every remote operation is bracketed by a `*Begin` action dispatched before
/// the call and either the matching `*End` or `Error` once it settles.
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceAction<E: Entity> {
    FetchListBegin,
    FetchListEnd(Vec<E>),
    CreateBegin,
    CreateEnd(E),
    UpdateBegin(E::Id),
    UpdateEnd(E),
    DeleteBegin(E::Id),
    DeleteEnd(E::Id),
    Error(RemoteError),
}

impl<E: Entity> ResourceAction<E> {
    /// Short name used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            ResourceAction::FetchListBegin => "FETCH_LIST_BEGIN",
            ResourceAction::FetchListEnd(_) => "FETCH_LIST_END",
            ResourceAction::CreateBegin => "CREATE_BEGIN",
            ResourceAction::CreateEnd(_) => "CREATE_END",
            ResourceAction::UpdateBegin(_) => "UPDATE_BEGIN",
            ResourceAction::UpdateEnd(_) => "UPDATE_END",
            ResourceAction::DeleteBegin(_) => "DELETE_BEGIN",
            ResourceAction::DeleteEnd(_) => "DELETE_END",
            ResourceAction::Error(_) => "ERROR",
        }
    }
}
