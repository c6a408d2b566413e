//! Resource reducer: `(state, action) -> state`.
//!
//! Shared by the employee, review and feedback stores. Pure; the store is
//! responsible for only dispatching an `*End` after the matching `*Begin`.

use std::marker::PhantomData;

use crate::domain::foundation::Reducer;

use super::{normalize, Entity, ResourceAction, ResourceState};

/// [`Reducer`] binding of [`reduce`] for entity type `E`.
pub struct ResourceReducer<E>(PhantomData<fn() -> E>);

impl<E: Entity> Reducer for ResourceReducer<E> {
    type State = ResourceState<E>;
    type Action = ResourceAction<E>;

    fn reduce(state: ResourceState<E>, action: ResourceAction<E>) -> ResourceState<E> {
        reduce(state, action)
    }

    fn action_kind(action: &ResourceAction<E>) -> &'static str {
        action.kind()
    }
}

/// Applies `action` to `state`, returning the next state.
pub fn reduce<E: Entity>(state: ResourceState<E>, action: ResourceAction<E>) -> ResourceState<E> {
    match action {
        ResourceAction::FetchListBegin
        | ResourceAction::CreateBegin
        | ResourceAction::UpdateBegin(_)
        | ResourceAction::DeleteBegin(_) => ResourceState {
            is_fetching: true,
            ..state
        },

        ResourceAction::FetchListEnd(records) => ResourceState::from_normalized(normalize(records)),

        ResourceAction::CreateEnd(entity) => {
            let ResourceState {
                mut id_list,
                mut entity_dict,
                ..
            } = state;
            let id = entity.id();
            if entity_dict.insert(id, entity).is_none() {
                id_list.push(id);
            }
            ResourceState {
                is_fetching: false,
                id_list,
                entity_dict,
            }
        }

        ResourceAction::UpdateEnd(entity) => {
            let mut entity_dict = state.entity_dict;
            if let Some(slot) = entity_dict.get_mut(&entity.id()) {
                *slot = entity;
            }
            ResourceState {
                is_fetching: false,
                id_list: state.id_list,
                entity_dict,
            }
        }

        ResourceAction::DeleteEnd(deleted) => {
            let ResourceState {
                mut id_list,
                mut entity_dict,
                ..
            } = state;
            id_list.retain(|id| *id != deleted);
            entity_dict.remove(&deleted);
            ResourceState {
                is_fetching: false,
                id_list,
                entity_dict,
            }
        }

        ResourceAction::Error(_) => ResourceState {
            is_fetching: false,
            ..state
        },
    }
}
