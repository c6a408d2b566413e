//! FeedbackStore - feedback requests addressed to the signed-in employee.

use std::sync::{Arc, Weak};

use crate::application::store::{
    single_flight, Dispatch, ResourceStore, ScopedStore, StateHandle,
};
use crate::application::ClientContext;
use crate::domain::feedback::Feedback;
use crate::domain::foundation::{FeedbackId, Score};
use crate::domain::resource::{ResourceAction, ResourceState};
use crate::ports::FeedbackApi;

/// State exposed by the feedback store.
pub type FeedbackState = ResourceState<Feedback>;

pub struct FeedbackStore {
    store: Arc<ResourceStore<Feedback>>,
    api: Arc<dyn FeedbackApi>,
}

impl ScopedStore for FeedbackStore {
    const NAME: &'static str = "feedback";
    type State = FeedbackState;
    type Actions = FeedbackActions;

    fn open(context: &ClientContext) -> Self {
        Self {
            store: Arc::new(ResourceStore::new(Self::NAME)),
            api: context.feedbacks(),
        }
    }

    fn actions(&self) -> FeedbackActions {
        FeedbackActions {
            store: Arc::downgrade(&self.store),
            api: Arc::clone(&self.api),
        }
    }

    fn state(&self) -> StateHandle<FeedbackState> {
        self.store.subscribe()
    }
}

/// Operations on the feedback store.
#[derive(Clone)]
pub struct FeedbackActions {
    store: Weak<ResourceStore<Feedback>>,
    api: Arc<dyn FeedbackApi>,
}

impl FeedbackActions {
    /// Replaces the list with the server's.
    pub async fn fetch_feedback_list(&self) -> Dispatch {
        single_flight(
            &self.store,
            ResourceAction::FetchListBegin,
            || self.api.list_feedbacks(),
            ResourceAction::FetchListEnd,
        )
        .await
    }

    /// Submits an answer and replaces the request in place.
    pub async fn update_feedback(&self, id: FeedbackId, score: Score, memo: &str) -> Dispatch {
        single_flight(
            &self.store,
            ResourceAction::UpdateBegin(id),
            || self.api.update_feedback(id, score, memo),
            ResourceAction::UpdateEnd,
        )
        .await
    }
}

impl std::fmt::Debug for FeedbackActions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedbackActions")
            .field("active", &(self.store.strong_count() > 0))
            .finish()
    }
}
