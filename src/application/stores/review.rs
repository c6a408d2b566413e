//! ReviewStore - reviews of one owner, plus participant invitations.

use std::sync::{Arc, Weak};

use crate::application::store::{
    single_flight, Dispatch, ResourceStore, ScopedStore, StateHandle,
};
use crate::application::ClientContext;
use crate::domain::foundation::{EmployeeId, RemoteError, ReviewId};
use crate::domain::resource::{ResourceAction, ResourceState};
use crate::domain::review::{Review, ReviewParticipant};
use crate::ports::ReviewApi;

/// State exposed by the review store.
pub type ReviewState = ResourceState<Review>;

/// Store of the reviews belonging to the employee last listed.
pub struct ReviewStore {
    store: Arc<ResourceStore<Review>>,
    api: Arc<dyn ReviewApi>,
}

impl ScopedStore for ReviewStore {
    const NAME: &'static str = "review";
    type State = ReviewState;
    type Actions = ReviewActions;

    fn open(context: &ClientContext) -> Self {
        Self {
            store: Arc::new(ResourceStore::new(Self::NAME)),
            api: context.reviews(),
        }
    }

    fn actions(&self) -> ReviewActions {
        ReviewActions {
            store: Arc::downgrade(&self.store),
            api: Arc::clone(&self.api),
        }
    }

    fn state(&self) -> StateHandle<ReviewState> {
        self.store.subscribe()
    }
}

/// Operations on the review store.
#[derive(Clone)]
pub struct ReviewActions {
    store: Weak<ResourceStore<Review>>,
    api: Arc<dyn ReviewApi>,
}

impl ReviewActions {
    /// Replaces the list with the reviews owned by `owner`.
    pub async fn fetch_review_list(&self, owner: EmployeeId) -> Dispatch {
        single_flight(
            &self.store,
            ResourceAction::FetchListBegin,
            || self.api.list_reviews(owner),
            ResourceAction::FetchListEnd,
        )
        .await
    }

    /// Opens a review for `owner` and appends it to the list.
    pub async fn create_review(&self, owner: EmployeeId, title: &str) -> Dispatch {
        single_flight(
            &self.store,
            ResourceAction::CreateBegin,
            || self.api.create_review(owner, title),
            ResourceAction::CreateEnd,
        )
        .await
    }

    /// Renames a review in place.
    pub async fn update_review(&self, id: ReviewId, title: &str) -> Dispatch {
        single_flight(
            &self.store,
            ResourceAction::UpdateBegin(id),
            || self.api.update_review(id, title),
            ResourceAction::UpdateEnd,
        )
        .await
    }

    /// Lists who may be invited to `review`.
    ///
    /// Not guarded and not cached; the caller owns the result.
    pub async fn list_participants(
        &self,
        review: ReviewId,
    ) -> Result<Vec<ReviewParticipant>, RemoteError> {
        self.api.list_participants(review).await
    }

    /// Invites `participants` to `review` and returns the refreshed
    /// participant list.
    pub async fn invite(
        &self,
        review: ReviewId,
        participants: &[EmployeeId],
    ) -> Result<Vec<ReviewParticipant>, RemoteError> {
        tracing::debug!(store = ReviewStore::NAME, review = %review, count = participants.len(), "sending invitations");
        self.api.invite(review, participants).await?;
        self.api.list_participants(review).await
    }
}

impl std::fmt::Debug for ReviewActions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReviewActions")
            .field("active", &(self.store.strong_count() > 0))
            .finish()
    }
}
