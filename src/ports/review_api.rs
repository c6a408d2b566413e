//! Review API port.

use async_trait::async_trait;

use crate::domain::foundation::{EmployeeId, RemoteError, ReviewId};
use crate::domain::review::{Review, ReviewParticipant};

/// Remote review operations.
#[async_trait]
pub trait ReviewApi: Send + Sync {
    /// Lists the reviews owned by `owner`.
    async fn list_reviews(&self, owner: EmployeeId) -> Result<Vec<Review>, RemoteError>;

    /// Opens a review for `owner`.
    async fn create_review(&self, owner: EmployeeId, title: &str) -> Result<Review, RemoteError>;

    /// Renames a review.
    async fn update_review(&self, id: ReviewId, title: &str) -> Result<Review, RemoteError>;

    /// Lists employees who may be invited to give feedback on a review,
    /// flagged with whether they already were.
    async fn list_participants(&self, id: ReviewId) -> Result<Vec<ReviewParticipant>, RemoteError>;

    /// Sends feedback invitations for a review.
    async fn invite(&self, id: ReviewId, participants: &[EmployeeId]) -> Result<(), RemoteError>;
}
