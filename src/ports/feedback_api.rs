//! Feedback API port.

use async_trait::async_trait;

use crate::domain::feedback::Feedback;
use crate::domain::foundation::{FeedbackId, RemoteError, Score};

/// Remote feedback operations.
#[async_trait]
pub trait FeedbackApi: Send + Sync {
    /// Lists the feedback requests addressed to the signed-in employee.
    async fn list_feedbacks(&self) -> Result<Vec<Feedback>, RemoteError>;

    /// Answers (or re-answers) a feedback request.
    async fn update_feedback(
        &self,
        id: FeedbackId,
        score: Score,
        memo: &str,
    ) -> Result<Feedback, RemoteError>;
}
