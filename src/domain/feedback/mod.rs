//! Feedback requests: one invitation for an employee to answer a review.

use serde::{Deserialize, Serialize};

use crate::domain::employee::Employee;
use crate::domain::foundation::{FeedbackId, Score};
use crate::domain::resource::Entity;
use crate::domain::review::ReviewSummary;

/// The submitted answer to a feedback request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackAnswer {
    pub score: Score,
    #[serde(default)]
    pub memo: String,
}

/// A feedback request addressed to the current employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: FeedbackId,
    /// The employee asked to give feedback.
    pub owner: Employee,
    pub review: ReviewSummary,
    /// `None` until the request has been answered.
    #[serde(rename = "reviewresponse", default)]
    pub answer: Option<FeedbackAnswer>,
}

impl Feedback {
    pub fn is_answered(&self) -> bool {
        self.answer.is_some()
    }
}

impl Entity for Feedback {
    type Id = FeedbackId;

    fn id(&self) -> FeedbackId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNANSWERED: &str = r#"{
        "id": 11,
        "owner": {"id": 2, "username": "ana", "email": "ana@corp.test", "is_admin": false},
        "review": {
            "id": 3,
            "title": "Annual",
            "owner": {"id": 1, "username": "boss", "email": "", "is_admin": true}
        },
        "reviewresponse": null
    }"#;

    #[test]
    fn unanswered_feedback_has_no_answer() {
        let feedback: Feedback = serde_json::from_str(UNANSWERED).unwrap();
        assert_eq!(feedback.id(), FeedbackId::new(11));
        assert!(!feedback.is_answered());
        assert_eq!(feedback.review.title, "Annual");
    }

    #[test]
    fn answered_feedback_carries_score_and_memo() {
        let json = UNANSWERED.replace(
            r#""reviewresponse": null"#,
            r#""reviewresponse": {"id": 1, "request": 11, "score": 90, "memo": "solid"}"#,
        );
        let feedback: Feedback = serde_json::from_str(&json).unwrap();

        let answer = feedback.answer.unwrap();
        assert_eq!(answer.score.value(), 90);
        assert_eq!(answer.memo, "solid");
    }
}
