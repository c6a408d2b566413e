//! Performance reviews and their participants.

use serde::{Deserialize, Serialize};

use crate::domain::employee::Employee;
use crate::domain::foundation::{EmployeeId, ReviewId};
use crate::domain::resource::Entity;

/// A performance review owned by the employee being reviewed.
///
/// `score` is the mean of all submitted feedback scores (0 when none),
/// `requested` and `responsed` count invitations sent and answered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub owner: EmployeeId,
    pub title: String,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub requested: u32,
    #[serde(default)]
    pub responsed: u32,
}

impl Review {
    pub fn new(id: ReviewId, owner: EmployeeId, title: impl Into<String>) -> Self {
        Self {
            id,
            owner,
            title: title.into(),
            score: 0.0,
            requested: 0,
            responsed: 0,
        }
    }

    /// Invitations not yet answered.
    pub fn pending(&self) -> u32 {
        self.requested.saturating_sub(self.responsed)
    }
}

impl Entity for Review {
    type Id = ReviewId;

    fn id(&self) -> ReviewId {
        self.id
    }
}

/// Short form of a review embedded in a feedback request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewSummary {
    pub id: ReviewId,
    pub owner: Employee,
    pub title: String,
}

/// An employee eligible to give feedback on a review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewParticipant {
    #[serde(flatten)]
    pub employee: Employee,
    /// Whether an invitation has already been sent.
    pub requested: bool,
}
