//! Request and response bodies of the review service.
//!
//! Entity responses deserialize straight into the domain records; only the
//! request bodies and the token exchange need their own shapes.

use serde::{Deserialize, Serialize};

use crate::domain::employee::Employee;
use crate::domain::foundation::{EmployeeId, Score};

#[derive(Debug, Serialize)]
pub struct CredentialsRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub token: String,
    pub user: Employee,
}

#[derive(Debug, Serialize)]
pub struct UpdateEmployeeRequest<'a> {
    pub email: &'a str,
}

#[derive(Debug, Serialize)]
pub struct CreateReviewRequest<'a> {
    pub owner: EmployeeId,
    pub title: &'a str,
}

#[derive(Debug, Serialize)]
pub struct UpdateReviewRequest<'a> {
    pub title: &'a str,
}

#[derive(Debug, Serialize)]
pub struct InviteRequest<'a> {
    pub participants: &'a [EmployeeId],
}

#[derive(Debug, Serialize)]
pub struct UpdateFeedbackRequest<'a> {
    pub score: Score,
    pub memo: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn invite_request_sends_bare_ids() {
        let ids = [EmployeeId::new(3), EmployeeId::new(8)];
        let body = serde_json::to_value(InviteRequest { participants: &ids }).unwrap();

        assert_eq!(body, json!({"participants": [3, 8]}));
    }

    #[test]
    fn feedback_answer_sends_numeric_score() {
        let body = serde_json::to_value(UpdateFeedbackRequest {
            score: Score::try_new(75).unwrap(),
            memo: "solid quarter",
        })
        .unwrap();

        assert_eq!(body, json!({"score": 75, "memo": "solid quarter"}));
    }

    #[test]
    fn token_response_carries_user() {
        let json = r#"{"token": "abc", "user": {"id": 1, "username": "root", "email": "", "is_admin": true}}"#;
        let response: TokenResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.token, "abc");
        assert!(response.user.is_admin);
    }
}
