//! HttpRemoteClient - Implementation of the remote ports over the REST API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = HttpClientConfig::new("https://reviews.corp.example")
//!     .with_timeout(Duration::from_secs(10));
//!
//! let client = HttpRemoteClient::new(config, Arc::new(InMemoryCredentialStore::new()))?;
//! ```
//!
//! # Authentication
//!
//! The API token is loaded from the credential store when the client is
//! built and cached in memory. Every request after that carries
//! `Authorization: Token <token>`. Login replaces the token, logout forgets it.

use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::domain::employee::Employee;
use crate::domain::feedback::Feedback;
use crate::domain::foundation::{EmployeeId, FeedbackId, RemoteError, ReviewId, Score};
use crate::domain::review::{Review, ReviewParticipant};
use crate::ports::{CredentialStore, EmployeeApi, FeedbackApi, ReviewApi, SessionApi};

use super::dto::{
    CreateReviewRequest, CredentialsRequest, InviteRequest, TokenResponse, UpdateEmployeeRequest,
    UpdateFeedbackRequest, UpdateReviewRequest,
};

/// Configuration for the HTTP client.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Service root, without the `/api/v1` prefix.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl HttpClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl From<&ApiConfig> for HttpClientConfig {
    fn from(config: &ApiConfig) -> Self {
        Self::new(config.base_url.clone()).with_timeout(config.request_timeout())
    }
}

/// Review service client.
pub struct HttpRemoteClient {
    config: HttpClientConfig,
    client: Client,
    credentials: Arc<dyn CredentialStore>,
    token: RwLock<Option<SecretString>>,
}

impl HttpRemoteClient {
    /// Builds a client, picking up any token already in `credentials`.
    pub fn new(
        config: HttpClientConfig,
        credentials: Arc<dyn CredentialStore>,
    ) -> Result<Self, RemoteError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| RemoteError::network(format!("Failed to create HTTP client: {}", e)))?;

        let token = credentials
            .load()
            .map_err(|e| RemoteError::Credentials(e.to_string()))?;
        tracing::debug!(base_url = %config.base_url, authenticated = token.is_some(), "http client ready");

        Ok(Self {
            config,
            client,
            credentials,
            token: RwLock::new(token),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/v1/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Starts a request, attaching the cached token when there is one.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.client.request(method, self.url(path));
        let token = self.token.read().unwrap_or_else(PoisonError::into_inner);
        match token.as_ref() {
            Some(token) => builder.header(AUTHORIZATION, format!("Token {}", token.expose_secret())),
            None => builder,
        }
    }

    /// Sends the request and insists on `expected` as the response status.
    async fn send(&self, builder: RequestBuilder, expected: StatusCode) -> Result<Response, RemoteError> {
        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                RemoteError::network(format!(
                    "Request timed out after {}s",
                    self.config.timeout.as_secs()
                ))
            } else {
                RemoteError::network(e.to_string())
            }
        })?;

        check_status(response.status(), expected)?;
        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        expected: StatusCode,
    ) -> Result<T, RemoteError> {
        let response = self.send(builder, expected).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| RemoteError::decode(format!("Failed to parse response: {}", e)))
    }

    fn set_token(&self, token: Option<SecretString>) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = token;
    }
}

/// Maps any status other than `expected` to [`RemoteError::UnexpectedStatus`].
fn check_status(status: StatusCode, expected: StatusCode) -> Result<(), RemoteError> {
    if status == expected {
        return Ok(());
    }
    Err(RemoteError::unexpected_status(
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown status"),
    ))
}

#[async_trait]
impl EmployeeApi for HttpRemoteClient {
    async fn list_employees(&self) -> Result<Vec<Employee>, RemoteError> {
        self.send_json(self.request(Method::GET, "employees/"), StatusCode::OK)
            .await
    }

    async fn create_employee(
        &self,
        username: &str,
        password: &SecretString,
    ) -> Result<Employee, RemoteError> {
        let body = CredentialsRequest {
            username,
            password: password.expose_secret(),
        };
        self.send_json(
            self.request(Method::POST, "employees/").json(&body),
            StatusCode::CREATED,
        )
        .await
    }

    async fn update_employee(&self, id: EmployeeId, email: &str) -> Result<Employee, RemoteError> {
        self.send_json(
            self.request(Method::PUT, &format!("employees/{}/", id))
                .json(&UpdateEmployeeRequest { email }),
            StatusCode::OK,
        )
        .await
    }

    async fn delete_employee(&self, id: EmployeeId) -> Result<(), RemoteError> {
        self.send(
            self.request(Method::DELETE, &format!("employees/{}/", id)),
            StatusCode::NO_CONTENT,
        )
        .await?;
        Ok(())
    }

    async fn fetch_self(&self) -> Result<Employee, RemoteError> {
        self.send_json(self.request(Method::GET, "employees/:self"), StatusCode::OK)
            .await
    }
}

#[async_trait]
impl ReviewApi for HttpRemoteClient {
    async fn list_reviews(&self, owner: EmployeeId) -> Result<Vec<Review>, RemoteError> {
        self.send_json(
            self.request(Method::GET, "reviews/")
                .query(&[("user", owner.get())]),
            StatusCode::OK,
        )
        .await
    }

    async fn create_review(&self, owner: EmployeeId, title: &str) -> Result<Review, RemoteError> {
        self.send_json(
            self.request(Method::POST, "reviews/")
                .json(&CreateReviewRequest { owner, title }),
            StatusCode::CREATED,
        )
        .await
    }

    async fn update_review(&self, id: ReviewId, title: &str) -> Result<Review, RemoteError> {
        self.send_json(
            self.request(Method::PUT, &format!("reviews/{}/", id))
                .json(&UpdateReviewRequest { title }),
            StatusCode::OK,
        )
        .await
    }

    async fn list_participants(&self, id: ReviewId) -> Result<Vec<ReviewParticipant>, RemoteError> {
        self.send_json(
            self.request(Method::GET, &format!("reviews/{}/:employees", id)),
            StatusCode::OK,
        )
        .await
    }

    async fn invite(&self, id: ReviewId, participants: &[EmployeeId]) -> Result<(), RemoteError> {
        self.send(
            self.request(Method::POST, &format!("reviews/{}/:invite", id))
                .json(&InviteRequest { participants }),
            StatusCode::CREATED,
        )
        .await?;
        Ok(())
    }
}

#[async_trait]
impl FeedbackApi for HttpRemoteClient {
    async fn list_feedbacks(&self) -> Result<Vec<Feedback>, RemoteError> {
        self.send_json(self.request(Method::GET, "feedbacks/"), StatusCode::OK)
            .await
    }

    async fn update_feedback(
        &self,
        id: FeedbackId,
        score: Score,
        memo: &str,
    ) -> Result<Feedback, RemoteError> {
        self.send_json(
            self.request(Method::PATCH, &format!("feedbacks/{}/", id))
                .json(&UpdateFeedbackRequest { score, memo }),
            StatusCode::OK,
        )
        .await
    }
}

#[async_trait]
impl SessionApi for HttpRemoteClient {
    async fn login(&self, username: &str, password: &SecretString) -> Result<Employee, RemoteError> {
        let body = CredentialsRequest {
            username,
            password: password.expose_secret(),
        };
        let response: TokenResponse = self
            .send_json(
                self.client.post(self.url("tokens/")).json(&body),
                StatusCode::OK,
            )
            .await?;

        let token = SecretString::new(response.token);
        self.credentials
            .save(&token)
            .map_err(|e| RemoteError::Credentials(e.to_string()))?;
        self.set_token(Some(token));

        tracing::info!(user = %response.user.username, "signed in");
        Ok(response.user)
    }

    fn logout(&self) {
        self.set_token(None);
        if let Err(e) = self.credentials.clear() {
            tracing::warn!(error = %e, "failed to clear stored credential");
        }
    }

    fn is_authenticated(&self) -> bool {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

impl std::fmt::Debug for HttpRemoteClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpRemoteClient")
            .field("config", &self.config)
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::credentials::InMemoryCredentialStore;

    fn client(store: InMemoryCredentialStore) -> HttpRemoteClient {
        HttpRemoteClient::new(
            HttpClientConfig::new("http://localhost:8000/"),
            Arc::new(store),
        )
        .unwrap()
    }

    #[test]
    fn config_builder_works() {
        let config = HttpClientConfig::new("http://reviews.test").with_timeout(Duration::from_secs(5));

        assert_eq!(config.base_url, "http://reviews.test");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn url_joins_api_prefix_without_double_slash() {
        let client = client(InMemoryCredentialStore::new());

        assert_eq!(client.url("employees/"), "http://localhost:8000/api/v1/employees/");
        assert_eq!(
            client.url("reviews/4/:invite"),
            "http://localhost:8000/api/v1/reviews/4/:invite"
        );
    }

    #[test]
    fn matching_status_passes() {
        assert!(check_status(StatusCode::CREATED, StatusCode::CREATED).is_ok());
    }

    #[test]
    fn other_success_status_is_still_unexpected() {
        let err = check_status(StatusCode::OK, StatusCode::CREATED).unwrap_err();

        assert_eq!(err, RemoteError::unexpected_status(200, "OK"));
    }

    #[test]
    fn error_status_carries_reason_phrase() {
        let err = check_status(StatusCode::FORBIDDEN, StatusCode::OK).unwrap_err();

        assert_eq!(err, RemoteError::unexpected_status(403, "Forbidden"));
    }

    #[test]
    fn stored_token_authenticates_new_client() {
        let client = client(InMemoryCredentialStore::with_token("abc"));

        assert!(client.is_authenticated());
    }

    #[test]
    fn logout_forgets_cached_and_stored_token() {
        let store = InMemoryCredentialStore::with_token("abc");
        let client = client(store.clone());

        client.logout();

        assert!(!client.is_authenticated());
        assert!(!store.is_set());
    }

    #[test]
    fn request_carries_token_header() {
        let client = client(InMemoryCredentialStore::with_token("abc"));

        let request = client.request(Method::GET, "feedbacks/").build().unwrap();

        assert_eq!(
            request.headers().get(AUTHORIZATION).unwrap(),
            "Token abc"
        );
    }

    #[test]
    fn request_without_token_has_no_header() {
        let client = client(InMemoryCredentialStore::new());

        let request = client.request(Method::GET, "feedbacks/").build().unwrap();

        assert!(request.headers().get(AUTHORIZATION).is_none());
    }

    #[tokio::test]
    async fn unreachable_service_is_a_network_error() {
        let client = HttpRemoteClient::new(
            HttpClientConfig::new("http://127.0.0.1:9").with_timeout(Duration::from_secs(2)),
            Arc::new(InMemoryCredentialStore::new()),
        )
        .unwrap();

        let result = client.list_employees().await;

        assert!(matches!(result, Err(RemoteError::Network(_))));
    }
}
