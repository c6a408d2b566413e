//! Mock remote client for testing.
//!
//! Implements every Remote Resource Client port against in-memory records,
//! so stores can be exercised without a review service.
//!
//! # Features
//!
//! - Seeded employees, reviews and feedback requests
//! - Auto-incrementing IDs for created records
//! - Per-operation call counters
//! - Error injection for failure paths
//! - One cooperative yield per call (plus an optional delay) so concurrent
//!   operations interleave deterministically
//!
//! # Example
//!
//! ```ignore
//! let client = MockRemoteClient::new()
//!     .with_employees(vec![Employee::new(EmployeeId::new(1), "root", "")])
//!     .with_password("root", "secret");
//!
//! let context = ClientContext::from_client(Arc::new(client));
//! ```

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::domain::employee::Employee;
use crate::domain::feedback::{Feedback, FeedbackAnswer};
use crate::domain::foundation::{EmployeeId, FeedbackId, RemoteError, ReviewId, Score};
use crate::domain::review::{Review, ReviewParticipant, ReviewSummary};
use crate::ports::{EmployeeApi, FeedbackApi, ReviewApi, SessionApi};

#[derive(Debug, Default)]
struct Records {
    employees: Vec<Employee>,
    passwords: HashMap<String, String>,
    reviews: Vec<Review>,
    invited: HashMap<ReviewId, HashSet<EmployeeId>>,
    feedbacks: Vec<Feedback>,
    signed_in: Option<EmployeeId>,
}

impl Records {
    fn employee(&self, id: EmployeeId) -> Result<&Employee, RemoteError> {
        self.employees
            .iter()
            .find(|employee| employee.id == id)
            .ok_or_else(not_found)
    }

    fn review_mut(&mut self, id: ReviewId) -> Result<&mut Review, RemoteError> {
        self.reviews
            .iter_mut()
            .find(|review| review.id == id)
            .ok_or_else(not_found)
    }

    /// Recomputes a review's aggregates from its feedback requests.
    fn refresh_review(&mut self, id: ReviewId) {
        let related: Vec<&Feedback> = self
            .feedbacks
            .iter()
            .filter(|feedback| feedback.review.id == id)
            .collect();
        let scores: Vec<f64> = related
            .iter()
            .filter_map(|feedback| feedback.answer.as_ref())
            .map(|answer| f64::from(answer.score.value()))
            .collect();
        let requested = related.len() as u32;
        let responsed = scores.len() as u32;
        let score = if scores.is_empty() {
            0.0
        } else {
            scores.iter().sum::<f64>() / scores.len() as f64
        };

        if let Some(review) = self.reviews.iter_mut().find(|review| review.id == id) {
            review.requested = requested;
            review.responsed = responsed;
            review.score = score;
        }
    }
}

fn not_found() -> RemoteError {
    RemoteError::unexpected_status(404, "Not Found")
}

fn next_id(ids: impl Iterator<Item = i64>) -> i64 {
    ids.max().unwrap_or(0) + 1
}

/// Mock Remote Resource Client for testing.
#[derive(Debug, Default)]
pub struct MockRemoteClient {
    records: Mutex<Records>,
    /// Optional error returned by every call (for error testing)
    force_error: Mutex<Option<RemoteError>>,
    calls: Mutex<HashMap<&'static str, usize>>,
    delay: Option<Duration>,
}

impl MockRemoteClient {
    /// Creates an empty mock client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the employee list.
    pub fn with_employees(self, employees: Vec<Employee>) -> Self {
        self.records().employees = employees;
        self
    }

    /// Seeds the review list.
    pub fn with_reviews(self, reviews: Vec<Review>) -> Self {
        self.records().reviews = reviews;
        self
    }

    /// Seeds the feedback requests.
    pub fn with_feedbacks(self, feedbacks: Vec<Feedback>) -> Self {
        self.records().feedbacks = feedbacks;
        self
    }

    /// Lets `username` sign in with `password`.
    pub fn with_password(self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.records().passwords.insert(username.into(), password.into());
        self
    }

    /// Starts signed in as `id`, as if a token had been stored by a previous run.
    pub fn signed_in_as(self, id: EmployeeId) -> Self {
        self.records().signed_in = Some(id);
        self
    }

    /// Delays every call by `delay` after its yield.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Forces all calls to return the specified error.
    pub fn with_error(self, error: RemoteError) -> Self {
        self.fail_with(error);
        self
    }

    /// Forces all subsequent calls to fail with `error`.
    pub fn fail_with(&self, error: RemoteError) {
        *lock(&self.force_error) = Some(error);
    }

    /// Clears the forced error and returns to normal operation.
    pub fn clear_error(&self) {
        *lock(&self.force_error) = None;
    }

    /// Number of times `operation` was invoked, failed calls included.
    pub fn calls(&self, operation: &str) -> usize {
        lock(&self.calls).get(operation).copied().unwrap_or(0)
    }

    /// Total number of calls across every operation.
    pub fn total_calls(&self) -> usize {
        lock(&self.calls).values().sum()
    }

    /// Current server-side employee records.
    pub fn employees(&self) -> Vec<Employee> {
        self.records().employees.clone()
    }

    /// Current server-side review records.
    pub fn reviews(&self) -> Vec<Review> {
        self.records().reviews.clone()
    }

    /// Current server-side feedback records.
    pub fn feedbacks(&self) -> Vec<Feedback> {
        self.records().feedbacks.clone()
    }

    fn records(&self) -> MutexGuard<'_, Records> {
        lock(&self.records)
    }

    /// Counts the call, yields once, then applies the forced error if any.
    async fn enter(&self, operation: &'static str) -> Result<(), RemoteError> {
        *lock(&self.calls).entry(operation).or_insert(0) += 1;
        tokio::task::yield_now().await;
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match lock(&self.force_error).clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[async_trait]
impl EmployeeApi for MockRemoteClient {
    async fn list_employees(&self) -> Result<Vec<Employee>, RemoteError> {
        self.enter("list_employees").await?;
        Ok(self.records().employees.clone())
    }

    async fn create_employee(
        &self,
        username: &str,
        password: &SecretString,
    ) -> Result<Employee, RemoteError> {
        self.enter("create_employee").await?;
        let mut records = self.records();
        if records.employees.iter().any(|employee| employee.username == username) {
            return Err(RemoteError::unexpected_status(400, "Bad Request"));
        }

        let id = EmployeeId::new(next_id(records.employees.iter().map(|e| e.id.get())));
        let employee = Employee::new(id, username, "");
        records.employees.push(employee.clone());
        records
            .passwords
            .insert(username.to_string(), password.expose_secret().clone());
        Ok(employee)
    }

    async fn update_employee(&self, id: EmployeeId, email: &str) -> Result<Employee, RemoteError> {
        self.enter("update_employee").await?;
        let mut records = self.records();
        let employee = records
            .employees
            .iter_mut()
            .find(|employee| employee.id == id)
            .ok_or_else(not_found)?;
        employee.email = email.to_string();
        Ok(employee.clone())
    }

    async fn delete_employee(&self, id: EmployeeId) -> Result<(), RemoteError> {
        self.enter("delete_employee").await?;
        let mut records = self.records();
        let before = records.employees.len();
        records.employees.retain(|employee| employee.id != id);
        if records.employees.len() == before {
            return Err(not_found());
        }
        Ok(())
    }

    async fn fetch_self(&self) -> Result<Employee, RemoteError> {
        self.enter("fetch_self").await?;
        let records = self.records();
        let id = records
            .signed_in
            .ok_or_else(|| RemoteError::unexpected_status(401, "Unauthorized"))?;
        records.employee(id).cloned()
    }
}

#[async_trait]
impl ReviewApi for MockRemoteClient {
    async fn list_reviews(&self, owner: EmployeeId) -> Result<Vec<Review>, RemoteError> {
        self.enter("list_reviews").await?;
        Ok(self
            .records()
            .reviews
            .iter()
            .filter(|review| review.owner == owner)
            .cloned()
            .collect())
    }

    async fn create_review(&self, owner: EmployeeId, title: &str) -> Result<Review, RemoteError> {
        self.enter("create_review").await?;
        let mut records = self.records();
        records.employee(owner)?;

        let id = ReviewId::new(next_id(records.reviews.iter().map(|r| r.id.get())));
        let review = Review::new(id, owner, title);
        records.reviews.push(review.clone());
        Ok(review)
    }

    async fn update_review(&self, id: ReviewId, title: &str) -> Result<Review, RemoteError> {
        self.enter("update_review").await?;
        let mut records = self.records();
        let review = records.review_mut(id)?;
        review.title = title.to_string();
        Ok(review.clone())
    }

    async fn list_participants(&self, id: ReviewId) -> Result<Vec<ReviewParticipant>, RemoteError> {
        self.enter("list_participants").await?;
        let mut records = self.records();
        let owner = records.review_mut(id)?.owner;
        let invited = records.invited.get(&id).cloned().unwrap_or_default();

        Ok(records
            .employees
            .iter()
            .filter(|employee| employee.id != owner)
            .map(|employee| ReviewParticipant {
                employee: employee.clone(),
                requested: invited.contains(&employee.id),
            })
            .collect())
    }

    async fn invite(&self, id: ReviewId, participants: &[EmployeeId]) -> Result<(), RemoteError> {
        self.enter("invite").await?;
        let mut records = self.records();
        let review = records.review_mut(id)?.clone();
        let owner = records.employee(review.owner)?.clone();
        let invitees = participants
            .iter()
            .map(|participant| records.employee(*participant).cloned())
            .collect::<Result<Vec<_>, _>>()?;

        for invitee in invitees {
            let newly_invited = records.invited.entry(id).or_default().insert(invitee.id);
            if !newly_invited {
                continue;
            }
            let feedback_id =
                FeedbackId::new(next_id(records.feedbacks.iter().map(|f| f.id.get())));
            records.feedbacks.push(Feedback {
                id: feedback_id,
                owner: invitee,
                review: ReviewSummary {
                    id,
                    owner: owner.clone(),
                    title: review.title.clone(),
                },
                answer: None,
            });
        }
        records.refresh_review(id);
        Ok(())
    }
}

#[async_trait]
impl FeedbackApi for MockRemoteClient {
    async fn list_feedbacks(&self) -> Result<Vec<Feedback>, RemoteError> {
        self.enter("list_feedbacks").await?;
        let records = self.records();
        Ok(records
            .feedbacks
            .iter()
            .filter(|feedback| records.signed_in.map_or(true, |me| feedback.owner.id == me))
            .cloned()
            .collect())
    }

    async fn update_feedback(
        &self,
        id: FeedbackId,
        score: Score,
        memo: &str,
    ) -> Result<Feedback, RemoteError> {
        self.enter("update_feedback").await?;
        let mut records = self.records();
        let feedback = records
            .feedbacks
            .iter_mut()
            .find(|feedback| feedback.id == id)
            .ok_or_else(not_found)?;
        feedback.answer = Some(FeedbackAnswer {
            score,
            memo: memo.to_string(),
        });
        let updated = feedback.clone();
        records.refresh_review(updated.review.id);
        Ok(updated)
    }
}

#[async_trait]
impl SessionApi for MockRemoteClient {
    async fn login(&self, username: &str, password: &SecretString) -> Result<Employee, RemoteError> {
        self.enter("login").await?;
        let mut records = self.records();
        let accepted = records
            .passwords
            .get(username)
            .map_or(false, |expected| expected == password.expose_secret());
        let employee = records
            .employees
            .iter()
            .find(|employee| employee.username == username)
            .cloned()
            .filter(|_| accepted)
            .ok_or_else(|| RemoteError::unexpected_status(400, "Bad Request"))?;

        records.signed_in = Some(employee.id);
        Ok(employee)
    }

    fn logout(&self) {
        *lock(&self.calls).entry("logout").or_insert(0) += 1;
        self.records().signed_in = None;
    }

    fn is_authenticated(&self) -> bool {
        self.records().signed_in.is_some()
    }
}
