//! Integration tests for the resource stores.
//!
//! Drives the employee, review and feedback stores through the mock remote
//! client and checks the guarantees consumers rely on:
//! 1. At most one operation per store reaches the remote service at a time
//! 2. Successful responses are normalized into `id_list` + `entity_dict`
//! 3. Failures clear `is_fetching` and keep the last known good data
//! 4. Store handles are unusable once their scope has exited

use std::sync::Arc;
use std::time::Duration;

use secrecy::SecretString;

use review_console::adapters::MockRemoteClient;
use review_console::application::{
    ClientContext, Dispatch, EmployeeStore, FeedbackStore, ReviewStore, ScopeHandle,
};
use review_console::domain::employee::Employee;
use review_console::domain::foundation::{EmployeeId, FeedbackId, RemoteError, ReviewId, Score};
use review_console::domain::review::Review;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn employee(id: i64, username: &str) -> Employee {
    Employee::new(EmployeeId::new(id), username, format!("{}@corp.test", username))
}

fn staff() -> Vec<Employee> {
    vec![employee(1, "boss").admin(), employee(2, "ana")]
}

fn setup(client: MockRemoteClient) -> (Arc<MockRemoteClient>, ClientContext) {
    let client = Arc::new(client);
    let context = ClientContext::from_client(Arc::clone(&client));
    (client, context)
}

fn ids(raw: &[i64]) -> Vec<EmployeeId> {
    raw.iter().copied().map(EmployeeId::new).collect()
}

// =============================================================================
// Single-flight guard
// =============================================================================

#[tokio::test]
async fn concurrent_fetches_reach_remote_once() {
    let (client, context) = setup(MockRemoteClient::new().with_employees(staff()));
    let scope = context.enter::<EmployeeStore>();
    let actions = scope.actions();

    let (first, second, third) = tokio::join!(
        actions.fetch_employee_list(),
        actions.fetch_employee_list(),
        actions.fetch_employee_list(),
    );

    assert_eq!(first, Dispatch::Completed);
    assert_eq!(second, Dispatch::Busy);
    assert_eq!(third, Dispatch::Busy);
    assert_eq!(client.calls("list_employees"), 1);
    assert_eq!(scope.state().snapshot().id_list(), ids(&[1, 2]).as_slice());
}

#[tokio::test]
async fn mutation_during_fetch_is_dropped() {
    let (client, context) = setup(MockRemoteClient::new().with_employees(staff()));
    let scope = context.enter::<EmployeeStore>();
    let actions = scope.actions();

    let (fetched, deleted) = tokio::join!(
        actions.fetch_employee_list(),
        actions.delete_employee(EmployeeId::new(2)),
    );

    assert_eq!(fetched, Dispatch::Completed);
    assert_eq!(deleted, Dispatch::Busy);
    assert_eq!(client.calls("delete_employee"), 0);
    assert!(scope.state().snapshot().contains(&EmployeeId::new(2)));
}

#[tokio::test]
async fn sequential_calls_are_each_dispatched() {
    let (client, context) = setup(MockRemoteClient::new().with_employees(staff()));
    let scope = context.enter::<EmployeeStore>();
    let actions = scope.actions();

    assert!(actions.fetch_employee_list().await.is_completed());
    assert!(actions.fetch_employee_list().await.is_completed());

    assert_eq!(client.calls("list_employees"), 2);
}

#[tokio::test]
async fn separate_stores_run_side_by_side() {
    let (client, context) = setup(
        MockRemoteClient::new()
            .with_employees(staff())
            .with_reviews(vec![Review::new(ReviewId::new(1), EmployeeId::new(2), "Q1")]),
    );
    let employees = context.enter::<EmployeeStore>();
    let reviews = context.enter::<ReviewStore>();

    let (employee_actions, review_actions) = (employees.actions(), reviews.actions());

    let (employee_outcome, review_outcome) = tokio::join!(
        employee_actions.fetch_employee_list(),
        review_actions.fetch_review_list(EmployeeId::new(2)),
    );

    assert_eq!(employee_outcome, Dispatch::Completed);
    assert_eq!(review_outcome, Dispatch::Completed);
    assert_eq!(client.total_calls(), 2);
}

#[tokio::test]
async fn state_can_be_read_in_place() {
    let (_client, context) = setup(MockRemoteClient::new().with_employees(staff()));
    let scope = context.enter::<EmployeeStore>();
    scope.actions().fetch_employee_list().await;

    let (count, first) = scope.state().read(|state| {
        (state.id_list().len(), state.get(&EmployeeId::new(1)).map(|e| e.username.clone()))
    });

    assert_eq!(count, 2);
    assert_eq!(first.as_deref(), Some("boss"));
}

// =============================================================================
// Normalized results
// =============================================================================

#[tokio::test]
async fn fetch_populates_empty_store() {
    let (_client, context) = setup(MockRemoteClient::new().with_employees(staff()));
    let scope = context.enter::<EmployeeStore>();

    let outcome = scope.actions().fetch_employee_list().await;

    let state = scope.state().snapshot();
    assert_eq!(outcome, Dispatch::Completed);
    assert!(!state.is_fetching());
    assert_eq!(state.id_list(), ids(&[1, 2]).as_slice());
    assert_eq!(state.get(&EmployeeId::new(1)).unwrap().username, "boss");
    assert_eq!(state.get(&EmployeeId::new(2)).unwrap().username, "ana");
    assert!(state.is_consistent());
}

#[tokio::test]
async fn create_appends_new_employee_last() {
    let (_client, context) = setup(MockRemoteClient::new().with_employees(staff()));
    let scope = context.enter::<EmployeeStore>();
    let actions = scope.actions();
    actions.fetch_employee_list().await;

    let outcome = actions
        .create_employee("aaron", &SecretString::new("pw".to_string()))
        .await;

    let state = scope.state().snapshot();
    assert_eq!(outcome, Dispatch::Completed);
    assert_eq!(state.id_list(), ids(&[1, 2, 3]).as_slice());
    assert_eq!(state.get(&EmployeeId::new(3)).unwrap().username, "aaron");
    assert!(state.is_consistent());
}

#[tokio::test]
async fn update_replaces_record_in_place() {
    let (_client, context) = setup(MockRemoteClient::new().with_employees(staff()));
    let scope = context.enter::<EmployeeStore>();
    let actions = scope.actions();
    actions.fetch_employee_list().await;

    let outcome = actions
        .update_employee(EmployeeId::new(1), "chief@corp.test")
        .await;

    let state = scope.state().snapshot();
    assert_eq!(outcome, Dispatch::Completed);
    assert_eq!(state.id_list(), ids(&[1, 2]).as_slice());
    assert_eq!(state.get(&EmployeeId::new(1)).unwrap().email, "chief@corp.test");
}

#[tokio::test]
async fn delete_removes_only_entity() {
    let (_client, context) =
        setup(MockRemoteClient::new().with_employees(vec![employee(1, "solo")]));
    let scope = context.enter::<EmployeeStore>();
    let actions = scope.actions();
    actions.fetch_employee_list().await;

    let outcome = actions.delete_employee(EmployeeId::new(1)).await;

    let state = scope.state().snapshot();
    assert_eq!(outcome, Dispatch::Completed);
    assert!(state.id_list().is_empty());
    assert!(state.get(&EmployeeId::new(1)).is_none());
}

#[tokio::test]
async fn delete_then_fetch_keeps_id_absent() {
    let (_client, context) = setup(MockRemoteClient::new().with_employees(staff()));
    let scope = context.enter::<EmployeeStore>();
    let actions = scope.actions();
    actions.fetch_employee_list().await;

    actions.delete_employee(EmployeeId::new(2)).await;
    actions.fetch_employee_list().await;

    let state = scope.state().snapshot();
    assert_eq!(state.id_list(), ids(&[1]).as_slice());
    assert!(!state.entity_dict().contains_key(&EmployeeId::new(2)));
}

// =============================================================================
// Failure handling
// =============================================================================

#[tokio::test]
async fn failed_create_leaves_list_untouched() {
    let (client, context) = setup(MockRemoteClient::new().with_employees(staff()));
    let scope = context.enter::<EmployeeStore>();
    let actions = scope.actions();
    actions.fetch_employee_list().await;
    let before = scope.state().snapshot();

    client.fail_with(RemoteError::unexpected_status(500, "Internal Server Error"));
    let outcome = actions
        .create_employee("zoe", &SecretString::new("pw".to_string()))
        .await;

    let after = scope.state().snapshot();
    assert_eq!(outcome, Dispatch::Failed);
    assert!(!after.is_fetching());
    assert_eq!(after, before);
}

#[tokio::test]
async fn failed_fetch_keeps_last_known_good_list() {
    let (client, context) = setup(MockRemoteClient::new().with_employees(staff()));
    let scope = context.enter::<EmployeeStore>();
    let actions = scope.actions();
    actions.fetch_employee_list().await;

    client.fail_with(RemoteError::network("connection reset"));
    let outcome = actions.fetch_employee_list().await;

    let state = scope.state().snapshot();
    assert_eq!(outcome, Dispatch::Failed);
    assert!(!state.is_fetching());
    assert_eq!(state.len(), 2);
}

#[tokio::test]
async fn store_accepts_calls_again_after_failure() {
    let (client, context) = setup(
        MockRemoteClient::new()
            .with_employees(staff())
            .with_error(RemoteError::network("down")),
    );
    let scope = context.enter::<EmployeeStore>();
    let actions = scope.actions();

    assert_eq!(actions.fetch_employee_list().await, Dispatch::Failed);
    client.clear_error();
    assert_eq!(actions.fetch_employee_list().await, Dispatch::Completed);

    assert_eq!(scope.state().snapshot().len(), 2);
}

#[tokio::test]
async fn delete_of_unknown_id_fails_without_change() {
    let (_client, context) = setup(MockRemoteClient::new().with_employees(staff()));
    let scope = context.enter::<EmployeeStore>();
    let actions = scope.actions();
    actions.fetch_employee_list().await;

    let outcome = actions.delete_employee(EmployeeId::new(42)).await;

    assert_eq!(outcome, Dispatch::Failed);
    assert_eq!(scope.state().snapshot().len(), 2);
}

// =============================================================================
// Store scope
// =============================================================================

#[tokio::test]
async fn late_response_after_scope_exit_is_ignored() {
    let (client, context) = setup(
        MockRemoteClient::new()
            .with_employees(staff())
            .with_delay(Duration::from_millis(50)),
    );
    let scope = context.enter::<EmployeeStore>();
    let actions = scope.actions();

    let pending = tokio::spawn(async move { actions.fetch_employee_list().await });
    tokio::time::sleep(Duration::from_millis(10)).await;
    drop(scope);

    assert_eq!(pending.await.unwrap(), Dispatch::Closed);
    assert_eq!(client.calls("list_employees"), 1);
}

#[tokio::test]
async fn actions_after_scope_exit_do_nothing() {
    let (client, context) = setup(MockRemoteClient::new().with_employees(staff()));
    let scope = context.enter::<EmployeeStore>();
    let actions = scope.actions();
    drop(scope);

    assert_eq!(actions.fetch_employee_list().await, Dispatch::Closed);
    assert_eq!(client.total_calls(), 0);
}

#[tokio::test]
async fn state_handle_sees_transitions() {
    let (_client, context) = setup(MockRemoteClient::new().with_employees(staff()));
    let scope = context.enter::<EmployeeStore>();
    let mut state = scope.state();

    let actions = scope.actions();
    let fetch = tokio::spawn(async move { actions.fetch_employee_list().await });

    let loaded = state.wait_for(|s| !s.is_fetching() && s.len() == 2).await;
    assert!(loaded.is_some());
    assert_eq!(fetch.await.unwrap(), Dispatch::Completed);
}

#[tokio::test]
async fn each_scope_starts_empty() {
    let (_client, context) = setup(MockRemoteClient::new().with_employees(staff()));
    {
        let scope = context.enter::<EmployeeStore>();
        scope.actions().fetch_employee_list().await;
        assert_eq!(scope.state().snapshot().len(), 2);
    }

    let fresh = context.enter::<EmployeeStore>();
    assert!(fresh.state().snapshot().is_empty());
}

#[test]
fn handle_is_active_while_scope_lives() {
    let (_client, context) = setup(MockRemoteClient::new());
    let scope = context.enter::<ReviewStore>();
    let handle = scope.handle();

    assert!(handle.is_active());
    assert!(handle.state().snapshot().is_empty());

    drop(scope);
    assert!(!handle.is_active());
}

#[test]
#[should_panic(expected = "employee store scope is not active")]
fn handle_after_scope_exit_panics() {
    let (_client, context) = setup(MockRemoteClient::new());
    let scope = context.enter::<EmployeeStore>();
    let handle = scope.handle();
    drop(scope);

    let _ = handle.actions();
}

#[test]
#[should_panic(expected = "feedback store scope is not active")]
fn detached_handle_panics() {
    let handle: ScopeHandle<FeedbackStore> = ScopeHandle::detached();

    let _ = handle.state();
}

// =============================================================================
// Reviews and feedback
// =============================================================================

#[tokio::test]
async fn reviews_are_listed_per_owner() {
    let (_client, context) = setup(
        MockRemoteClient::new().with_employees(staff()).with_reviews(vec![
            Review::new(ReviewId::new(1), EmployeeId::new(2), "Q1"),
            Review::new(ReviewId::new(2), EmployeeId::new(1), "Q1 lead"),
            Review::new(ReviewId::new(3), EmployeeId::new(2), "Q2"),
        ]),
    );
    let scope = context.enter::<ReviewStore>();
    let actions = scope.actions();

    actions.fetch_review_list(EmployeeId::new(2)).await;
    actions.create_review(EmployeeId::new(2), "Q3").await;
    actions.update_review(ReviewId::new(1), "Q1 (final)").await;

    let state = scope.state().snapshot();
    let titles: Vec<&str> = state.iter().map(|review| review.title.as_str()).collect();
    assert_eq!(titles, vec!["Q1 (final)", "Q2", "Q3"]);
}

#[tokio::test]
async fn invitations_bypass_the_review_list() {
    let (client, context) = setup(
        MockRemoteClient::new()
            .with_employees(vec![employee(1, "boss"), employee(2, "ana"), employee(3, "li")])
            .with_reviews(vec![Review::new(ReviewId::new(1), EmployeeId::new(1), "Annual")]),
    );
    let scope = context.enter::<ReviewStore>();
    let actions = scope.actions();
    actions.fetch_review_list(EmployeeId::new(1)).await;
    let before = scope.state().snapshot();

    let participants = actions
        .invite(ReviewId::new(1), &[EmployeeId::new(3)])
        .await
        .unwrap();

    let invited: Vec<(&str, bool)> = participants
        .iter()
        .map(|p| (p.employee.username.as_str(), p.requested))
        .collect();
    assert_eq!(invited, vec![("ana", false), ("li", true)]);
    assert_eq!(scope.state().snapshot(), before);
    assert_eq!(client.calls("list_participants"), 1);
}

#[tokio::test]
async fn participant_errors_reach_the_caller() {
    let (_client, context) = setup(MockRemoteClient::new());
    let scope = context.enter::<ReviewStore>();

    let result = scope.actions().list_participants(ReviewId::new(7)).await;

    assert_eq!(result, Err(RemoteError::unexpected_status(404, "Not Found")));
    assert!(!scope.state().snapshot().is_fetching());
}

#[tokio::test]
async fn answering_feedback_replaces_request() {
    let (client, context) = setup(
        MockRemoteClient::new()
            .with_employees(staff())
            .with_reviews(vec![Review::new(ReviewId::new(1), EmployeeId::new(1), "Annual")])
            .signed_in_as(EmployeeId::new(2)),
    );
    {
        let reviews = context.enter::<ReviewStore>();
        reviews
            .actions()
            .invite(ReviewId::new(1), &[EmployeeId::new(2)])
            .await
            .unwrap();
    }
    let scope = context.enter::<FeedbackStore>();
    let actions = scope.actions();
    actions.fetch_feedback_list().await;
    assert!(!scope.state().snapshot().get(&FeedbackId::new(1)).unwrap().is_answered());

    let score = Score::try_new(90).unwrap();
    let outcome = actions
        .update_feedback(FeedbackId::new(1), score, "great year")
        .await;

    let state = scope.state().snapshot();
    let answer = state.get(&FeedbackId::new(1)).unwrap().answer.clone().unwrap();
    assert_eq!(outcome, Dispatch::Completed);
    assert_eq!(answer.score, score);
    assert_eq!(answer.memo, "great year");
    assert_eq!(state.len(), 1);
    assert_eq!(client.reviews()[0].responsed, 1);
}
