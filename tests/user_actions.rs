//! Action-layer tests: gateway results reduced to success flags, store
//! updated only by successful list responses.

mod common;

use std::time::Duration;

use common::mock_api::{MockApi, MockResponse};
use common::{records_json, test_actions, user};
use userdesk::model::UserStatus;
use userdesk::store::USER_COLLECTION;

#[tokio::test]
async fn list_replaces_store_snapshot() {
    let mock = MockApi::start().await;
    let records = vec![
        user("u1", "John", "Smith", UserStatus::Active),
        user("u2", "Ann", "Lee", UserStatus::Suspended),
    ];
    mock.enqueue_response(MockResponse::user_list(&records_json(&records)))
        .await;

    let (actions, store) = test_actions(&mock.base_url());
    assert!(actions.list().await);
    assert_eq!(store.snapshot(USER_COLLECTION), records);
}

#[tokio::test]
async fn list_twice_with_unchanged_remote_is_idempotent() {
    let mock = MockApi::start().await;
    let records = vec![user("u1", "John", "Smith", UserStatus::Active)];
    let payload = MockResponse::user_list(&records_json(&records));
    mock.enqueue_response(payload.clone()).await;
    mock.enqueue_response(payload).await;

    let (actions, store) = test_actions(&mock.base_url());
    assert!(actions.list().await);
    let first = store.snapshot(USER_COLLECTION);
    assert!(actions.list().await);
    let second = store.snapshot(USER_COLLECTION);
    assert_eq!(first, second);
}

#[tokio::test]
async fn failed_list_keeps_previous_snapshot() {
    let mock = MockApi::start().await;
    let records = vec![user("u1", "John", "Smith", UserStatus::Active)];
    mock.enqueue_response(MockResponse::user_list(&records_json(&records)))
        .await;
    mock.enqueue_response(MockResponse::error(500, "down")).await;

    let (actions, store) = test_actions(&mock.base_url());
    assert!(actions.list().await);
    assert!(!actions.list().await);
    // Stale-but-valid beats cleared.
    assert_eq!(store.snapshot(USER_COLLECTION), records);
}

#[tokio::test]
async fn timed_out_list_keeps_previous_snapshot() {
    let mock = MockApi::start().await;
    let records = vec![user("u1", "John", "Smith", UserStatus::Active)];
    mock.enqueue_response(MockResponse::user_list(&records_json(&records)))
        .await;
    mock.enqueue_response(MockResponse::user_list("[]").with_delay(2500))
        .await;

    let gateway = userdesk::gateway::ApiGateway::new(common::test_config(
        &mock.base_url(),
        2,
        "USERDESK_TEST_UNSET",
    ));
    let store = userdesk::store::EntityStore::new();
    let actions = userdesk::store::UserActions::new(gateway, store.clone());

    assert!(actions.list().await);
    assert!(!actions.list().await);
    assert_eq!(store.snapshot(USER_COLLECTION), records);
}

#[tokio::test]
async fn malformed_list_keeps_previous_snapshot() {
    let mock = MockApi::start().await;
    let records = vec![user("u1", "John", "Smith", UserStatus::Active)];
    mock.enqueue_response(MockResponse::user_list(&records_json(&records)))
        .await;
    mock.enqueue_response(MockResponse::json(r#"{"data": "not-a-list"}"#))
        .await;

    let (actions, store) = test_actions(&mock.base_url());
    assert!(actions.list().await);
    assert!(!actions.list().await);
    assert_eq!(store.snapshot(USER_COLLECTION), records);
}

#[tokio::test]
async fn stale_list_response_does_not_clobber_newer_one() {
    let mock = MockApi::start().await;
    let old = vec![user("old", "Old", "Data", UserStatus::Active)];
    let fresh = vec![user("new", "New", "Data", UserStatus::Active)];
    // First call arrives first and resolves last.
    mock.enqueue_response(MockResponse::user_list(&records_json(&old)).with_delay(400))
        .await;
    mock.enqueue_response(MockResponse::user_list(&records_json(&fresh)))
        .await;

    let (actions, store) = test_actions(&mock.base_url());

    let slow = tokio::spawn({
        let actions = actions.clone();
        async move { actions.list().await }
    });
    tokio::time::sleep(Duration::from_millis(100)).await;
    let fast = tokio::spawn({
        let actions = actions.clone();
        async move { actions.list().await }
    });

    assert!(fast.await.unwrap());
    assert!(slow.await.unwrap());
    assert_eq!(store.snapshot(USER_COLLECTION), fresh);
}

#[tokio::test]
async fn mutations_do_not_touch_the_store() {
    let mock = MockApi::start().await;
    mock.enqueue_response(MockResponse::json(r#"{"ok": true}"#))
        .await;
    mock.enqueue_response(MockResponse::json(r#"{"ok": true}"#))
        .await;
    mock.enqueue_response(MockResponse::json(r#"{"ok": true}"#))
        .await;

    let (actions, store) = test_actions(&mock.base_url());
    let record = user("u1", "John", "Smith", UserStatus::Active);

    assert!(actions.create(&record).await);
    assert!(actions.edit("u1", &record).await);
    assert!(actions.delete("u1").await);
    // Observing any of these requires a follow-up list().
    assert!(store.snapshot(USER_COLLECTION).is_empty());
}

#[tokio::test]
async fn failed_mutation_returns_false() {
    let mock = MockApi::start().await;
    mock.enqueue_response(MockResponse::error(422, "email taken"))
        .await;

    let (actions, _store) = test_actions(&mock.base_url());
    let record = user("", "John", "Smith", UserStatus::Active);
    assert!(!actions.create(&record).await);
}
