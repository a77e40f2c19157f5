//! # Text Resource Lifecycle Tests
//!
//! Drives the provider through the full `pwpush_text` lifecycle against a
//! mock push service, verifying:
//! - Create POSTs the exact wire payload and mirrors the returned record
//! - Read is a passthrough and Delete never calls the service
//! - Update and ImportState are rejected unconditionally
//! - Transport and parse failures surface as errors with no state written

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pwpush_provider::{ProviderService, PwpushProvider, ProviderError};

/// Record body the mock service answers with on a successful push
fn service_record() -> serde_json::Value {
    json!({
        "url_token": "abc123",
        "expire_after_days": 7,
        "expire_after_views": 5,
        "expired": false,
        "created_at": "2024-05-01T10:00:00Z",
        "updated_at": "2024-05-01T10:00:00Z",
        "deleted": false,
        "deletable_by_viewer": false,
        "retrieval_step": false,
        "expired_on": null,
        "days_remaining": 7,
        "views_remaining": 5,
    })
}

async fn configured_provider(server: &MockServer) -> PwpushProvider {
    let provider = PwpushProvider::new();
    provider
        .configure(json!({ "url": server.uri() }))
        .await
        .expect("configure should succeed");
    provider
}

#[tokio::test]
async fn create_sends_exact_request_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/p.json"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({
            "payload": "one",
            "passphrase": null,
            "deletable_by_viewer": false,
            "retrieval_step": false,
            "kind": "text",
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(service_record()))
        .expect(1)
        .mount(&server)
        .await;

    let provider = configured_provider(&server).await;
    let state = provider
        .create("pwpush_text", json!({ "password": "one" }))
        .await
        .expect("create should succeed");

    assert_eq!(state["password"], json!("one"));
}

#[tokio::test]
async fn create_populates_state_from_service_record() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/p.json"))
        .respond_with(ResponseTemplate::new(201).set_body_json(service_record()))
        .mount(&server)
        .await;

    let provider = configured_provider(&server).await;
    let state = provider
        .create(
            "pwpush_text",
            json!({ "password": "hunter2", "passphrase": "open sesame" }),
        )
        .await
        .expect("create should succeed");

    assert_eq!(state["id"], json!("abc123"));
    assert_eq!(state["password"], json!("hunter2"));
    assert_eq!(state["passphrase"], json!("open sesame"));
    assert_eq!(state["expire_after_days"], json!(7));
    assert_eq!(state["expire_after_views"], json!(5));
    assert_eq!(state["expired"], json!(false));
    assert_eq!(state["created_at"], json!("2024-05-01T10:00:00Z"));
    assert_eq!(state["updated_at"], json!("2024-05-01T10:00:00Z"));
    assert_eq!(state["deleted"], json!(false));
    assert_eq!(state["deletable_by_viewer"], json!(false));
    assert_eq!(state["retrieval_step"], json!(false));
    assert_eq!(state["days_remaining"], json!(7));
    assert_eq!(state["views_remaining"], json!(5));
}

#[tokio::test]
async fn create_then_read_preserves_state() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/p.json"))
        .respond_with(ResponseTemplate::new(201).set_body_json(service_record()))
        .mount(&server)
        .await;

    let provider = configured_provider(&server).await;
    let created = provider
        .create("pwpush_text", json!({ "password": "hunter2" }))
        .await
        .expect("create should succeed");

    assert_eq!(created["password"], json!("hunter2"));
    assert!(created["id"].as_str().is_some_and(|id| !id.is_empty()));

    let requests_after_create = server.received_requests().await.unwrap().len();

    let read = provider
        .read("pwpush_text", created.clone())
        .await
        .expect("read should succeed");

    assert_eq!(read, created);
    // read never re-queries the service
    assert_eq!(
        server.received_requests().await.unwrap().len(),
        requests_after_create
    );
}

#[tokio::test]
async fn malformed_response_body_surfaces_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/p.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let provider = configured_provider(&server).await;
    let err = provider
        .create("pwpush_text", json!({ "password": "hunter2" }))
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::Serialization(_)));
}

#[tokio::test]
async fn service_error_status_is_surfaced_with_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/p.json"))
        .respond_with(
            ResponseTemplate::new(422).set_body_string(r#"{"error":"payload missing"}"#),
        )
        .mount(&server)
        .await;

    let provider = configured_provider(&server).await;
    let err = provider
        .create("pwpush_text", json!({ "password": "hunter2" }))
        .await
        .unwrap_err();

    match err {
        ProviderError::Api { status, body } => {
            assert_eq!(status, 422);
            assert!(body.contains("payload missing"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn update_is_rejected_without_remote_call() {
    let server = MockServer::start().await;
    let provider = configured_provider(&server).await;

    let prior = json!({ "password": "hunter2", "id": "abc123" });
    let planned = json!({ "password": "changed", "id": "abc123" });

    let err = provider
        .update("pwpush_text", prior, planned)
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "unable to update entry, not a permitted action"
    );
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn import_state_is_rejected_for_any_identifier() {
    let server = MockServer::start().await;
    let provider = configured_provider(&server).await;

    for id in ["abc123", "", "anything-at-all"] {
        let err = provider
            .import_state("pwpush_text", id)
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "unable to import entry, not a permitted action"
        );
    }
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_drops_tracking_without_remote_call() {
    let server = MockServer::start().await;
    let provider = configured_provider(&server).await;

    provider
        .delete("pwpush_text", json!({ "password": "hunter2", "id": "abc123" }))
        .await
        .expect("delete should succeed");

    assert!(server.received_requests().await.unwrap().is_empty());
}
