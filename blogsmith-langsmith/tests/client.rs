use std::time::Duration;

use blogsmith_langsmith::{LangSmithClient, LangSmithError, RetryPolicy, RunCreate, RunPatch};
use secrecy::SecretString;
use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> LangSmithClient {
    LangSmithClient::new(&server.uri(), SecretString::new("test-key".to_string())).with_retry(
        RetryPolicy {
            attempts: 3,
            initial_delay: Duration::from_millis(10),
        },
    )
}

#[tokio::test]
async fn create_run_sends_typed_body_with_idempotency_key() {
    let server = MockServer::start().await;
    let run = RunCreate::step("search", json!({"topic": "Rust"}), "blogsmith")
        .with_metadata(json!({"step": 1}));

    Mock::given(method("POST"))
        .and(path("/runs"))
        .and(header("x-idempotency-key", run.id.to_string().as_str()))
        .and(header("x-api-key", "test-key"))
        .and(body_partial_json(json!({
            "id": run.id,
            "trace_id": run.id,
            "name": "search",
            "run_type": "chain",
            "session_name": "blogsmith",
            "inputs": {"topic": "Rust"},
            "extra": {"metadata": {"step": 1}}
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client(&server).create_run(&run).await.unwrap();
}

#[tokio::test]
async fn failed_patch_carries_error_and_no_outputs() {
    let server = MockServer::start().await;
    let run_id = Uuid::new_v4();

    Mock::given(method("PATCH"))
        .and(path(format!("/runs/{run_id}")))
        .and(body_partial_json(json!({"error": "review failed"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .patch_run(run_id, &RunPatch::failed("review failed"))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert!(body.get("outputs").is_none());
    assert!(body.get("end_time").is_some());
}

#[tokio::test]
async fn patch_run_tolerates_not_found() {
    let server = MockServer::start().await;
    let run_id = Uuid::new_v4();

    Mock::given(method("PATCH"))
        .and(path(format!("/runs/{run_id}")))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .patch_run(run_id, &RunPatch::finished(json!({"summary": "s"}), 12))
        .await
        .unwrap();
}

#[tokio::test]
async fn server_errors_are_retried_then_reported() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/runs"))
        .respond_with(ResponseTemplate::new(503))
        .expect(3)
        .mount(&server)
        .await;

    let err = client(&server)
        .create_run(&RunCreate::step("search", json!({}), "blogsmith"))
        .await
        .unwrap_err();
    assert!(matches!(err, LangSmithError::Rejected { status, .. } if status.as_u16() == 503));
}

#[tokio::test]
async fn rate_limit_is_retried_until_accepted() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/runs"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "0"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/runs"))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .create_run(&RunCreate::step("generate", json!({}), "blogsmith"))
        .await
        .unwrap();
}

#[tokio::test]
async fn client_errors_are_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/runs"))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad payload"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server)
        .create_run(&RunCreate::step("search", json!({}), "blogsmith"))
        .await
        .unwrap_err();
    match err {
        LangSmithError::Rejected { body, .. } => assert_eq!(body, "bad payload"),
        other => panic!("unexpected error: {other:?}"),
    }
}
