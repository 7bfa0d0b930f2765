use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::support::context::TestContext;

#[tokio::test]
async fn masks_outbound_and_unmasks_inbound_account_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [
                {"type": "text", "text": "Account AWS_ACCOUNT_001 looks healthy."}
            ]
        })))
        .mount(&mock_server)
        .await;

    let ctx = TestContext::new(mock_server.uri()).await;

    let response = ctx
        .post(
            "/v1/messages",
            &json!({
                "messages": [
                    {"role": "user", "content": "Check account 123456789012 please"}
                ]
            }),
        )
        .await;

    assert_eq!(response.status(), axum::http::StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("to read body");
    let json: Value = serde_json::from_slice(&body).expect("to parse json");

    assert_eq!(json["content"][0]["text"], "Account 123456789012 looks healthy.");
}

#[tokio::test]
async fn malformed_json_body_is_rejected_not_panicked() {
    let mock_server = MockServer::start().await;
    let ctx = TestContext::new(mock_server.uri()).await;

    let request = axum::http::Request::builder()
        .method(axum::http::Method::POST)
        .uri("/v1/messages")
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from("not json"))
        .expect("to build request");

    use tower::util::ServiceExt;
    let response = ctx
        .app()
        .oneshot(request)
        .await
        .expect("axum to always respond");

    assert_eq!(response.status(), axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn well_formed_body_missing_messages_is_rejected() {
    let mock_server = MockServer::start().await;
    let ctx = TestContext::new(mock_server.uri()).await;

    let response = ctx.post("/v1/messages", &json!({"model": "claude-test"})).await;

    assert_eq!(response.status(), axum::http::StatusCode::BAD_REQUEST);
}
