use serde_json::Value;

use crate::support::context::TestContext;

#[tokio::test]
async fn health_check_reports_healthy_components() {
    let ctx = TestContext::new("http://localhost:9999").await;

    let response = ctx.get("/health").await;
    assert_eq!(response.status(), axum::http::StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("to read body");
    let json: Value = serde_json::from_slice(&body).expect("to parse json");

    assert_eq!(json["masking_engine"], "healthy");
    assert_eq!(json["mapping_store"], "healthy");
    assert_eq!(json["upstream_client"], "healthy");
}
