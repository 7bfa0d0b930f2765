use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use axum::Router;
use serde::Serialize;
use tower::util::ServiceExt;

use maskproxy::config::UpstreamSettings;
use maskproxy::context::AppContext;
use maskproxy::startup;
use maskproxy::store::memory::InMemoryMappingStore;
use maskproxy::store::MappingStore;

/// A `TestContext` wired entirely with in-memory/mocked dependencies: no
/// Redis, and an upstream base URL pointed at a caller-supplied mock server.
pub struct TestContext {
    app: Router,
}

impl TestContext {
    pub async fn new(upstream_base_url: impl Into<String>) -> Self {
        let store: Arc<dyn MappingStore> = Arc::new(InMemoryMappingStore::new());
        let upstream_settings = UpstreamSettings {
            base_url: upstream_base_url.into(),
            api_key: "test-key".to_owned(),
            request_timeout_ms: 5_000,
            model: "claude-test".to_owned(),
        };
        let upstream = startup::connect_upstream(&upstream_settings).expect("upstream client");
        let ctx = AppContext::new(store, upstream, None);

        Self {
            app: startup::app(ctx).await,
        }
    }

    pub fn app(&self) -> Router {
        self.app.clone()
    }

    pub async fn get(&self, path: &str) -> Response {
        let req = Request::builder()
            .method(axum::http::Method::GET)
            .uri(path)
            .body(Body::empty())
            .expect("to build GET request");

        self.app
            .clone()
            .oneshot(req)
            .await
            .expect("axum to always respond")
    }

    pub async fn post<P>(&self, path: &str, payload: &P) -> Response
    where
        P: Serialize + ?Sized,
    {
        let req = Request::builder()
            .method(axum::http::Method::POST)
            .uri(path)
            .header(header::CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())
            .body(Body::from(
                serde_json::to_vec(payload).expect("to serialize request body"),
            ))
            .expect("to build POST request");

        self.app
            .clone()
            .oneshot(req)
            .await
            .expect("axum to always respond")
    }
}
