use axum::middleware;
use axum::routing::{get, post};
use axum::Router;

use crate::auth;
use crate::controllers;

pub fn routes() -> Router {
    let protected = Router::new()
        .route("/v1/messages", post(controllers::messages::create))
        .route("/v1/agent", post(controllers::agent::create))
        .layer(middleware::from_fn(auth::require_bearer_token));

    Router::new()
        .route("/health", get(controllers::health_check::show))
        .merge(protected)
}
