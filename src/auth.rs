//! A thin local-facing bearer-token check. Full OAuth/session management is
//! explicitly out of scope; this only guards who may reach this proxy at all.

use axum::extract::Request;
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use axum::http::StatusCode;

use crate::config::settings;

pub async fn require_bearer_token(request: Request, next: Next) -> Result<Response, StatusCode> {
    let expected = &settings().application.local_api_key;
    if expected.is_empty() {
        // No local key configured: treat auth as disabled (development mode).
        return Ok(next.run(request).await);
    }

    let provided = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    match provided {
        Some(token) if token == expected => Ok(next.run(request).await),
        _ => Err(StatusCode::UNAUTHORIZED),
    }
}
