//! CORS policy for the HTTP surface, driven by `application.allowed_origins`.

use axum::http::Method;
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::settings;

pub fn cors_layer() -> CorsLayer {
    let configured_origins = &settings().application.allowed_origins;

    CorsLayer::new()
        .allow_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(allowed_origins(configured_origins))
}

fn allowed_origins(configured_origins: &[String]) -> AllowOrigin {
    if configured_origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let origins: Vec<_> = configured_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        AllowOrigin::list(origins)
    }
}
