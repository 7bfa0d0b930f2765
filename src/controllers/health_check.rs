use axum::extract::Extension;
use axum::Json;
use serde::Serialize;

use crate::context::AppContext;

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Healthy,
    Degraded,
}

#[derive(Debug, Serialize)]
pub struct HealthCheck {
    masking_engine: Status,
    mapping_store: Status,
    upstream_client: Status,
}

pub async fn show(Extension(ctx): Extension<AppContext>) -> Json<HealthCheck> {
    Json(HealthCheck {
        masking_engine: Status::Healthy,
        mapping_store: probe_store(&ctx).await,
        upstream_client: Status::Healthy,
    })
}

/// Probes the store with a round-trip `save`/`lookup_token` against a
/// disposable key rather than assuming connectivity state.
async fn probe_store(ctx: &AppContext) -> Status {
    const PROBE_TOKEN: &str = "AWS_HEALTHCHECK_000";
    const PROBE_VALUE: &str = "__healthcheck_probe__";

    let store = ctx.store();
    if store.save(PROBE_TOKEN, PROBE_VALUE, None).await.is_err() {
        return Status::Degraded;
    }

    match store.lookup_original(PROBE_TOKEN).await {
        Ok(Some(value)) if value == PROBE_VALUE => Status::Healthy,
        _ => Status::Degraded,
    }
}
