use std::net::TcpListener;
use std::sync::Arc;

use axum::Extension;
use tower::limit::ConcurrencyLimitLayer;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::{StoreBackend, StoreSettings, UpstreamSettings};
use crate::context::AppContext;
use crate::cors::cors_layer;
use crate::routes::routes;
use crate::shutdown;
use crate::store::memory::InMemoryMappingStore;
use crate::store::redis_store::RedisMappingStore;
use crate::store::MappingStore;
use crate::upstream::UpstreamClient;

/// Builds the connected `AppContext` and the (still un-served) axum app,
/// wired with the same middleware ordering as `control`'s `startup::run`:
/// tracing, then CORS, then a concurrency cap, then the shared context.
pub async fn app(ctx: AppContext) -> axum::Router {
    routes().layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer())
            .layer(ConcurrencyLimitLayer::new(64))
            .layer(Extension(ctx)),
    )
}

/// Serves `app` on `listener` until a shutdown signal arrives, letting
/// in-flight requests (and their store writes) complete first.
pub async fn run(listener: TcpListener, app: axum::Router) -> anyhow::Result<()> {
    listener.set_nonblocking(true)?;
    let listener = tokio::net::TcpListener::from_std(listener)?;

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown::signal())
        .await?;

    Ok(())
}

pub async fn connect_to_store(settings: &StoreSettings) -> anyhow::Result<Arc<dyn MappingStore>> {
    match settings.backend {
        StoreBackend::Redis => {
            let store = RedisMappingStore::connect(settings).await?;
            Ok(Arc::new(store))
        }
        StoreBackend::Memory => Ok(Arc::new(InMemoryMappingStore::new())),
    }
}

pub fn connect_upstream(settings: &UpstreamSettings) -> anyhow::Result<UpstreamClient> {
    UpstreamClient::new(settings)
}
