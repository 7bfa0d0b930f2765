//! The per-request application context: every dependency a controller needs,
//! threaded through axum via `Extension<AppContext>`. `Clone` is cheap — every
//! field is an `Arc` or already `Clone`-able.

use std::sync::Arc;
use std::time::Duration;

use crate::engine::{MaskingEngine, UnmaskingEngine};
use crate::store::MappingStore;
use crate::upstream::UpstreamClient;

#[derive(Clone)]
pub struct AppContext {
    store: Arc<dyn MappingStore>,
    masking: Arc<MaskingEngine>,
    unmasking: Arc<UnmaskingEngine>,
    upstream: UpstreamClient,
}

impl AppContext {
    /// `default_ttl` is the TTL new mappings are minted with, per
    /// `StoreSettings::default_ttl`; `None` means mappings never expire.
    pub fn new(
        store: Arc<dyn MappingStore>,
        upstream: UpstreamClient,
        default_ttl: Option<Duration>,
    ) -> Self {
        Self {
            masking: Arc::new(MaskingEngine::with_ttl(store.clone(), default_ttl)),
            unmasking: Arc::new(UnmaskingEngine::new(store.clone())),
            store,
            upstream,
        }
    }

    pub fn store(&self) -> &Arc<dyn MappingStore> {
        &self.store
    }

    pub fn masking(&self) -> &MaskingEngine {
        &self.masking
    }

    pub fn unmasking(&self) -> &UnmaskingEngine {
        &self.unmasking
    }

    pub fn upstream(&self) -> &UpstreamClient {
        &self.upstream
    }
}
