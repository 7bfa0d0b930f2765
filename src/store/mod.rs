//! The mapping store (C4): a persistent bidirectional original<->token map
//! with per-type monotonic counters. Backend-agnostic behind [`MappingStore`]
//! so the masking/unmasking engines never know which backend they're using.

pub mod memory;
pub mod redis_store;

use std::time::Duration;

use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("mapping store connection failed")]
    Connection(#[source] anyhow::Error),
    #[error("mapping store operation failed")]
    Operation(#[source] anyhow::Error),
}

/// A single `token -> original` pair to persist, used by `save_batch`.
#[derive(Debug, Clone)]
pub struct MappingPair {
    pub token: String,
    pub original: String,
}

/// The persistent bidirectional mapping store. Implementations must expose
/// both directions of a `save` atomically: a reader must never observe the
/// forward entry without the reverse entry, or vice versa.
#[async_trait]
pub trait MappingStore: Send + Sync {
    async fn lookup_token(&self, original: &str) -> Result<Option<String>, StoreError>;

    async fn lookup_original(&self, token: &str) -> Result<Option<String>, StoreError>;

    /// Returns a value strictly greater than any previously returned for
    /// `type_tag`, even across process restarts.
    async fn next_counter(&self, type_tag: &str) -> Result<u64, StoreError>;

    async fn save(
        &self,
        token: &str,
        original: &str,
        ttl: Option<Duration>,
    ) -> Result<(), StoreError>;

    async fn save_batch(&self, pairs: &[MappingPair], ttl: Option<Duration>) -> Result<(), StoreError> {
        for pair in pairs {
            self.save(&pair.token, &pair.original, ttl).await?;
        }
        Ok(())
    }

    /// Test-only wipe of all mappings and counters.
    async fn clear_all(&self) -> Result<(), StoreError>;

    async fn close(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
