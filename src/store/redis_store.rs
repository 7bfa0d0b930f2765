//! The production mapping store backend: a Redis connection manager. Key
//! layout follows SPEC_FULL.md §6's wire semantics: `forward:<original>`,
//! `reverse:<token>`, `counter:<type>`.

use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;

use crate::config::StoreSettings;

use super::{MappingStore, StoreError};

const FORWARD_PREFIX: &str = "forward:";
const REVERSE_PREFIX: &str = "reverse:";
const COUNTER_PREFIX: &str = "counter:";

pub struct RedisMappingStore {
    manager: ConnectionManager,
}

impl RedisMappingStore {
    pub async fn connect(settings: &StoreSettings) -> Result<Self, StoreError> {
        let url = settings.redis_url();
        let client = redis::Client::open(url).map_err(|e| StoreError::Connection(e.into()))?;
        let manager = client
            .get_connection_manager()
            .await
            .map_err(|e| StoreError::Connection(e.into()))?;

        Ok(Self { manager })
    }

    fn forward_key(original: &str) -> String {
        format!("{FORWARD_PREFIX}{original}")
    }

    fn reverse_key(token: &str) -> String {
        format!("{REVERSE_PREFIX}{token}")
    }

    fn counter_key(type_tag: &str) -> String {
        format!("{COUNTER_PREFIX}{type_tag}")
    }
}

#[async_trait]
impl MappingStore for RedisMappingStore {
    async fn lookup_token(&self, original: &str) -> Result<Option<String>, StoreError> {
        let mut conn = self.manager.clone();
        conn.get(Self::forward_key(original))
            .await
            .map_err(|e| StoreError::Operation(e.into()))
    }

    async fn lookup_original(&self, token: &str) -> Result<Option<String>, StoreError> {
        let mut conn = self.manager.clone();
        conn.get(Self::reverse_key(token))
            .await
            .map_err(|e| StoreError::Operation(e.into()))
    }

    async fn next_counter(&self, type_tag: &str) -> Result<u64, StoreError> {
        let mut conn = self.manager.clone();
        conn.incr(Self::counter_key(type_tag), 1u64)
            .await
            .map_err(|e| StoreError::Operation(e.into()))
    }

    async fn save(
        &self,
        token: &str,
        original: &str,
        ttl: Option<Duration>,
    ) -> Result<(), StoreError> {
        let mut conn = self.manager.clone();
        let mut pipe = redis::pipe();
        pipe.atomic();

        match ttl {
            Some(ttl) => {
                let secs = ttl.as_secs().max(1);
                pipe.set_ex(Self::forward_key(original), token, secs)
                    .set_ex(Self::reverse_key(token), original, secs);
            }
            None => {
                pipe.set(Self::forward_key(original), token)
                    .set(Self::reverse_key(token), original);
            }
        }

        pipe.query_async::<_, ()>(&mut conn)
            .await
            .map_err(|e| StoreError::Operation(e.into()))
    }

    async fn clear_all(&self) -> Result<(), StoreError> {
        let mut conn = self.manager.clone();
        for prefix in [FORWARD_PREFIX, REVERSE_PREFIX, COUNTER_PREFIX] {
            let keys: Vec<String> = conn
                .keys(format!("{prefix}*"))
                .await
                .map_err(|e| StoreError::Operation(e.into()))?;
            if !keys.is_empty() {
                conn.del::<_, ()>(keys)
                    .await
                    .map_err(|e| StoreError::Operation(e.into()))?;
            }
        }
        Ok(())
    }
}
