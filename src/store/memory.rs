//! An in-memory mapping store. Used by the single-shot CLI commands and by
//! the test harness so tests don't require a live Redis instance.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{MappingStore, StoreError};

struct Entry {
    value: String,
    expires_at: Option<Instant>,
}

#[derive(Default)]
struct Tables {
    forward: HashMap<String, Entry>,
    reverse: HashMap<String, Entry>,
}

/// A `Mutex`-guarded pair of hash maps plus per-type atomic counters.
/// Cheap to construct and `Clone`, so it can be shared via `Arc` the same
/// way the Redis-backed store is.
pub struct InMemoryMappingStore {
    tables: Mutex<Tables>,
    counters: Mutex<HashMap<String, Arc<AtomicU64>>>,
}

impl InMemoryMappingStore {
    pub fn new() -> Self {
        Self {
            tables: Mutex::new(Tables::default()),
            counters: Mutex::new(HashMap::new()),
        }
    }

    async fn counter_for(&self, type_tag: &str) -> Arc<AtomicU64> {
        let mut counters = self.counters.lock().await;
        counters
            .entry(type_tag.to_owned())
            .or_insert_with(|| Arc::new(AtomicU64::new(0)))
            .clone()
    }
}

impl Default for InMemoryMappingStore {
    fn default() -> Self {
        Self::new()
    }
}

fn live(entry: &Entry) -> bool {
    match entry.expires_at {
        Some(deadline) => Instant::now() < deadline,
        None => true,
    }
}

#[async_trait]
impl MappingStore for InMemoryMappingStore {
    async fn lookup_token(&self, original: &str) -> Result<Option<String>, StoreError> {
        let tables = self.tables.lock().await;
        Ok(tables
            .forward
            .get(original)
            .filter(|e| live(e))
            .map(|e| e.value.clone()))
    }

    async fn lookup_original(&self, token: &str) -> Result<Option<String>, StoreError> {
        let tables = self.tables.lock().await;
        Ok(tables
            .reverse
            .get(token)
            .filter(|e| live(e))
            .map(|e| e.value.clone()))
    }

    async fn next_counter(&self, type_tag: &str) -> Result<u64, StoreError> {
        let counter = self.counter_for(type_tag).await;
        Ok(counter.fetch_add(1, Ordering::SeqCst) + 1)
    }

    async fn save(
        &self,
        token: &str,
        original: &str,
        ttl: Option<Duration>,
    ) -> Result<(), StoreError> {
        let expires_at = ttl.map(|d| Instant::now() + d);
        let mut tables = self.tables.lock().await;
        tables.forward.insert(
            original.to_owned(),
            Entry {
                value: token.to_owned(),
                expires_at,
            },
        );
        tables.reverse.insert(
            token.to_owned(),
            Entry {
                value: original.to_owned(),
                expires_at,
            },
        );
        Ok(())
    }

    async fn clear_all(&self) -> Result<(), StoreError> {
        let mut tables = self.tables.lock().await;
        tables.forward.clear();
        tables.reverse.clear();
        let mut counters = self.counters.lock().await;
        counters.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn counters_are_monotonic_per_type() {
        let store = InMemoryMappingStore::new();
        assert_eq!(store.next_counter("lambda").await.unwrap(), 1);
        assert_eq!(store.next_counter("lambda").await.unwrap(), 2);
        assert_eq!(store.next_counter("vpc").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn save_is_bidirectional() {
        let store = InMemoryMappingStore::new();
        store.save("AWS_LAMBDA_ARN_001", "arn:aws:lambda:...", None).await.unwrap();

        assert_eq!(
            store.lookup_token("arn:aws:lambda:...").await.unwrap(),
            Some("AWS_LAMBDA_ARN_001".to_owned())
        );
        assert_eq!(
            store.lookup_original("AWS_LAMBDA_ARN_001").await.unwrap(),
            Some("arn:aws:lambda:...".to_owned())
        );
    }

    #[tokio::test]
    async fn unknown_token_lookups_return_none() {
        let store = InMemoryMappingStore::new();
        assert_eq!(store.lookup_original("AWS_GHOST_999").await.unwrap(), None);
    }

    #[tokio::test]
    async fn ttl_expiry_makes_entries_disappear() {
        let store = InMemoryMappingStore::new();
        store
            .save("AWS_LAMBDA_ARN_001", "arn:aws:lambda:...", Some(Duration::from_millis(1)))
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_millis(20)).await;

        assert_eq!(store.lookup_original("AWS_LAMBDA_ARN_001").await.unwrap(), None);
    }
}
