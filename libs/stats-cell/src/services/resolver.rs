use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use serde_json::Value;
use tracing::info;

use shared_database::StatsStore;

use crate::models::DatasetKey;
use crate::services::cache::{DatasetCache, DEFAULT_TTL};

/// Fetch-or-cache access to the remote datasets: at most one remote read per
/// TTL window per key, staleness bounded by the TTL. Concurrent misses on the
/// same key are not deduplicated; each may read the store once.
pub struct StatsResolver {
    store: Arc<dyn StatsStore>,
    cache: DatasetCache,
}

impl StatsResolver {
    pub fn new(store: Arc<dyn StatsStore>) -> Self {
        Self::with_ttl(store, DEFAULT_TTL)
    }

    pub fn with_ttl(store: Arc<dyn StatsStore>, ttl: Duration) -> Self {
        Self {
            store,
            cache: DatasetCache::new(ttl),
        }
    }

    /// Cached value if fresh, otherwise one remote read followed by a cache
    /// write. Fetch failures propagate; no retry, no stale fallback.
    pub async fn resolve(&self, key: DatasetKey) -> Result<Value> {
        if let Some(value) = self.cache.get(key).await {
            return Ok(value);
        }

        info!("Fetching {} from remote store", key);
        let value = self.store.read(key.as_path()).await?;
        self.cache.set(key, value.clone()).await;
        Ok(value)
    }
}
