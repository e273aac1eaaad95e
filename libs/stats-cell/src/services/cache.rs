use std::collections::HashMap;
use std::time::Duration;

use serde_json::Value;
use tokio::sync::RwLock;

use crate::models::DatasetKey;

#[cfg(not(test))]
use std::time::Instant;
#[cfg(test)]
use mock_instant::Instant;

/// Staleness bound for every dataset: 12 hours.
pub const DEFAULT_TTL: Duration = Duration::from_secs(43_200);

struct CacheEntry {
    value: Value,
    expires_at: Instant,
}

/// Per-process dataset cache with passive expiry. Entries are overwritten on
/// the next miss after their deadline, never deleted.
pub struct DatasetCache {
    entries: RwLock<HashMap<DatasetKey, CacheEntry>>,
    ttl: Duration,
}

impl DatasetCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    pub async fn get(&self, key: DatasetKey) -> Option<Value> {
        let entries = self.entries.read().await;
        entries.get(&key).and_then(|entry| {
            if Instant::now() < entry.expires_at {
                Some(entry.value.clone())
            } else {
                None
            }
        })
    }

    pub async fn set(&self, key: DatasetKey, value: Value) {
        let mut entries = self.entries.write().await;
        entries.insert(
            key,
            CacheEntry {
                value,
                expires_at: Instant::now() + self.ttl,
            },
        );
    }
}
