use crate::cache::CacheEntry;
use crate::{Clock, Storage};

use std::sync::Arc;
use std::time::Duration;

use log::{debug, error, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use zen_config::CacheConfig;

/// Expiring key/value cache layered over [`Storage`].
///
/// Entries live under `<prefix><key>`. Nothing is swept in the background:
/// an entry that is expired, unreadable or of the wrong shape is removed by
/// the read that finds it. Write failures are logged and dropped, so callers
/// can treat the cache as best-effort.
#[derive(Clone)]
pub struct TtlCache {
    storage: Arc<dyn Storage>,
    clock: Arc<dyn Clock>,
    prefix: String,
    default_ttl: Duration,
}

impl TtlCache {
    pub fn new(storage: Arc<dyn Storage>, clock: Arc<dyn Clock>, config: &CacheConfig) -> Self {
        Self::with_prefix(storage, clock, &config.prefix, config.default_ttl())
    }

    pub fn with_prefix(
        storage: Arc<dyn Storage>,
        clock: Arc<dyn Clock>,
        prefix: &str,
        default_ttl: Duration,
    ) -> Self {
        Self {
            storage,
            clock,
            prefix: prefix.to_string(),
            default_ttl,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    fn storage_key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }

    pub fn set<T: Serialize + ?Sized>(&self, key: &str, data: &T) {
        self.set_with_ttl(key, data, self.default_ttl);
    }

    pub fn set_with_ttl<T: Serialize + ?Sized>(&self, key: &str, data: &T, ttl: Duration) {
        let ttl_ms = i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX);
        let entry = CacheEntry::new(data, self.clock.now_millis(), ttl_ms);

        let raw = match serde_json::to_string(&entry) {
            Ok(raw) => raw,
            Err(e) => {
                error!("Failed to serialize cache entry '{key}': {e}");
                return;
            }
        };

        if let Err(e) = self.storage.set_item(&self.storage_key(key), &raw) {
            error!("Failed to write cache entry '{key}': {e}");
        }
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let storage_key = self.storage_key(key);
        let raw = self.storage.get_item(&storage_key)?;

        let entry: CacheEntry<Value> = match serde_json::from_str(&raw) {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Dropping corrupt cache entry '{key}': {e}");
                self.remove(&storage_key);
                return None;
            }
        };

        if !entry.is_valid_at(self.clock.now_millis()) {
            debug!("Cache entry '{key}' expired");
            self.remove(&storage_key);
            return None;
        }

        match serde_json::from_value(entry.data) {
            Ok(data) => Some(data),
            Err(e) => {
                warn!("Dropping cache entry '{key}' with unexpected shape: {e}");
                self.remove(&storage_key);
                None
            }
        }
    }

    pub fn is_valid(&self, key: &str) -> bool {
        self.get::<Value>(key).is_some()
    }

    pub fn clear(&self, key: &str) {
        self.remove(&self.storage_key(key));
    }

    /// Remove every entry under the cache prefix; other keys are untouched
    pub fn clear_all(&self) {
        let keys: Vec<String> = self
            .storage
            .keys()
            .into_iter()
            .filter(|k| k.starts_with(&self.prefix))
            .collect();

        debug!("Clearing {} cache entries", keys.len());
        for key in keys {
            self.remove(&key);
        }
    }

    fn remove(&self, storage_key: &str) {
        if let Err(e) = self.storage.remove_item(storage_key) {
            error!("Failed to remove cache entry '{storage_key}': {e}");
        }
    }
}
