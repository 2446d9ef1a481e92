use serde::{Deserialize, Serialize};

/// Stored shape of a cached value: `{data, timestamp, ttl}` with both times in ms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    pub data: T,
    pub timestamp: i64,
    pub ttl: i64,
}

impl<T> CacheEntry<T> {
    pub fn new(data: T, timestamp: i64, ttl: i64) -> Self {
        Self {
            data,
            timestamp,
            ttl,
        }
    }

    /// Valid iff `now - timestamp <= ttl`
    pub fn is_valid_at(&self, now: i64) -> bool {
        now.saturating_sub(self.timestamp) <= self.ttl
    }
}
