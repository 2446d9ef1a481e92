use crate::STORAGE_EVENT_CAPACITY;
use crate::storage::{Storage, StorageEvent, StorageResult, StorageSubscription};

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use tokio::sync::broadcast;

struct Shared {
    items: RwLock<BTreeMap<String, String>>,
    events: broadcast::Sender<StorageEvent>,
    next_tab: AtomicU64,
}

/// In-process storage. Handles created with [`MemoryStorage::new_tab`] share
/// the same map and see each other's writes as events.
pub struct MemoryStorage {
    shared: Arc<Shared>,
    tab: u64,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::with_items(BTreeMap::new())
    }

    pub fn with_items(items: BTreeMap<String, String>) -> Self {
        let (events, _) = broadcast::channel(STORAGE_EVENT_CAPACITY);
        Self {
            shared: Arc::new(Shared {
                items: RwLock::new(items),
                events,
                next_tab: AtomicU64::new(1),
            }),
            tab: 0,
        }
    }

    /// Another handle onto the same store
    pub fn new_tab(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
            tab: self.shared.next_tab.fetch_add(1, Ordering::Relaxed),
        }
    }

    pub fn tab(&self) -> u64 {
        self.tab
    }

    pub(crate) fn snapshot(&self) -> BTreeMap<String, String> {
        self.shared
            .items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn notify(&self, key: &str) {
        // No subscribers is fine
        let _ = self.shared.events.send(StorageEvent {
            key: Some(key.to_string()),
            tab: self.tab,
        });
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.shared
            .items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        let changed = {
            let mut items = self
                .shared
                .items
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            let previous = items.insert(key.to_string(), value.to_string());
            previous.as_deref() != Some(value)
        };

        if changed {
            self.notify(key);
        }
        Ok(())
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        let removed = self
            .shared
            .items
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key)
            .is_some();

        if removed {
            self.notify(key);
        }
        Ok(())
    }

    fn keys(&self) -> Vec<String> {
        self.shared
            .items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }

    fn subscribe(&self) -> StorageSubscription {
        StorageSubscription::new(self.shared.events.subscribe(), self.tab)
    }
}
