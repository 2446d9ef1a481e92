use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;

/// A change made through some storage handle.
///
/// `key` is `None` when the writer cannot name a single key (the receiver fell
/// behind and missed events), which callers must treat as "anything changed".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageEvent {
    pub key: Option<String>,
    pub tab: u64,
}

impl StorageEvent {
    pub fn concerns(&self, keys: &[&str]) -> bool {
        match self.key {
            Some(ref key) => keys.contains(&key.as_str()),
            None => true,
        }
    }
}

/// Receiver side of the storage-event channel for one handle
pub struct StorageSubscription {
    receiver: broadcast::Receiver<StorageEvent>,
    own_tab: u64,
}

impl StorageSubscription {
    pub(crate) fn new(receiver: broadcast::Receiver<StorageEvent>, own_tab: u64) -> Self {
        Self { receiver, own_tab }
    }

    /// Wait for the next change made through another handle.
    ///
    /// Returns `None` once every writer is gone.
    pub async fn recv(&mut self) -> Option<StorageEvent> {
        loop {
            match self.receiver.recv().await {
                Ok(event) if event.tab == self.own_tab => continue,
                Ok(event) => return Some(event),
                Err(RecvError::Lagged(skipped)) => {
                    log::debug!("Storage subscription lagged, {skipped} events skipped");
                    return Some(StorageEvent {
                        key: None,
                        tab: self.own_tab,
                    });
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }
}
