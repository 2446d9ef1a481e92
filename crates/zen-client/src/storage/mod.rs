//! Key/value client storage with change notifications between handles.
//!
//! Every handle onto the same store is a "tab": writes made through one handle
//! are announced to the subscriptions of all other handles, never to its own.

mod error;
mod file_storage;
mod json;
mod memory_storage;
mod storage_event;

pub use error::{Result as StorageResult, StorageError};
pub use file_storage::FileStorage;
pub use json::{read_json, write_json};
pub use memory_storage::MemoryStorage;
pub use storage_event::{StorageEvent, StorageSubscription};

pub trait Storage: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;

    fn remove_item(&self, key: &str) -> StorageResult<()>;

    /// All keys currently present, in no particular order
    fn keys(&self) -> Vec<String>;

    /// Changes made through other handles onto the same store
    fn subscribe(&self) -> StorageSubscription;
}
