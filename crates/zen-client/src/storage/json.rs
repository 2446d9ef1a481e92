use crate::{Storage, StorageError, StorageResult};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Read and decode a JSON value. Missing or undecodable entries read as `None`.
pub fn read_json<T: DeserializeOwned>(storage: &dyn Storage, key: &str) -> Option<T> {
    let raw = storage.get_item(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Ignoring unreadable storage entry '{key}': {e}");
            None
        }
    }
}

pub fn write_json<T: Serialize + ?Sized>(
    storage: &dyn Storage,
    key: &str,
    value: &T,
) -> StorageResult<()> {
    let raw = serde_json::to_string(value).map_err(|e| StorageError::json(key, e))?;
    storage.set_item(key, &raw)
}
