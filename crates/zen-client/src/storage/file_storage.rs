use crate::storage::{
    MemoryStorage, Storage, StorageError, StorageResult, StorageSubscription,
};

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use log::{debug, warn};

/// Storage persisted as a JSON object, written through on every change.
///
/// Lets a CLI session survive between invocations the way browser storage
/// survives page reloads. Several processes may share one file: every access
/// reloads it, and each write re-reads the file and applies only its own key.
/// Changes picked up from disk are published to subscribers like writes from
/// another tab.
pub struct FileStorage {
    memory: MemoryStorage,
    disk: MemoryStorage,
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStorage {
    /// Open the store at `path`, starting empty if the file does not exist yet
    pub fn open(path: impl Into<PathBuf>) -> StorageResult<Self> {
        let path = path.into();
        let items = read_items(&path)?;

        debug!("Opened storage {} ({} keys)", path.display(), items.len());

        let memory = MemoryStorage::with_items(items);
        let disk = memory.new_tab();
        Ok(Self {
            memory,
            disk,
            path,
            lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Bring memory in line with the file and return what is on disk.
    /// Caller holds the lock.
    fn sync_from_disk(&self) -> StorageResult<BTreeMap<String, String>> {
        let on_disk = read_items(&self.path)?;
        let current = self.memory.snapshot();

        for (key, value) in &on_disk {
            if current.get(key) != Some(value) {
                debug!("Storage key {} changed on disk", key);
                self.disk.set_item(key, value)?;
            }
        }
        for key in current.keys() {
            if !on_disk.contains_key(key) {
                debug!("Storage key {} removed on disk", key);
                self.disk.remove_item(key)?;
            }
        }

        Ok(on_disk)
    }

    fn refresh(&self) {
        let _guard = self.lock();
        if let Err(e) = self.sync_from_disk() {
            warn!("Keeping last known storage: {}", e);
        }
    }

    fn write_items(&self, items: &BTreeMap<String, String>) -> StorageResult<()> {
        let contents = serde_json::to_string_pretty(items)
            .map_err(|e| StorageError::json(self.path.display().to_string(), e))?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))?;
        }

        // Replace atomically via a sibling temp file
        let tmp = self.temp_path();
        std::fs::write(&tmp, contents).map_err(|e| StorageError::io(&tmp, e))?;
        std::fs::rename(&tmp, &self.path).map_err(|e| StorageError::io(&self.path, e))
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "storage".to_string());
        self.path
            .with_file_name(format!("{}.{}.tmp", name, std::process::id()))
    }
}

fn read_items(path: &Path) -> StorageResult<BTreeMap<String, String>> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }

    let contents = std::fs::read_to_string(path).map_err(|e| StorageError::io(path, e))?;
    if contents.trim().is_empty() {
        return Ok(BTreeMap::new());
    }

    serde_json::from_str(&contents).map_err(|e| StorageError::json(path.display().to_string(), e))
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.refresh();
        self.memory.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        let _guard = self.lock();
        let mut items = self.sync_from_disk()?;
        items.insert(key.to_string(), value.to_string());
        self.write_items(&items)?;
        self.memory.set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        let _guard = self.lock();
        let mut items = self.sync_from_disk()?;
        if items.remove(key).is_some() {
            self.write_items(&items)?;
        }
        self.memory.remove_item(key)
    }

    fn keys(&self) -> Vec<String> {
        self.refresh();
        self.memory.keys()
    }

    fn subscribe(&self) -> StorageSubscription {
        self.memory.subscribe()
    }
}
