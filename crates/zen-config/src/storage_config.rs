use crate::{ConfigError, ConfigErrorResult, DEFAULT_STORAGE_FILE};

use serde::Deserialize;

/// File-backed client storage (tokens, user, demo state, cache entries)
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// File name relative to the config directory
    pub file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            file: String::from(DEFAULT_STORAGE_FILE),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let path = std::path::Path::new(&self.file);
        if self.file.is_empty() || path.is_absolute() || self.file.contains("..") {
            return Err(ConfigError::storage(
                "storage.file must be a relative path and cannot contain '..'",
            ));
        }
        Ok(())
    }
}
