use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_CACHE_PREFIX, DEFAULT_CACHE_TTL_SECS,
    DEFAULT_HEALTH_TTL_SECS, DEFAULT_ZODIAC_TTL_SECS, MAX_CACHE_TTL_SECS,
};

use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Namespace prepended to every cache key in storage
    pub prefix: String,
    pub default_ttl_secs: u64,
    pub health_ttl_secs: u64,
    pub zodiac_ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            prefix: String::from(DEFAULT_CACHE_PREFIX),
            default_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            health_ttl_secs: DEFAULT_HEALTH_TTL_SECS,
            zodiac_ttl_secs: DEFAULT_ZODIAC_TTL_SECS,
        }
    }
}

impl CacheConfig {
    pub fn default_ttl(&self) -> Duration {
        Duration::from_secs(self.default_ttl_secs)
    }

    pub fn health_ttl(&self) -> Duration {
        Duration::from_secs(self.health_ttl_secs)
    }

    pub fn zodiac_ttl(&self) -> Duration {
        Duration::from_secs(self.zodiac_ttl_secs)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.prefix.is_empty() {
            return Err(ConfigError::cache("cache.prefix must not be empty"));
        }

        for (name, value) in [
            ("cache.default_ttl_secs", self.default_ttl_secs),
            ("cache.health_ttl_secs", self.health_ttl_secs),
            ("cache.zodiac_ttl_secs", self.zodiac_ttl_secs),
        ] {
            if value > MAX_CACHE_TTL_SECS {
                return Err(ConfigError::cache(format!(
                    "{} must be at most {}, got {}",
                    name, MAX_CACHE_TTL_SECS, value
                )));
            }
        }

        Ok(())
    }
}
