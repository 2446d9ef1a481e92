use crate::{
    ApiConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, CacheConfig, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, LoggingConfig, SessionConfig, StorageConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub cache: CacheConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for ZEN_CONFIG_DIR env var, else use ./.zen/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply NEXT_PUBLIC_API_URL / INTERNAL_API_URL, then ZEN_* overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: ZEN_CONFIG_DIR env var > ./.zen/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.api.validate()?;
        self.session.validate()?;
        self.cache.validate()?;
        self.storage.validate()?;
        Ok(())
    }

    /// Absolute path of the client storage file.
    pub fn storage_path(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.storage.file))
    }

    /// Absolute path of the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref filename) => {
                let config_dir = Self::config_dir()?;
                Ok(Some(config_dir.join(&self.logging.dir).join(filename)))
            }
            None => Ok(None),
        }
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  api: {} (origin: {}, health timeout {}s, market timeout {}s)",
            self.api.base_url(),
            self.api.origin.as_str(),
            self.api.health_timeout_secs,
            self.api.market_timeout_secs
        );
        info!(
            "  session: poll every {}s, login at {}",
            self.session.poll_interval_secs, self.session.login_path
        );
        info!(
            "  cache: prefix='{}', default={}s, health={}s, zodiac={}s",
            self.cache.prefix,
            self.cache.default_ttl_secs,
            self.cache.health_ttl_secs,
            self.cache.zodiac_ttl_secs
        );
        info!("  storage: {}", self.storage.file);
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Frontend-compatible names first so ZEN_* can still win
        Self::apply_env_string("NEXT_PUBLIC_API_URL", &mut self.api.public_url);
        Self::apply_env_string("INTERNAL_API_URL", &mut self.api.internal_url);

        // API
        Self::apply_env_string("ZEN_API_PUBLIC_URL", &mut self.api.public_url);
        Self::apply_env_string("ZEN_API_INTERNAL_URL", &mut self.api.internal_url);
        Self::apply_env_parse("ZEN_API_ORIGIN", &mut self.api.origin);
        Self::apply_env_parse(
            "ZEN_HEALTH_TIMEOUT_SECS",
            &mut self.api.health_timeout_secs,
        );
        Self::apply_env_parse(
            "ZEN_MARKET_TIMEOUT_SECS",
            &mut self.api.market_timeout_secs,
        );

        // Session
        Self::apply_env_parse(
            "ZEN_SESSION_POLL_INTERVAL_SECS",
            &mut self.session.poll_interval_secs,
        );
        Self::apply_env_string("ZEN_SESSION_LOGIN_PATH", &mut self.session.login_path);

        // Cache
        Self::apply_env_string("ZEN_CACHE_PREFIX", &mut self.cache.prefix);
        Self::apply_env_parse(
            "ZEN_CACHE_DEFAULT_TTL_SECS",
            &mut self.cache.default_ttl_secs,
        );
        Self::apply_env_parse(
            "ZEN_CACHE_HEALTH_TTL_SECS",
            &mut self.cache.health_ttl_secs,
        );
        Self::apply_env_parse(
            "ZEN_CACHE_ZODIAC_TTL_SECS",
            &mut self.cache.zodiac_ttl_secs,
        );

        // Storage
        Self::apply_env_string("ZEN_STORAGE_FILE", &mut self.storage.file);

        // Logging
        Self::apply_env_parse("ZEN_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("ZEN_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("ZEN_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
