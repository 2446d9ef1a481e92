mod api_config;
mod cache_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod session_config;
mod storage_config;

#[cfg(test)]
mod tests;

pub use api_config::{ApiConfig, RequestOrigin};
pub use cache_config::CacheConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use session_config::SessionConfig;
pub use storage_config::StorageConfig;

const CONFIG_DIR_ENV: &str = "ZEN_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".zen";
const CONFIG_FILENAME: &str = "config.toml";

// API
const DEFAULT_API_URL: &str = "http://localhost:42069";
const DEFAULT_HEALTH_TIMEOUT_SECS: u64 = 5;
const DEFAULT_MARKET_TIMEOUT_SECS: u64 = 10;
const MIN_TIMEOUT_SECS: u64 = 1;
const MAX_TIMEOUT_SECS: u64 = 60;

// Session
const DEFAULT_POLL_INTERVAL_SECS: u64 = 5;
const MIN_POLL_INTERVAL_SECS: u64 = 1;
const MAX_POLL_INTERVAL_SECS: u64 = 300;
const DEFAULT_LOGIN_PATH: &str = "/login";

// Cache
const DEFAULT_CACHE_PREFIX: &str = "cache_";
const DEFAULT_CACHE_TTL_SECS: u64 = 300;
const DEFAULT_HEALTH_TTL_SECS: u64 = 30;
const DEFAULT_ZODIAC_TTL_SECS: u64 = 300;
const MAX_CACHE_TTL_SECS: u64 = 86_400;

// Storage
const DEFAULT_STORAGE_FILE: &str = "storage.json";

// Logging
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
