use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_LOGIN_PATH, DEFAULT_POLL_INTERVAL_SECS,
    MAX_POLL_INTERVAL_SECS, MIN_POLL_INTERVAL_SECS,
};

use std::time::Duration;

use serde::Deserialize;

/// Current-user reconciliation settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// How often the signed-in user is re-fetched
    pub poll_interval_secs: u64,
    /// Entry point users are sent to when their session cannot be recovered
    pub login_path: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
            login_path: String::from(DEFAULT_LOGIN_PATH),
        }
    }
}

impl SessionConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.poll_interval_secs < MIN_POLL_INTERVAL_SECS
            || self.poll_interval_secs > MAX_POLL_INTERVAL_SECS
        {
            return Err(ConfigError::session(format!(
                "session.poll_interval_secs must be {}-{}, got {}",
                MIN_POLL_INTERVAL_SECS, MAX_POLL_INTERVAL_SECS, self.poll_interval_secs
            )));
        }

        if !self.login_path.starts_with('/') {
            return Err(ConfigError::session(format!(
                "session.login_path must start with '/', got '{}'",
                self.login_path
            )));
        }

        Ok(())
    }
}
