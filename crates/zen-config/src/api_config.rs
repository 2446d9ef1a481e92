use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_API_URL, DEFAULT_HEALTH_TIMEOUT_SECS,
    DEFAULT_MARKET_TIMEOUT_SECS, MAX_TIMEOUT_SECS, MIN_TIMEOUT_SECS,
};

use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;

/// Where requests originate, which decides the base URL.
///
/// Browser-side calls go through the publicly exposed port; server-side calls
/// use the internal network address of the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RequestOrigin {
    #[default]
    Browser,
    Server,
}

impl RequestOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Server => "server",
        }
    }
}

impl FromStr for RequestOrigin {
    type Err = ConfigError;

    #[track_caller]
    fn from_str(s: &str) -> ConfigErrorResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "browser" | "client" | "public" => Ok(Self::Browser),
            "server" | "internal" => Ok(Self::Server),
            other => Err(ConfigError::api(format!(
                "api.origin must be 'browser' or 'server', got '{other}'"
            ))),
        }
    }
}

/// Backend location and per-endpoint timeouts
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Publicly reachable backend URL (NEXT_PUBLIC_API_URL)
    pub public_url: String,
    /// Backend URL on the internal network (INTERNAL_API_URL)
    pub internal_url: String,
    pub origin: RequestOrigin,
    pub health_timeout_secs: u64,
    pub market_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            public_url: String::from(DEFAULT_API_URL),
            internal_url: String::from(DEFAULT_API_URL),
            origin: RequestOrigin::default(),
            health_timeout_secs: DEFAULT_HEALTH_TIMEOUT_SECS,
            market_timeout_secs: DEFAULT_MARKET_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    /// Backend root for the configured origin, without a trailing slash
    pub fn base_url(&self) -> &str {
        let url = match self.origin {
            RequestOrigin::Browser => &self.public_url,
            RequestOrigin::Server => &self.internal_url,
        };
        url.trim_end_matches('/')
    }

    pub fn health_timeout(&self) -> Duration {
        Duration::from_secs(self.health_timeout_secs)
    }

    pub fn market_timeout(&self) -> Duration {
        Duration::from_secs(self.market_timeout_secs)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        Self::validate_url("api.public_url", &self.public_url)?;
        Self::validate_url("api.internal_url", &self.internal_url)?;

        for (name, value) in [
            ("api.health_timeout_secs", self.health_timeout_secs),
            ("api.market_timeout_secs", self.market_timeout_secs),
        ] {
            if !(MIN_TIMEOUT_SECS..=MAX_TIMEOUT_SECS).contains(&value) {
                return Err(ConfigError::api(format!(
                    "{} must be {}-{}, got {}",
                    name, MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS, value
                )));
            }
        }

        Ok(())
    }

    fn validate_url(name: &str, url: &str) -> ConfigErrorResult<()> {
        let rest = url
            .strip_prefix("http://")
            .or_else(|| url.strip_prefix("https://"));

        match rest {
            Some(host) if !host.trim_matches('/').is_empty() => Ok(()),
            Some(_) => Err(ConfigError::api(format!("{name} has no host: '{url}'"))),
            None => Err(ConfigError::api(format!(
                "{name} must start with http:// or https://, got '{url}'"
            ))),
        }
    }
}
