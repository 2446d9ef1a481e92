use crate::StorageError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;
use zen_config::ConfigError;
use zen_core::CoreError;

/// Errors that can occur while talking to the ZEN Traders backend
#[derive(Error, Debug)]
pub enum ClientError {
    /// No access token was available; the user has been sent to log in
    #[error("Authentication required. Please log in first. {location}")]
    AuthenticationRequired { location: ErrorLocation },

    /// The access token was rejected and could not be refreshed
    #[error("Session expired. Please log in again. {location}")]
    SessionExpired { location: ErrorLocation },

    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error ({status}): {message} {location}")]
    Api {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    /// A simulated trade was refused (demo mode)
    #[error("Trade rejected: {message} {location}")]
    Trade {
        message: String,
        location: ErrorLocation,
    },

    #[error("Configuration error: {message} {location}")]
    Config {
        message: String,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ClientError {
    #[track_caller]
    pub fn authentication_required() -> Self {
        ClientError::AuthenticationRequired {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn session_expired() -> Self {
        ClientError::SessionExpired {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        ClientError::Api {
            status,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        ClientError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn trade(message: impl Into<String>) -> Self {
        ClientError::Trade {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn config(message: impl Into<String>) -> Self {
        ClientError::Config {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        ClientError::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// True for the two errors that end the session
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            ClientError::AuthenticationRequired { .. } | ClientError::SessionExpired { .. }
        )
    }

    /// HTTP status of a backend rejection, if this is one
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

impl From<CoreError> for ClientError {
    #[track_caller]
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation { message, .. } => ClientError::validation(message),
            other => ClientError::validation(other.to_string()),
        }
    }
}

impl From<ConfigError> for ClientError {
    #[track_caller]
    fn from(err: ConfigError) -> Self {
        ClientError::config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
