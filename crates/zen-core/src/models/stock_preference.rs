use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Which list a ticker preference belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferenceType {
    Watchlist,
    Dislike,
}

impl PreferenceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Watchlist => "watchlist",
            Self::Dislike => "dislike",
        }
    }

    /// Human-readable list name used in messages
    pub fn list_name(&self) -> &'static str {
        match self {
            Self::Watchlist => "watchlist",
            Self::Dislike => "dislike list",
        }
    }
}

impl FromStr for PreferenceType {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "watchlist" => Ok(Self::Watchlist),
            "dislike" => Ok(Self::Dislike),
            _ => Err(CoreError::InvalidPreferenceType {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for PreferenceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockPreference {
    pub id: i64,
    pub ticker: String,
    pub preference_type: PreferenceType,
    pub created_at: DateTime<Utc>,
}
