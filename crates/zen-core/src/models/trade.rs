use crate::{CoreError, CoreResult, UserHoldings};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeAction {
    Buy,
    Sell,
}

impl TradeAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
        }
    }

    /// Past-tense verb used in trade confirmations
    pub fn past_tense(&self) -> &'static str {
        match self {
            Self::Buy => "purchased",
            Self::Sell => "sold",
        }
    }
}

impl FromStr for TradeAction {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "buy" => Ok(Self::Buy),
            "sell" => Ok(Self::Sell),
            _ => Err(CoreError::InvalidTradeAction {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for TradeAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Body of `POST /api/holdings/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRequest {
    pub ticker: String,
    pub quantity: f64,
    pub total_value: f64,
    pub action: TradeAction,
}

impl TradeRequest {
    /// Validate a trade before it leaves the client
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        if self.ticker.trim().is_empty() {
            return Err(CoreError::Validation {
                message: "Ticker must not be empty".into(),
                field: Some("ticker".into()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if !(self.quantity > 0.0) {
            return Err(CoreError::Validation {
                message: format!("Quantity must be positive, got {}", self.quantity),
                field: Some("quantity".into()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if !(self.total_value >= 0.0) {
            return Err(CoreError::Validation {
                message: format!("Total value must not be negative, got {}", self.total_value),
                field: Some("total_value".into()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeResponse {
    pub message: String,
    pub holdings: UserHoldings,
}
