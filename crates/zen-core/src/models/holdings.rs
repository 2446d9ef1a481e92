use crate::DEFAULT_STARTING_BALANCE;
use crate::models::decimal::deserialize_f64;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One open position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockHolding {
    pub id: i64,
    pub ticker: String,
    #[serde(deserialize_with = "deserialize_f64")]
    pub quantity: f64,
    #[serde(deserialize_with = "deserialize_f64")]
    pub total_value: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Cash balance plus positions, as returned by `/api/holdings/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserHoldings {
    pub id: i64,
    #[serde(deserialize_with = "deserialize_f64")]
    pub balance: f64,
    #[serde(default)]
    pub positions: Vec<StockHolding>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserHoldings {
    /// Empty portfolio seeded with a starting balance
    pub fn seeded(starting_balance: Option<f64>, now: DateTime<Utc>) -> Self {
        Self {
            id: 1,
            balance: starting_balance.unwrap_or(DEFAULT_STARTING_BALANCE),
            positions: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn position(&self, ticker: &str) -> Option<&StockHolding> {
        self.positions.iter().find(|p| p.ticker == ticker)
    }

    pub fn invested_value(&self) -> f64 {
        self.positions.iter().map(|p| p.total_value).sum()
    }
}
