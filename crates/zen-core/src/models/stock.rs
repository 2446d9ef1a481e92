use crate::models::decimal::deserialize_opt_f64;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stock with its astrological match metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stock {
    pub id: i64,
    pub ticker: String,
    pub company_name: String,
    #[serde(default, deserialize_with = "deserialize_opt_f64")]
    pub current_price: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_opt_f64")]
    pub previous_close: Option<f64>,
    #[serde(default)]
    pub market_state: Option<String>,
    pub last_updated: DateTime<Utc>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date_founded: Option<DateTime<Utc>>,
    #[serde(default)]
    pub zodiac_sign: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compatibility_score: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_same_sign: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,
}

impl Stock {
    /// Day change in percent, when both prices are known
    pub fn change_percent(&self) -> Option<f64> {
        match (self.current_price, self.previous_close) {
            (Some(current), Some(previous)) if previous != 0.0 => {
                Some((current - previous) / previous * 100.0)
            }
            _ => None,
        }
    }
}

/// Body of `GET /api/zodiac/matched-stocks/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZodiacMatchedStocks {
    pub user_sign: String,
    pub user_element: String,
    pub total_matches: usize,
    pub matched_stocks: Vec<Stock>,
}
