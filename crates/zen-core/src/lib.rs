pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreResult};
pub use models::credentials::{LoginCredentials, RegisterRequest};
pub use models::health::HealthCheckResult;
pub use models::holdings::{StockHolding, UserHoldings};
pub use models::market_status::{MarketEvent, MarketStatus};
pub use models::onboarding::{OnboardingRequest, OnboardingResponse, OnboardingStatus};
pub use models::stock::{Stock, ZodiacMatchedStocks};
pub use models::stock_preference::{PreferenceType, StockPreference};
pub use models::token_pair::TokenPair;
pub use models::trade::{TradeAction, TradeRequest, TradeResponse};
pub use models::user_record::{ProfileRecord, UserRecord};

/// Starting balance used when a profile carries none
pub const DEFAULT_STARTING_BALANCE: f64 = 100_000.0;
