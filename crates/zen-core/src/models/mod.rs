pub mod credentials;
pub mod decimal;
pub mod health;
pub mod holdings;
pub mod market_status;
pub mod onboarding;
pub mod stock;
pub mod stock_preference;
pub mod token_pair;
pub mod trade;
pub mod user_record;
