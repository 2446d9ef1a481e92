mod holdings;
mod market_status;
mod stock_preference;
mod token_pair;
mod trade;
mod user_record;
