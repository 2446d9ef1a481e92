use crate::{TradeAction, TradeRequest};

use std::str::FromStr;

fn trade(quantity: f64, total_value: f64) -> TradeRequest {
    TradeRequest {
        ticker: "AAPL".into(),
        quantity,
        total_value,
        action: TradeAction::Buy,
    }
}

#[test]
fn test_trade_action_from_str() {
    assert_eq!(TradeAction::from_str("buy").unwrap(), TradeAction::Buy);
    assert_eq!(TradeAction::from_str("sell").unwrap(), TradeAction::Sell);
    assert!(TradeAction::from_str("short").is_err());
}

#[test]
fn test_trade_action_serializes_lowercase() {
    let json = serde_json::to_string(&trade(1.0, 10.0)).unwrap();
    assert!(json.contains(r#""action":"buy""#));
}

#[test]
fn test_trade_validate_accepts_positive_quantity() {
    assert!(trade(2.0, 300.0).validate().is_ok());
}

#[test]
fn test_trade_validate_rejects_zero_and_nan_quantity() {
    assert!(trade(0.0, 300.0).validate().is_err());
    assert!(trade(f64::NAN, 300.0).validate().is_err());
}

#[test]
fn test_trade_validate_rejects_empty_ticker() {
    let mut request = trade(1.0, 10.0);
    request.ticker = "  ".into();
    assert!(request.validate().is_err());
}
