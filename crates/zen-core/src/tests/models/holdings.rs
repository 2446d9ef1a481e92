use crate::{DEFAULT_STARTING_BALANCE, UserHoldings};

use chrono::Utc;

#[test]
fn test_seeded_holdings_default_balance() {
    let holdings = UserHoldings::seeded(None, Utc::now());
    assert_eq!(holdings.balance, DEFAULT_STARTING_BALANCE);
    assert!(holdings.positions.is_empty());
}

#[test]
fn test_holdings_accept_numeric_and_string_values() {
    let holdings: UserHoldings = serde_json::from_str(
        r#"{
            "id": 3,
            "balance": "9500.50",
            "positions": [{
                "id": 1,
                "ticker": "NVDA",
                "quantity": 2,
                "total_value": 499.5,
                "created_at": "2025-01-01T00:00:00Z",
                "updated_at": "2025-01-01T00:00:00Z"
            }],
            "created_at": "2025-01-01T00:00:00Z",
            "updated_at": "2025-01-01T00:00:00Z"
        }"#,
    )
    .unwrap();

    assert_eq!(holdings.balance, 9500.5);
    assert_eq!(holdings.position("NVDA").unwrap().quantity, 2.0);
    assert_eq!(holdings.invested_value(), 499.5);
    assert!(holdings.position("AAPL").is_none());
}
