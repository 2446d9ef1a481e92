use crate::{MarketEvent, MarketStatus};

use std::str::FromStr;

#[test]
fn test_market_event_from_str() {
    assert_eq!(MarketEvent::from_str("open").unwrap(), MarketEvent::Open);
    assert_eq!(MarketEvent::from_str("close").unwrap(), MarketEvent::Close);
    assert!(MarketEvent::from_str("halt").is_err());
}

#[test]
fn test_market_status_parses_offset_timestamps() {
    let status: MarketStatus = serde_json::from_str(
        r#"{
            "is_open": false,
            "current_time": "2025-03-10T18:00:00-04:00",
            "next_event": "open",
            "next_event_time": "2025-03-11T09:30:00-04:00"
        }"#,
    )
    .unwrap();

    assert!(!status.is_open);
    assert_eq!(status.next_event, MarketEvent::Open);
    assert_eq!(status.current_time.to_rfc3339(), "2025-03-10T22:00:00+00:00");
}
