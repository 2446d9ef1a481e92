use crate::PreferenceType;

use std::str::FromStr;

#[test]
fn test_preference_type_round_trips_through_str() {
    for kind in [PreferenceType::Watchlist, PreferenceType::Dislike] {
        assert_eq!(PreferenceType::from_str(kind.as_str()).unwrap(), kind);
    }
    assert!(PreferenceType::from_str("favourite").is_err());
}

#[test]
fn test_preference_list_name() {
    assert_eq!(PreferenceType::Watchlist.list_name(), "watchlist");
    assert_eq!(PreferenceType::Dislike.list_name(), "dislike list");
}
