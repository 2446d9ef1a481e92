use crate::LogLevel;

use std::str::FromStr;

use log::LevelFilter;

#[test]
fn test_log_level_parses_known_names() {
    assert_eq!(LogLevel::from_str("debug").unwrap().0, LevelFilter::Debug);
    assert_eq!(LogLevel::from_str("WARN").unwrap().0, LevelFilter::Warn);
    assert_eq!(LogLevel::from_str("off").unwrap().0, LevelFilter::Off);
}

#[test]
fn test_log_level_invalid_defaults_to_info() {
    assert_eq!(LogLevel::from_str("chatty").unwrap().0, LevelFilter::Info);
}
