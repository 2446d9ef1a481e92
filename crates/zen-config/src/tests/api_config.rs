use crate::tests::{EnvGuard, setup_config_dir};
use crate::{ApiConfig, Config, RequestOrigin};

use std::str::FromStr;
use std::time::Duration;

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, ok};
use serial_test::serial;

#[test]
fn test_base_url_follows_origin() {
    let mut config = ApiConfig {
        public_url: "https://public.example.com".into(),
        internal_url: "http://backend:42069".into(),
        ..Default::default()
    };
    assert_eq!(config.base_url(), "https://public.example.com");

    config.origin = RequestOrigin::Server;
    assert_eq!(config.base_url(), "http://backend:42069");
}

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let config = ApiConfig {
        public_url: "http://localhost:42069/".into(),
        ..Default::default()
    };
    assert_eq!(config.base_url(), "http://localhost:42069");
}

#[test]
fn test_default_timeouts() {
    let config = ApiConfig::default();
    assert_eq!(config.health_timeout(), Duration::from_secs(5));
    assert_eq!(config.market_timeout(), Duration::from_secs(10));
}

#[test]
fn test_request_origin_from_str() {
    assert_eq!(
        RequestOrigin::from_str("browser").unwrap(),
        RequestOrigin::Browser
    );
    assert_eq!(
        RequestOrigin::from_str("Internal").unwrap(),
        RequestOrigin::Server
    );
    assert!(RequestOrigin::from_str("mobile").is_err());
}

// =========================================================================
// Validation Tests - API
// =========================================================================

#[test]
#[serial]
fn given_url_without_scheme_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _url = EnvGuard::set("ZEN_API_PUBLIC_URL", "localhost:42069");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("api.public_url"));
}

#[test]
#[serial]
fn given_url_without_host_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _url = EnvGuard::set("ZEN_API_INTERNAL_URL", "http://");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_https_url_when_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();
    let _url = EnvGuard::set("ZEN_API_PUBLIC_URL", "https://zen.example.com/");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_zero_health_timeout_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _timeout = EnvGuard::set("ZEN_HEALTH_TIMEOUT_SECS", "0");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_market_timeout_over_max_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _timeout = EnvGuard::set("ZEN_MARKET_TIMEOUT_SECS", "61");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_unknown_origin_env_when_load_then_keeps_browser() {
    // Given
    let _temp = setup_config_dir();
    let _origin = EnvGuard::set("ZEN_API_ORIGIN", "mobile");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.api.origin, eq(RequestOrigin::Browser));
}
