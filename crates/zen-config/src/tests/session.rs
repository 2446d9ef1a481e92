use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use std::time::Duration;

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests - Session
// =========================================================================

#[test]
#[serial]
fn given_default_session_when_poll_interval_then_five_seconds() {
    // Given
    let _temp = setup_config_dir();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.session.poll_interval(), eq(Duration::from_secs(5)));
    assert_that!(config.session.login_path.as_str(), eq("/login"));
}

#[test]
#[serial]
fn given_poll_interval_zero_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _poll = EnvGuard::set("ZEN_SESSION_POLL_INTERVAL_SECS", "0");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_poll_interval_at_max_when_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();
    let _poll = EnvGuard::set("ZEN_SESSION_POLL_INTERVAL_SECS", "300");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_relative_login_path_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _path = EnvGuard::set("ZEN_SESSION_LOGIN_PATH", "login");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}
