use crate::tests::START_MILLIS;
use crate::{Clock, ManualClock, SystemClock};

use std::time::Duration;

#[test]
fn test_manual_clock_only_moves_when_advanced() {
    let clock = ManualClock::new(START_MILLIS);
    assert_eq!(clock.now_millis(), START_MILLIS);
    assert_eq!(clock.now_millis(), START_MILLIS);

    clock.advance(Duration::from_secs(30));
    assert_eq!(clock.now_millis(), START_MILLIS + 30_000);

    clock.set(5);
    assert_eq!(clock.now_millis(), 5);
}

#[test]
fn test_manual_clock_now_matches_millis() {
    let clock = ManualClock::new(START_MILLIS);
    assert_eq!(clock.now().to_rfc3339(), "2024-01-01T00:00:00+00:00");
}

#[test]
fn test_system_clock_is_after_2024() {
    assert!(SystemClock.now_millis() > START_MILLIS);
}
