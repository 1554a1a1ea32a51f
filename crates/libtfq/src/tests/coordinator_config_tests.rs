//! Tests for coordinator timing configuration.

use crate::CoordinatorConfig;
use std::time::Duration;

#[test]
fn default_config() {
    let config = CoordinatorConfig::default();
    assert_eq!(config.debounce(), Duration::from_millis(150));
    assert_eq!(config.oracle_timeout(), Duration::from_secs(2));
    assert_eq!(config.event_buffer, 64);
}

/// Verifies that each edit waits the full debounce until the burst has
/// lasted long enough to hit the ceiling.
#[test]
fn delay_is_capped_by_the_burst_ceiling() {
    let config = CoordinatorConfig::default()
        .with_debounce_ms(100)
        .with_max_debounce_ms(250);

    assert_eq!(config.delay_after(Duration::ZERO), Duration::from_millis(100));
    assert_eq!(config.delay_after(Duration::from_millis(200)), Duration::from_millis(50));
    assert_eq!(config.delay_after(Duration::from_millis(400)), Duration::ZERO);
}

#[test]
fn ceiling_never_undercuts_the_debounce() {
    let config = CoordinatorConfig::default()
        .with_debounce_ms(300)
        .with_max_debounce_ms(100);
    assert_eq!(config.max_debounce(), Duration::from_millis(300));
    assert_eq!(config.delay_after(Duration::ZERO), Duration::from_millis(300));
}

#[test]
fn partial_json_keeps_defaults() {
    let config: CoordinatorConfig = serde_json::from_str(r#"{"debounceMs": 40}"#).unwrap();
    assert_eq!(
        config,
        CoordinatorConfig::default().with_debounce_ms(40),
    );
}
