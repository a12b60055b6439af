use fsr_pad::{Config, ConfigError, MAX_WINDOW};

#[test]
fn default_config_is_valid() {
    let config = Config::default();

    assert_eq!(config.validate(), Ok(()));
    assert_eq!(config.default_threshold, 200);
    assert_eq!(config.padding, 1);
    assert_eq!(config.tick_period_us, 1000);
}

#[test]
fn window_bounds() {
    let config = Config {
        window: 1,
        ..Config::default()
    };
    assert_eq!(config.validate(), Err(ConfigError::WindowTooSmall));

    let config = Config {
        window: MAX_WINDOW + 1,
        ..Config::default()
    };
    assert_eq!(config.validate(), Err(ConfigError::WindowTooLarge));

    let config = Config {
        window: MAX_WINDOW,
        ..Config::default()
    };
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn negative_padding_rejected() {
    let config = Config {
        padding: -1,
        ..Config::default()
    };
    assert_eq!(config.validate(), Err(ConfigError::NegativePadding));
}

#[test]
fn zero_tick_period_rejected() {
    let config = Config {
        tick_period_us: 0,
        ..Config::default()
    };
    assert_eq!(config.validate(), Err(ConfigError::ZeroTickPeriod));
}

#[test]
fn errors_display() {
    assert_eq!(
        ConfigError::WindowTooLarge.to_string(),
        "filter window must not exceed 100"
    );
    assert_eq!(
        ConfigError::NegativePadding.to_string(),
        "hysteresis padding must not be negative"
    );
}
