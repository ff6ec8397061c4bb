#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_config_is_valid() {
    assert!(EngineConfig::default().validate().is_ok());
}

#[test]
fn default_matches_engine_constants() {
    let config = EngineConfig::default();
    assert_eq!(config.min_scale, MIN_SCALE);
    assert_eq!(config.max_scale, MAX_SCALE);
    assert_eq!(config.snap_grid, None);
    assert_eq!(config.minimap_size, Size::new(MINIMAP_WIDTH, MINIMAP_HEIGHT));
}

#[test]
fn inverted_scale_bounds_are_rejected() {
    let config = EngineConfig { min_scale: 2.0, max_scale: 1.0, ..EngineConfig::default() };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidScaleBounds { .. })
    ));
}

#[test]
fn non_positive_min_scale_is_rejected() {
    let config = EngineConfig { min_scale: 0.0, ..EngineConfig::default() };
    assert!(config.validate().is_err());
    let config = EngineConfig { min_scale: -0.5, ..EngineConfig::default() };
    assert!(config.validate().is_err());
}

#[test]
fn non_finite_scale_bounds_are_rejected() {
    let config = EngineConfig { max_scale: f64::INFINITY, ..EngineConfig::default() };
    assert!(config.validate().is_err());
    let config = EngineConfig { min_scale: f64::NAN, ..EngineConfig::default() };
    assert!(config.validate().is_err());
}

#[test]
fn equal_scale_bounds_are_allowed() {
    let config = EngineConfig { min_scale: 1.0, max_scale: 1.0, ..EngineConfig::default() };
    assert!(config.validate().is_ok());
}

#[test]
fn snap_grid_must_be_positive_and_finite() {
    let good = EngineConfig { snap_grid: Some(25.0), ..EngineConfig::default() };
    assert!(good.validate().is_ok());

    for bad_step in [0.0, -10.0, f64::NAN, f64::INFINITY] {
        let config = EngineConfig { snap_grid: Some(bad_step), ..EngineConfig::default() };
        assert!(
            matches!(config.validate(), Err(ConfigError::InvalidSnapGrid(_))),
            "step {bad_step} should be rejected"
        );
    }
}

#[test]
fn minimap_size_must_be_positive() {
    let config = EngineConfig {
        minimap_size: Size::new(0.0, 100.0),
        ..EngineConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidMinimapSize { .. })
    ));
}

#[test]
fn config_errors_render_readable_messages() {
    let err = ConfigError::InvalidScaleBounds { min: 2.0, max: 1.0 };
    assert_eq!(err.to_string(), "scale bounds must satisfy 0 < min <= max, got 2..1");
    let err = ConfigError::InvalidSnapGrid(-1.0);
    assert_eq!(err.to_string(), "snap grid must be positive and finite, got -1");
}
