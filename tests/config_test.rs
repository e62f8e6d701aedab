// ABOUTME: Tests for activity detail configuration defaults, validation, and environment overrides
// ABOUTME: Environment-mutating tests run serially
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cardio Series Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use cardio_intelligence::config::{HeartRateZoneConfig, RecoveryConfig};
use cardio_intelligence::ConfigError;
use cardio_series::{
    ActivityDetailConfig, ActivitySeriesBuilder, AppError, ErrorCode, MaxHrAlgorithm,
};
use serial_test::serial;
use std::env;

const VARS: [&str; 6] = [
    "CARDIO_WINDOW_TOLERANCE_SECONDS",
    "CARDIO_DEFAULT_AGE",
    "CARDIO_MAX_HR_ALGORITHM",
    "CARDIO_RECOVERY_WINDOW_MINUTES",
    "CARDIO_RECOVERY_TOLERANCE_SECONDS",
    "CARDIO_WALKING_STEPS_PER_SECOND",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_default_config_validation() {
    let config = ActivityDetailConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.window_tolerance_seconds, 60);
    assert_eq!(config.default_age, 30);
    assert_eq!(config.max_hr_algorithm, MaxHrAlgorithm::Fox);
    assert_eq!(config.recovery.checkpoint_minutes, vec![1, 2, 5, 10]);
}

#[test]
fn test_unordered_zones_rejected() {
    let zones = HeartRateZoneConfig {
        light_upper: 0.55,
        ..HeartRateZoneConfig::default()
    };
    assert!(matches!(zones.validate(), Err(ConfigError::UnorderedZones(_))));

    let zones = HeartRateZoneConfig {
        peak_upper: 1.2,
        ..HeartRateZoneConfig::default()
    };
    assert!(matches!(zones.validate(), Err(ConfigError::InvalidRange(_))));
}

#[test]
fn test_checkpoint_beyond_window_rejected() {
    let recovery = RecoveryConfig {
        window_minutes: 5,
        ..RecoveryConfig::default()
    };
    assert!(recovery.validate().is_err());
}

#[test]
fn test_config_error_converts_to_app_error() {
    let error: AppError = ConfigError::ValueOutOfRange("default_age must be between 1 and 120").into();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    assert!(error.message.contains("default_age"));

    let error: AppError = ConfigError::UnorderedZones("rest < light").into();
    assert_eq!(error.code, ErrorCode::ConfigError);
}

#[test]
fn test_window_tolerance_longer_than_a_day_rejected() {
    let config = ActivityDetailConfig {
        window_tolerance_seconds: 86_401,
        ..ActivityDetailConfig::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::ValueOutOfRange(_))));

    let config = ActivityDetailConfig {
        window_tolerance_seconds: 86_400,
        ..ActivityDetailConfig::default()
    };
    assert!(config.validate().is_ok());
}

#[test]
fn test_recovery_bounds_rejected() {
    let long_window = RecoveryConfig {
        window_minutes: 1_441,
        ..RecoveryConfig::default()
    };
    assert!(matches!(long_window.validate(), Err(ConfigError::ValueOutOfRange(_))));

    let long_tolerance = RecoveryConfig {
        tolerance_seconds: i64::MAX,
        ..RecoveryConfig::default()
    };
    assert!(matches!(long_tolerance.validate(), Err(ConfigError::ValueOutOfRange(_))));

    let tail_past_window = RecoveryConfig {
        min_tail_seconds: 20 * 60 + 1,
        ..RecoveryConfig::default()
    };
    assert!(matches!(tail_past_window.validate(), Err(ConfigError::ValueOutOfRange(_))));
}

#[test]
fn test_builder_rejects_unvalidated_config() {
    let config = ActivityDetailConfig {
        window_tolerance_seconds: i64::MAX,
        ..ActivityDetailConfig::default()
    };
    assert!(ActivitySeriesBuilder::new().with_config(config).is_err());

    let config = ActivityDetailConfig {
        default_age: 0,
        ..ActivityDetailConfig::default()
    };
    let error: AppError = ActivitySeriesBuilder::new()
        .with_config(config)
        .unwrap_err()
        .into();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
}

#[test]
#[serial]
fn test_environment_variable_override() {
    clear_env();
    env::set_var("CARDIO_WINDOW_TOLERANCE_SECONDS", "120");
    env::set_var("CARDIO_MAX_HR_ALGORITHM", "Tanaka");
    env::set_var("CARDIO_WALKING_STEPS_PER_SECOND", "0.8");
    env::set_var("CARDIO_RECOVERY_TOLERANCE_SECONDS", "45");

    let config = ActivityDetailConfig::from_env().unwrap();

    assert_eq!(config.window_tolerance_seconds, 120);
    assert_eq!(config.max_hr_algorithm, MaxHrAlgorithm::Tanaka);
    assert!((config.walking.steps_per_second_threshold - 0.8).abs() < f64::EPSILON);
    assert_eq!(config.recovery.tolerance_seconds, 45);
    assert_eq!(config.recovery.window_minutes, 20);

    clear_env();
}

#[test]
#[serial]
fn test_unparseable_number_keeps_default() {
    clear_env();
    env::set_var("CARDIO_DEFAULT_AGE", "thirty");

    let config = ActivityDetailConfig::from_env().unwrap();
    assert_eq!(config.default_age, 30);

    clear_env();
}

#[test]
#[serial]
fn test_unknown_algorithm_rejected() {
    clear_env();
    env::set_var("CARDIO_MAX_HR_ALGORITHM", "karvonen");

    let result = ActivityDetailConfig::from_env();
    assert!(matches!(result, Err(ConfigError::Parse(_))));

    clear_env();
}

#[test]
#[serial]
fn test_invalid_environment_values_fail_validation() {
    clear_env();
    env::set_var("CARDIO_RECOVERY_WINDOW_MINUTES", "5");
    assert!(ActivityDetailConfig::from_env().is_err());

    clear_env();
    env::set_var("CARDIO_WINDOW_TOLERANCE_SECONDS", "9223372036854775807");
    assert!(matches!(
        ActivityDetailConfig::from_env(),
        Err(ConfigError::ValueOutOfRange(_))
    ));

    clear_env();
    env::set_var("CARDIO_DEFAULT_AGE", "0");
    assert!(matches!(
        ActivityDetailConfig::from_env(),
        Err(ConfigError::ValueOutOfRange(_))
    ));

    clear_env();
}

#[test]
#[serial]
fn test_builder_from_env_uses_valid_global_config() {
    clear_env();
    let builder = ActivitySeriesBuilder::from_env();
    assert!(builder.config().validate().is_ok());
    assert_eq!(builder.config(), ActivityDetailConfig::global());
}
