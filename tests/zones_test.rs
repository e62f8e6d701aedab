// ABOUTME: Integration tests for heart rate zone distribution and max heart rate selection
// ABOUTME: Checks band counts, percentage shares, age handling, and formula overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cardio Series Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use cardio_intelligence::config::HeartRateZoneConfig;
use cardio_intelligence::{HeartRateZone, ZoneDistribution};
use cardio_series::{ActivityDetailConfig, ActivitySeriesBuilder, MaxHrAlgorithm, MinuteData};
use chrono::NaiveDate;
use common::{at, hr, init_test_logging, morning_walk, test_date};

fn mixed_samples() -> Vec<MinuteData> {
    vec![
        hr(at(10, 0), 50),
        hr(at(10, 1), 70),
        hr(at(10, 2), 90),
        hr(at(10, 3), 110),
        hr(at(10, 4), 140),
        hr(at(10, 5), 160),
        MinuteData::new(at(10, 6), Some(0), 30),
        MinuteData::new(at(10, 7), None, 30),
    ]
}

#[test]
fn test_distribution_counts_only_measured_minutes() {
    // Fox at the default age of 30: max 190, bounds near 57, 76, 95, 123.5, 152
    let zones =
        ZoneDistribution::from_minutes(&mixed_samples(), 190.0, &HeartRateZoneConfig::default())
            .unwrap();

    for zone in HeartRateZone::ALL {
        assert_eq!(zones.minutes_in(zone), 1, "{zone:?}");
    }
    assert_eq!(zones.total_minutes, 6);
    assert_eq!(zones.fat_burn_percent, 33);
    assert_eq!(zones.cardio_percent, 50);
}

#[test]
fn test_no_measured_heart_rate_yields_no_distribution() {
    let samples = vec![MinuteData::new(at(10, 0), Some(0), 80)];
    assert!(
        ZoneDistribution::from_minutes(&samples, 190.0, &HeartRateZoneConfig::default()).is_none()
    );
}

#[test]
fn test_builder_uses_default_age_without_birth_date() {
    init_test_logging();
    let detail = ActivitySeriesBuilder::new()
        .build(&morning_walk(), &mixed_samples(), test_date())
        .unwrap();
    let zones = detail.zones.unwrap();
    assert!((zones.max_heart_rate - 190.0).abs() < f64::EPSILON);
    assert_eq!(zones.total_minutes, 6);
}

#[test]
fn test_builder_uses_configured_formula() {
    let config = ActivityDetailConfig {
        max_hr_algorithm: MaxHrAlgorithm::Tanaka,
        ..ActivityDetailConfig::default()
    };
    let detail = ActivitySeriesBuilder::new()
        .with_config(config)
        .unwrap()
        .build(&morning_walk(), &mixed_samples(), test_date())
        .unwrap();
    // 208 - 0.7 x 30
    assert!((detail.zones.unwrap().max_heart_rate - 187.0).abs() < 1e-9);
}

#[test]
fn test_birth_date_after_selected_date_falls_back_to_default_age() {
    let builder = ActivitySeriesBuilder::new()
        .with_date_of_birth(NaiveDate::from_ymd_opt(2030, 1, 1));
    let zones = builder
        .build(&morning_walk(), &mixed_samples(), test_date())
        .unwrap()
        .zones
        .unwrap();
    assert!((zones.max_heart_rate - 190.0).abs() < f64::EPSILON);
}

#[test]
fn test_age_counts_completed_years_at_selected_date() {
    // Turns 45 the day after the selected date
    let builder = ActivitySeriesBuilder::new()
        .with_date_of_birth(NaiveDate::from_ymd_opt(1980, 3, 15));
    let zones = builder
        .build(&morning_walk(), &mixed_samples(), test_date())
        .unwrap()
        .zones
        .unwrap();
    assert!((zones.max_heart_rate - 176.0).abs() < f64::EPSILON);
}

#[test]
fn test_custom_zone_bounds() {
    let config = HeartRateZoneConfig {
        rest_upper: 0.5,
        light_upper: 0.6,
        fat_burn_upper: 0.7,
        cardio_upper: 0.8,
        peak_upper: 0.9,
    };
    assert!(config.validate().is_ok());
    // max 200: 99 bpm is below the 100 bpm rest bound
    assert_eq!(HeartRateZone::classify(99, 200.0, &config), HeartRateZone::Rest);
    assert_eq!(HeartRateZone::classify(175, 200.0, &config), HeartRateZone::Peak);
}
