// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup plus activity and minute-sample builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cardio Series Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `cardio_series`

use cardio_series::{Activity, ActivityBuilder, MinuteData};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Date most fixtures live on
pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
}

/// Timestamp on `test_date()`
pub fn at(hour: u32, minute: u32) -> NaiveDateTime {
    at_hms(hour, minute, 0)
}

/// Timestamp with seconds on `test_date()`
pub fn at_hms(hour: u32, minute: u32, second: u32) -> NaiveDateTime {
    test_date().and_hms_opt(hour, minute, second).unwrap()
}

/// 10:00-10:30 walk with no provider aggregates
pub fn morning_walk() -> Activity {
    ActivityBuilder::new("walk-1", "Walk", at(10, 0), at(10, 30))
        .calories(150)
        .build()
}

/// Sample with a measured heart rate
pub fn hr(timestamp: NaiveDateTime, bpm: u32) -> MinuteData {
    MinuteData::new(timestamp, Some(bpm), 0)
}

/// Sample with steps only
pub fn steps(timestamp: NaiveDateTime, count: u32) -> MinuteData {
    MinuteData::new(timestamp, None, count)
}

/// One sample per minute over `[start, start + minutes)` with constant heart rate and steps
pub fn steady_minutes(
    start: NaiveDateTime,
    minutes: i64,
    bpm: u32,
    step_count: u32,
) -> Vec<MinuteData> {
    (0..minutes)
        .map(|m| MinuteData::new(start + Duration::minutes(m), Some(bpm), step_count))
        .collect()
}
