// ABOUTME: Main library entry point for the cardio-series activity detail engine
// ABOUTME: Re-exports the workspace crates and provides request loading and logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cardio Series Contributors

#![deny(unsafe_code)]

//! # Cardio Series
//!
//! Turns a recorded activity and a catalog of per-minute samples into the
//! data behind an activity detail view: summary statistics, heart rate and
//! intensity chart series, heart rate zones, pace, and recovery.
//!
//! ## Crates
//!
//! - `cardio-core`: errors, constants, `Activity`/`MinuteData` models, max HR formulas
//! - `cardio-intelligence`: window filtering, series, statistics, and `ActivitySeriesBuilder`
//!
//! This crate adds request loading, logging setup, and the `cardio-series`
//! command-line tool.

/// JSON request loading
pub mod input;

/// Tracing subscriber configuration
pub mod logging;

pub use cardio_core::errors::{AppError, AppResult, ErrorCode};
pub use cardio_core::intelligence::MaxHrAlgorithm;
pub use cardio_core::models::{Activity, ActivityBuilder, MinuteData};
pub use cardio_intelligence::{
    build_heart_rate_series, build_intensity_series, compute_summary_stats, ActivityDetail,
    ActivityDetailConfig, ActivityDetailRequest, ActivitySeriesBuilder, ChartSeries,
    SampleResolution, SeriesPoint, SummaryStats,
};
pub use input::{parse_request, read_request_file};
