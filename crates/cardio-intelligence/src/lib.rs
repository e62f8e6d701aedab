// ABOUTME: Activity detail engine turning per-minute samples into chart series and statistics
// ABOUTME: Window filtering, summary stats, heart rate zones, pace, and recovery
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cardio Series Contributors

#![deny(unsafe_code)]

//! # Cardio Intelligence
//!
//! Given one `Activity`, a catalog of `MinuteData` samples, and the calendar
//! date being viewed, derives everything an activity detail view displays.
//! All operations are pure functions of their inputs.
//!
//! ```
//! use cardio_core::models::{ActivityBuilder, MinuteData};
//! use cardio_intelligence::ActivitySeriesBuilder;
//! use chrono::NaiveDate;
//!
//! let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
//! let at = |h, m| date.and_hms_opt(h, m, 0).unwrap();
//! let activity = ActivityBuilder::new("walk-1", "Walk", at(10, 0), at(10, 30)).build();
//! let minutes = vec![
//!     MinuteData::new(at(10, 0), Some(110), 80),
//!     MinuteData::new(at(10, 4), Some(130), 95),
//! ];
//!
//! let detail = ActivitySeriesBuilder::new().build(&activity, &minutes, date).unwrap();
//! assert_eq!(detail.heart_rate_series.len(), 2);
//! assert_eq!(detail.summary.peak_heart_rate, Some(130));
//! ```

/// Environment-driven configuration
pub mod config;

/// Activity window derivation and catalog filtering
pub mod window;

/// Heart rate and intensity chart series
pub mod series;

/// Summary statistics with activity fallback
pub mod summary;

/// Heart rate zone distribution
pub mod zones;

/// Step totals, walking detection, and pace
pub mod pace;

/// Post-activity heart rate recovery
pub mod recovery;

/// Serializable request boundary
pub mod request;

/// `ActivitySeriesBuilder` orchestrating the derivations
pub mod builder;

pub use builder::{ActivityDetail, ActivitySeriesBuilder, SampleResolution};
pub use config::{ActivityDetailConfig, ConfigError};
pub use request::ActivityDetailRequest;
pub use series::{build_heart_rate_series, build_intensity_series, minute_offset, ChartSeries, SeriesPoint};
pub use summary::{compute_summary_stats, HeartRateSource, SummaryStats};
pub use window::ActivityWindow;
pub use zones::{HeartRateZone, ZoneDistribution};
