// ABOUTME: ActivitySeriesBuilder - pure mapping from activity, sample catalog, and date to detail view data
// ABOUTME: One catalog pass feeds summary stats, chart series, zones, pace, and recovery
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cardio Series Contributors

//! # Activity Series Builder
//!
//! Stateless transformation stage behind the activity detail view. The
//! builder holds only configuration and the user's date of birth, so one
//! instance can be shared across threads and invoked with any inputs.
//!
//! Sparse or empty minute data never fails a call: summary statistics fall
//! back to the activity's own aggregates and the series come back empty.

use crate::config::{ActivityDetailConfig, ConfigError};
use crate::pace::StepStats;
use crate::recovery::RecoveryStats;
use crate::request::ActivityDetailRequest;
use crate::series::{build_heart_rate_series, build_intensity_series, ChartSeries};
use crate::summary::{compute_summary_stats, SummaryStats};
use crate::window::{split_catalog, ActivityWindow};
use crate::zones::ZoneDistribution;
use cardio_core::constants::resolution::HIGH_PRECISION_MARGIN;
use cardio_core::constants::time::SECONDS_PER_MINUTE_F64;
use cardio_core::errors::{AppError, AppResult};
use cardio_core::intelligence::algorithms::age_on;
use cardio_core::models::{Activity, MinuteData};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Density of the samples inside the activity window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleResolution {
    /// About one sample per minute
    Minute,
    /// Noticeably more samples than minutes (per-second feeds)
    Second,
}

impl SampleResolution {
    /// Classify `sample_count` samples over `duration_seconds`
    #[must_use]
    pub fn classify(sample_count: usize, duration_seconds: i64) -> Self {
        let duration_minutes = duration_seconds as f64 / SECONDS_PER_MINUTE_F64;
        if sample_count as f64 > duration_minutes + HIGH_PRECISION_MARGIN {
            Self::Second
        } else {
            Self::Minute
        }
    }
}

/// Everything the activity detail view displays, computed fresh per call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityDetail {
    /// Identifier of the described activity
    pub activity_id: String,
    /// Duration, heart rate, calories, distance
    #[serde(flatten)]
    pub summary: SummaryStats,
    /// `(minute_offset, bpm)` for measured minutes
    pub heart_rate_series: ChartSeries,
    /// `(minute_offset, steps)` for every sampled minute
    pub intensity_series: ChartSeries,
    /// Time in heart rate zones, `None` without measured heart rate
    pub zones: Option<ZoneDistribution>,
    /// Step totals, walking detection, pace
    pub steps: StepStats,
    /// Heart rate recovery after the activity
    pub recovery: Option<RecoveryStats>,
    /// Density of the window samples
    pub resolution: SampleResolution,
}

/// Builds `ActivityDetail` values from read-only inputs
#[derive(Debug, Clone, Default)]
pub struct ActivitySeriesBuilder {
    config: ActivityDetailConfig,
    date_of_birth: Option<NaiveDate>,
}

impl ActivitySeriesBuilder {
    /// Builder with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder using the process-wide configuration loaded from `CARDIO_*` variables
    #[must_use]
    pub fn from_env() -> Self {
        // The global instance is validated or replaced by defaults
        Self {
            config: ActivityDetailConfig::global().clone(),
            date_of_birth: None,
        }
    }

    /// Use an explicit configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration fails validation
    pub fn with_config(mut self, config: ActivityDetailConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Position heart rate zones on the age derived from this birth date
    #[must_use]
    pub const fn with_date_of_birth(mut self, date_of_birth: Option<NaiveDate>) -> Self {
        self.date_of_birth = date_of_birth;
        self
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &ActivityDetailConfig {
        &self.config
    }

    /// Samples of `all_minutes` inside the activity window on `selected_date`, sorted by time
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidWindow` when the activity ends before it
    /// starts by more than the configured tolerance
    pub fn filter_minutes_for_activity(
        &self,
        activity: &Activity,
        all_minutes: &[MinuteData],
        selected_date: NaiveDate,
    ) -> AppResult<Vec<MinuteData>> {
        let window = ActivityWindow::for_activity(
            activity,
            selected_date,
            self.config.window_tolerance_seconds,
        )?;
        Ok(split_catalog(all_minutes, &window, Duration::zero()).window)
    }

    /// Compute the full activity detail
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidWindow` when the activity ends before it
    /// starts by more than the configured tolerance
    pub fn build(
        &self,
        activity: &Activity,
        all_minutes: &[MinuteData],
        selected_date: NaiveDate,
    ) -> AppResult<ActivityDetail> {
        let window = ActivityWindow::for_activity(
            activity,
            selected_date,
            self.config.window_tolerance_seconds,
        )?;
        let split = split_catalog(
            all_minutes,
            &window,
            Duration::try_minutes(self.config.recovery.window_minutes).unwrap_or(Duration::MAX),
        );

        debug!(
            activity_id = %activity.id(),
            selected_date = %selected_date,
            window_seconds = window.duration_seconds(),
            catalog_size = all_minutes.len(),
            window_samples = split.window.len(),
            tail_samples = split.tail.len(),
            "Filtered minute catalog for activity"
        );

        let start = activity.start();
        let summary = compute_summary_stats(&split.window, activity);
        let max_heart_rate = self.max_heart_rate(selected_date)?;

        Ok(ActivityDetail {
            activity_id: activity.id().to_owned(),
            heart_rate_series: build_heart_rate_series(&split.window, start),
            intensity_series: build_intensity_series(&split.window, start),
            zones: ZoneDistribution::from_minutes(
                &split.window,
                max_heart_rate,
                &self.config.zones,
            ),
            steps: StepStats::compute(
                activity,
                &split.window,
                summary.duration_seconds,
                &self.config.walking,
            ),
            recovery: RecoveryStats::compute(
                &split.window,
                &split.tail,
                window.end(),
                &self.config.recovery,
            ),
            resolution: SampleResolution::classify(split.window.len(), summary.duration_seconds),
            summary,
        })
    }

    /// Compute the detail for a deserialized request
    ///
    /// The request's date of birth overrides the builder's.
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidWindow` when the request carries no
    /// activity, plus every error of [`Self::build`]
    pub fn build_request(&self, request: &ActivityDetailRequest) -> AppResult<ActivityDetail> {
        let activity = request
            .activity
            .as_ref()
            .ok_or_else(|| AppError::invalid_window("request carries no activity"))?;

        let builder = match request.date_of_birth {
            Some(dob) => self.clone().with_date_of_birth(Some(dob)),
            None => self.clone(),
        };
        builder.build(activity, &request.minutes, request.selected_date)
    }

    /// Maximum heart rate for the user on `on`, using the configured formula
    ///
    /// `default_age` is validated on every path into the builder, so only an
    /// out-of-range date of birth can miss and that falls back to it.
    fn max_heart_rate(&self, on: NaiveDate) -> AppResult<f64> {
        let algorithm = self.config.max_hr_algorithm;
        let age = match self.date_of_birth.and_then(|dob| age_on(dob, on)) {
            Some(age) if algorithm.estimate(age, None).is_ok() => age,
            Some(age) => {
                warn!(
                    age,
                    default_age = self.config.default_age,
                    "Age from date of birth out of range, using default age"
                );
                self.config.default_age
            }
            None => self.config.default_age,
        };
        algorithm.estimate(age, None)
    }
}
