// ABOUTME: Exercise session model with private fields, accessors, and ActivityBuilder
// ABOUTME: Carries the time window and the pre-aggregated totals used as fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cardio Series Contributors

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One recorded exercise session
///
/// Fields are private to keep the record immutable once loaded - use the
/// accessor methods to read and `ActivityBuilder` to construct new instances.
///
/// # Examples
///
/// ```rust
/// use cardio_core::models::ActivityBuilder;
/// use chrono::{Duration, NaiveDate};
///
/// let start = NaiveDate::from_ymd_opt(2025, 3, 14)
///     .and_then(|d| d.and_hms_opt(10, 0, 0))
///     .unwrap();
/// let activity = ActivityBuilder::from_duration("42", "Walk", start, Duration::minutes(30))
///     .calories(180)
///     .distance_km(2.4)
///     .average_heart_rate(112)
///     .build();
///
/// assert_eq!(activity.id(), "42");
/// assert_eq!(activity.duration_seconds(), 1800);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Unique identifier for the activity (provider-specific)
    id: String,
    /// Activity type label (e.g. "Walk", "Run")
    name: String,
    /// When the activity started
    start: NaiveDateTime,
    /// When the activity ended
    end: NaiveDateTime,
    /// Total calories burned
    #[serde(default)]
    calories: u32,
    /// Total distance in kilometers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    distance_km: Option<f64>,
    /// Total steps recorded by the provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    steps: Option<u32>,
    /// Provider-computed average heart rate (BPM)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    average_heart_rate: Option<u32>,
    /// Provider-computed peak heart rate (BPM)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    peak_heart_rate: Option<u32>,
}

/// Accessor methods for Activity fields
impl Activity {
    /// Returns the unique identifier for the activity
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the activity type label
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns when the activity started
    #[must_use]
    pub const fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Returns when the activity ended
    #[must_use]
    pub const fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Returns `end - start` in whole seconds (negative when end precedes start)
    #[must_use]
    pub fn duration_seconds(&self) -> i64 {
        (self.end - self.start).num_seconds()
    }

    /// Returns total calories burned
    #[must_use]
    pub const fn calories(&self) -> u32 {
        self.calories
    }

    /// Returns total distance in kilometers
    #[must_use]
    pub const fn distance_km(&self) -> Option<f64> {
        self.distance_km
    }

    /// Returns total steps recorded by the provider
    #[must_use]
    pub const fn steps(&self) -> Option<u32> {
        self.steps
    }

    /// Returns the provider-computed average heart rate
    #[must_use]
    pub const fn average_heart_rate(&self) -> Option<u32> {
        self.average_heart_rate
    }

    /// Returns the provider-computed peak heart rate
    #[must_use]
    pub const fn peak_heart_rate(&self) -> Option<u32> {
        self.peak_heart_rate
    }
}

/// Builder for `Activity`
#[derive(Debug, Clone)]
pub struct ActivityBuilder {
    activity: Activity,
}

impl ActivityBuilder {
    /// Creates a new `ActivityBuilder` from explicit start and end timestamps
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Self {
        Self {
            activity: Activity {
                id: id.into(),
                name: name.into(),
                start,
                end,
                calories: 0,
                distance_km: None,
                steps: None,
                average_heart_rate: None,
                peak_heart_rate: None,
            },
        }
    }

    /// Creates a new `ActivityBuilder` from a start timestamp and a duration
    ///
    /// The end saturates at the representable time range.
    #[must_use]
    pub fn from_duration(
        id: impl Into<String>,
        name: impl Into<String>,
        start: NaiveDateTime,
        duration: Duration,
    ) -> Self {
        let end = start.checked_add_signed(duration).unwrap_or(if duration < Duration::zero() {
            NaiveDateTime::MIN
        } else {
            NaiveDateTime::MAX
        });
        Self::new(id, name, start, end)
    }

    /// Sets total calories burned
    #[must_use]
    pub const fn calories(mut self, value: u32) -> Self {
        self.activity.calories = value;
        self
    }

    /// Sets the distance in kilometers
    #[must_use]
    pub const fn distance_km(mut self, value: f64) -> Self {
        self.activity.distance_km = Some(value);
        self
    }

    /// Sets the distance in kilometers (optional)
    #[must_use]
    pub const fn distance_km_opt(mut self, value: Option<f64>) -> Self {
        self.activity.distance_km = value;
        self
    }

    /// Sets the provider step total
    #[must_use]
    pub const fn steps(mut self, value: u32) -> Self {
        self.activity.steps = Some(value);
        self
    }

    /// Sets the average heart rate
    #[must_use]
    pub const fn average_heart_rate(mut self, value: u32) -> Self {
        self.activity.average_heart_rate = Some(value);
        self
    }

    /// Sets the average heart rate (optional)
    #[must_use]
    pub const fn average_heart_rate_opt(mut self, value: Option<u32>) -> Self {
        self.activity.average_heart_rate = value;
        self
    }

    /// Sets the peak heart rate
    #[must_use]
    pub const fn peak_heart_rate(mut self, value: u32) -> Self {
        self.activity.peak_heart_rate = Some(value);
        self
    }

    /// Sets the peak heart rate (optional)
    #[must_use]
    pub const fn peak_heart_rate_opt(mut self, value: Option<u32>) -> Self {
        self.activity.peak_heart_rate = value;
        self
    }

    /// Builds the final `Activity`
    #[must_use]
    pub fn build(self) -> Activity {
        self.activity
    }
}
