// ABOUTME: Summary statistics for an activity from its filtered minute samples
// ABOUTME: Falls back to the activity's own aggregates when no heart rate was measured
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cardio Series Contributors

use cardio_core::constants::time::SECONDS_PER_MINUTE;
use cardio_core::models::{Activity, MinuteData};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Where the heart rate figures of a summary came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeartRateSource {
    /// Computed from measured minute samples
    Samples,
    /// Copied from the activity's pre-aggregated values
    ActivityFallback,
}

/// Summary statistics shown next to the activity charts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// `end - start` of the activity, 60 for a single-minute window
    pub duration_seconds: i64,
    /// Mean of measured heart rates, or the activity average
    pub average_heart_rate: Option<f64>,
    /// Max of measured heart rates, or the activity peak
    pub peak_heart_rate: Option<u32>,
    /// Calories from the activity record
    pub calories: u32,
    /// Distance in kilometers from the activity record
    pub distance_km: Option<f64>,
    /// Origin of the heart rate figures
    pub heart_rate_source: HeartRateSource,
}

/// Compute summary statistics over `filtered` samples of `activity`
///
/// Only measured heart rates count toward average and peak. Duration always
/// comes from the activity bounds since samples may be sparse.
#[must_use]
pub fn compute_summary_stats(filtered: &[MinuteData], activity: &Activity) -> SummaryStats {
    let (sum, count, peak) = filtered
        .iter()
        .filter_map(MinuteData::measured_heart_rate)
        .fold((0_u64, 0_u32, 0_u32), |(sum, count, peak), bpm| {
            (sum + u64::from(bpm), count + 1, peak.max(bpm))
        });

    let (average_heart_rate, peak_heart_rate, heart_rate_source) = if count > 0 {
        (
            Some(sum as f64 / f64::from(count)),
            Some(peak),
            HeartRateSource::Samples,
        )
    } else {
        debug!(
            activity_id = %activity.id(),
            sample_count = filtered.len(),
            "No measured heart rate in activity window, using activity aggregates"
        );
        (
            activity.average_heart_rate().map(f64::from),
            activity.peak_heart_rate(),
            HeartRateSource::ActivityFallback,
        )
    };

    let raw_duration = activity.duration_seconds();
    let duration_seconds = if raw_duration > 0 {
        raw_duration
    } else {
        SECONDS_PER_MINUTE
    };

    SummaryStats {
        duration_seconds,
        average_heart_rate,
        peak_heart_rate,
        calories: activity.calories(),
        distance_km: activity.distance_km(),
        heart_rate_source,
    }
}
