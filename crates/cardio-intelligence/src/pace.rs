// ABOUTME: Step totals, walking detection, and speed/pace estimation for an activity
// ABOUTME: Max speed is derived from the busiest minute's steps and the average stride length
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cardio Series Contributors

use crate::config::WalkingConfig;
use cardio_core::constants::time::{MINUTES_PER_HOUR_F64, SECONDS_PER_HOUR_F64, SECONDS_PER_MINUTE_F64};
use cardio_core::constants::units::METERS_PER_KILOMETER;
use cardio_core::models::{Activity, MinuteData};
use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Minutes and seconds per kilometer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pace {
    /// Whole minutes per kilometer
    pub minutes: u32,
    /// Remaining seconds per kilometer
    pub seconds: u32,
}

/// Speed figures for walking activities with a known distance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaceStats {
    /// Distance over duration
    pub average_speed_kmh: f64,
    /// Inverse of average speed
    pub pace: Pace,
    /// Estimated from the busiest minute, `None` without usable samples
    pub max_speed_kmh: Option<f64>,
}

/// Step totals and the walking classification derived from them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepStats {
    /// Provider total when positive, else the sum over the window samples
    pub display_steps: u64,
    /// `display_steps / duration_seconds`
    pub steps_per_second: f64,
    /// Whether the step cadence reaches the walking threshold
    pub is_walking: bool,
    /// Speed figures, only for walking activities with a distance
    pub pace: Option<PaceStats>,
}

impl StepStats {
    /// Derive step statistics for `activity` from its window samples
    #[must_use]
    pub fn compute(
        activity: &Activity,
        window_samples: &[MinuteData],
        duration_seconds: i64,
        config: &WalkingConfig,
    ) -> Self {
        let display_steps = match activity.steps() {
            Some(steps) if steps > 0 => u64::from(steps),
            _ => window_samples.iter().map(|s| u64::from(s.steps)).sum(),
        };

        let duration = duration_seconds as f64;
        let steps_per_second = if duration > 0.0 {
            display_steps as f64 / duration
        } else {
            0.0
        };
        let is_walking = steps_per_second >= config.steps_per_second_threshold;

        let pace = match activity.distance_km() {
            Some(distance_km) if is_walking && distance_km > 0.0 && duration > 0.0 => Some(
                pace_stats(distance_km, duration, display_steps, window_samples),
            ),
            _ => None,
        };

        Self {
            display_steps,
            steps_per_second,
            is_walking,
            pace,
        }
    }
}

fn pace_stats(
    distance_km: f64,
    duration_seconds: f64,
    display_steps: u64,
    window_samples: &[MinuteData],
) -> PaceStats {
    let average_speed_kmh = distance_km / (duration_seconds / SECONDS_PER_HOUR_F64);
    let pace_minutes = MINUTES_PER_HOUR_F64 / average_speed_kmh;
    let whole = pace_minutes.trunc();
    let pace = Pace {
        minutes: whole as u32,
        seconds: ((pace_minutes - whole) * SECONDS_PER_MINUTE_F64) as u32,
    };

    let max_speed_kmh = (display_steps > 0)
        .then(|| distance_km * METERS_PER_KILOMETER / display_steps as f64)
        .zip(busiest_minute_steps(window_samples))
        .map(|(stride_m, steps)| {
            steps as f64 * stride_m * MINUTES_PER_HOUR_F64 / METERS_PER_KILOMETER
        })
        .filter(|speed| *speed > 0.0);

    PaceStats {
        average_speed_kmh,
        pace,
        max_speed_kmh,
    }
}

/// Largest step count summed over one calendar minute
///
/// Samples are sorted, so minutes form contiguous runs.
fn busiest_minute_steps(samples: &[MinuteData]) -> Option<u64> {
    let truncate = |ts: NaiveDateTime| ts.with_second(0).unwrap_or(ts);
    let mut best: Option<u64> = None;
    let mut current: Option<(NaiveDateTime, u64)> = None;
    for sample in samples {
        let minute = truncate(sample.timestamp);
        current = match current {
            Some((m, steps)) if m == minute => Some((m, steps + u64::from(sample.steps))),
            Some((_, steps)) => {
                best = best.max(Some(steps));
                Some((minute, u64::from(sample.steps)))
            }
            None => Some((minute, u64::from(sample.steps))),
        };
    }
    if let Some((_, steps)) = current {
        best = best.max(Some(steps));
    }
    best
}
