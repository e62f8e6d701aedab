// ABOUTME: Post-activity heart rate recovery at fixed checkpoints after the activity end
// ABOUTME: Matches each checkpoint to the nearest measured sample within a tolerance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cardio Series Contributors

use crate::config::RecoveryConfig;
use cardio_core::models::MinuteData;
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Heart rate at one checkpoint after the activity end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoveryCheckpoint {
    /// Minutes after the activity end
    pub minutes_after_end: i64,
    /// Nearest measured heart rate, `None` when nothing lies within tolerance
    pub heart_rate: Option<u32>,
    /// `end_heart_rate - heart_rate`; negative when the heart rate rose
    pub drop: Option<i64>,
}

/// Heart rate recovery after an activity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoveryStats {
    /// Measured heart rate nearest the activity end
    pub end_heart_rate: u32,
    /// One entry per configured checkpoint, in order
    pub checkpoints: Vec<RecoveryCheckpoint>,
}

impl RecoveryStats {
    /// Compute recovery from the window and tail samples
    ///
    /// `window` and `tail` must be sorted; every tail sample is at or after
    /// `end`. Returns `None` when the tail does not reach past
    /// `end + min_tail_seconds`, no measured heart rate lies near the end, or
    /// no checkpoint resolves.
    #[must_use]
    pub fn compute(
        window: &[MinuteData],
        tail: &[MinuteData],
        end: NaiveDateTime,
        config: &RecoveryConfig,
    ) -> Option<Self> {
        let min_tail = end.checked_add_signed(Duration::try_seconds(config.min_tail_seconds)?)?;
        if !tail.iter().any(|s| s.timestamp > min_tail) {
            return None;
        }

        let tolerance = Duration::try_seconds(config.tolerance_seconds)?;
        let samples = || window.iter().chain(tail.iter());
        let end_heart_rate = nearest_measured(samples(), end, tolerance)?;

        let checkpoints: Vec<RecoveryCheckpoint> = config
            .checkpoint_minutes
            .iter()
            .map(|&minutes| {
                let heart_rate = Duration::try_minutes(minutes)
                    .and_then(|offset| end.checked_add_signed(offset))
                    .and_then(|target| nearest_measured(samples(), target, tolerance));
                RecoveryCheckpoint {
                    minutes_after_end: minutes,
                    heart_rate,
                    drop: heart_rate.map(|bpm| i64::from(end_heart_rate) - i64::from(bpm)),
                }
            })
            .collect();

        checkpoints
            .iter()
            .any(|c| c.heart_rate.is_some())
            .then_some(Self {
                end_heart_rate,
                checkpoints,
            })
    }
}

/// Measured heart rate of the sample closest to `target`, ties going to the earlier sample
fn nearest_measured<'a>(
    samples: impl Iterator<Item = &'a MinuteData>,
    target: NaiveDateTime,
    tolerance: Duration,
) -> Option<u32> {
    samples
        .filter_map(|s| {
            let delta = s.timestamp - target;
            let distance = if delta < Duration::zero() { -delta } else { delta };
            s.measured_heart_rate().map(|bpm| (distance, bpm))
        })
        .filter(|(distance, _)| *distance <= tolerance)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, bpm)| bpm)
}
