// ABOUTME: Chart series derivation from filtered minute samples
// ABOUTME: Heart rate series skips unmeasured minutes, intensity series keeps zero-step minutes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cardio Series Contributors

use cardio_core::constants::time::SECONDS_PER_MINUTE;
use cardio_core::models::MinuteData;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One `(minute_offset, value)` chart point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Whole minutes since the activity start
    pub minute_offset: i64,
    /// Sample value (BPM or steps)
    pub value: u32,
}

/// Ordered chart series, offsets strictly ascending
pub type ChartSeries = Vec<SeriesPoint>;

/// `floor((timestamp - activity_start) / 1 minute)`
#[must_use]
pub fn minute_offset(timestamp: NaiveDateTime, activity_start: NaiveDateTime) -> i64 {
    (timestamp - activity_start)
        .num_seconds()
        .div_euclid(SECONDS_PER_MINUTE)
}

/// Append a point, replacing the previous one when it shares the offset
fn push_last_wins(series: &mut ChartSeries, point: SeriesPoint) {
    match series.last_mut() {
        Some(last) if last.minute_offset == point.minute_offset => *last = point,
        _ => series.push(point),
    }
}

/// Heart rate per minute for samples with a measured (non-zero) reading
///
/// `filtered` must be sorted by timestamp. Two samples in the same minute
/// resolve to the later one.
#[must_use]
pub fn build_heart_rate_series(
    filtered: &[MinuteData],
    activity_start: NaiveDateTime,
) -> ChartSeries {
    let mut series = Vec::with_capacity(filtered.len());
    for sample in filtered {
        if let Some(bpm) = sample.measured_heart_rate() {
            push_last_wins(
                &mut series,
                SeriesPoint {
                    minute_offset: minute_offset(sample.timestamp, activity_start),
                    value: bpm,
                },
            );
        }
    }
    series
}

/// Steps per minute for every filtered sample, zero-step minutes included
///
/// `filtered` must be sorted by timestamp; duplicates resolve last-wins.
#[must_use]
pub fn build_intensity_series(
    filtered: &[MinuteData],
    activity_start: NaiveDateTime,
) -> ChartSeries {
    let mut series = Vec::with_capacity(filtered.len());
    for sample in filtered {
        push_last_wins(
            &mut series,
            SeriesPoint {
                minute_offset: minute_offset(sample.timestamp, activity_start),
                value: sample.steps,
            },
        );
    }
    series
}
