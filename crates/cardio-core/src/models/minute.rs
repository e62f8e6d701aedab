// ABOUTME: Per-minute sensor sample model (heart rate and step count)
// ABOUTME: A zero or missing heart rate means "not measured", zero steps is a real value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cardio Series Contributors

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One sensor sample for a single calendar minute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinuteData {
    /// Sample timestamp (minute resolution, seconds allowed for dense feeds)
    pub timestamp: NaiveDateTime,
    /// Heart rate in BPM; `None` and `Some(0)` both mean no measurement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heart_rate: Option<u32>,
    /// Steps counted in this minute
    #[serde(default)]
    pub steps: u32,
}

impl MinuteData {
    /// Creates a sample
    #[must_use]
    pub const fn new(timestamp: NaiveDateTime, heart_rate: Option<u32>, steps: u32) -> Self {
        Self {
            timestamp,
            heart_rate,
            steps,
        }
    }

    /// Heart rate when actually measured
    #[must_use]
    pub fn measured_heart_rate(&self) -> Option<u32> {
        self.heart_rate.filter(|&bpm| bpm > 0)
    }

    /// Calendar date the sample belongs to
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}
