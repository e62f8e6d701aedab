// ABOUTME: Heart rate zone distribution relative to the user's maximum heart rate
// ABOUTME: Classifies measured minutes into six bands with a parallel fold/reduce pass
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cardio Series Contributors

use crate::config::HeartRateZoneConfig;
use cardio_core::constants::units::PERCENTAGE_MULTIPLIER;
use cardio_core::models::MinuteData;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Heart rate band, ordered from lowest to highest intensity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeartRateZone {
    /// Below the rest bound (sedentary)
    Rest,
    /// Between rest and light bounds
    Light,
    /// Between light and fat burn bounds
    FatBurn,
    /// Between fat burn and cardio bounds
    Cardio,
    /// Between cardio and peak bounds
    Peak,
    /// At or above the peak bound
    Max,
}

impl HeartRateZone {
    /// All zones in ascending order
    pub const ALL: [Self; 6] = [
        Self::Rest,
        Self::Light,
        Self::FatBurn,
        Self::Cardio,
        Self::Peak,
        Self::Max,
    ];

    /// Classify `bpm` against `max_heart_rate` using the configured bounds
    #[must_use]
    pub fn classify(bpm: u32, max_heart_rate: f64, config: &HeartRateZoneConfig) -> Self {
        let bpm = f64::from(bpm);
        config
            .bounds()
            .iter()
            .position(|fraction| bpm < max_heart_rate * fraction)
            .map_or(Self::Max, |idx| Self::ALL[idx])
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// Minutes spent in each zone during the activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneDistribution {
    /// Maximum heart rate the bands were positioned on
    pub max_heart_rate: f64,
    /// Measured minutes per zone, indexed like `HeartRateZone::ALL`
    pub minutes: [u32; 6],
    /// Total measured minutes
    pub total_minutes: u32,
    /// Share of light + fat burn minutes, truncated to a whole percent
    pub fat_burn_percent: u32,
    /// Share of cardio + peak + max minutes, truncated to a whole percent
    pub cardio_percent: u32,
}

impl ZoneDistribution {
    /// Distribute measured samples over the zones
    ///
    /// Returns `None` when no sample carries a measured heart rate.
    #[must_use]
    pub fn from_minutes(
        samples: &[MinuteData],
        max_heart_rate: f64,
        config: &HeartRateZoneConfig,
    ) -> Option<Self> {
        // Per-thread counts merged at the end
        let minutes = samples
            .par_iter()
            .filter_map(MinuteData::measured_heart_rate)
            .fold(
                || [0_u32; 6],
                |mut counts, bpm| {
                    counts[HeartRateZone::classify(bpm, max_heart_rate, config).index()] += 1;
                    counts
                },
            )
            .reduce(
                || [0_u32; 6],
                |mut a, b| {
                    for (acc, n) in a.iter_mut().zip(b) {
                        *acc += n;
                    }
                    a
                },
            );

        let total_minutes: u32 = minutes.iter().sum();
        if total_minutes == 0 {
            return None;
        }

        let share = |count: u32| {
            (f64::from(count) * PERCENTAGE_MULTIPLIER / f64::from(total_minutes)) as u32
        };

        Some(Self {
            max_heart_rate,
            minutes,
            total_minutes,
            fat_burn_percent: share(minutes[1] + minutes[2]),
            cardio_percent: share(minutes[3] + minutes[4] + minutes[5]),
        })
    }

    /// Measured minutes spent in `zone`
    #[must_use]
    pub const fn minutes_in(&self, zone: HeartRateZone) -> u32 {
        self.minutes[zone.index()]
    }
}
