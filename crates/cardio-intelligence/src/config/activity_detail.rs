// ABOUTME: Activity detail configuration: window tolerance, zones, recovery, walking thresholds
// ABOUTME: Loads from CARDIO_* environment variables with validated defaults and a global instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cardio Series Contributors

use super::error::ConfigError;
use cardio_core::constants::{heart_rate, recovery, time, walking, window, zone_fractions};
use cardio_core::intelligence::MaxHrAlgorithm;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static ACTIVITY_DETAIL_CONFIG: OnceLock<ActivityDetailConfig> = OnceLock::new();

/// Read and parse an environment variable, falling back to `default`
fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

/// Heart rate zone upper bounds as fractions of maximum heart rate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeartRateZoneConfig {
    /// Rest band upper bound
    pub rest_upper: f64,
    /// Light band upper bound
    pub light_upper: f64,
    /// Fat burn band upper bound
    pub fat_burn_upper: f64,
    /// Cardio band upper bound
    pub cardio_upper: f64,
    /// Peak band upper bound; everything above is the max band
    pub peak_upper: f64,
}

impl Default for HeartRateZoneConfig {
    fn default() -> Self {
        Self {
            rest_upper: zone_fractions::REST_UPPER,
            light_upper: zone_fractions::LIGHT_UPPER,
            fat_burn_upper: zone_fractions::FAT_BURN_UPPER,
            cardio_upper: zone_fractions::CARDIO_UPPER,
            peak_upper: zone_fractions::PEAK_UPPER,
        }
    }
}

impl HeartRateZoneConfig {
    /// Bounds in ascending order
    #[must_use]
    pub const fn bounds(&self) -> [f64; 5] {
        [
            self.rest_upper,
            self.light_upper,
            self.fat_burn_upper,
            self.cardio_upper,
            self.peak_upper,
        ]
    }

    /// Validate that every bound lies in (0, 1) and the bounds strictly increase
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` describing the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bounds = self.bounds();
        if bounds.iter().any(|b| !b.is_finite() || *b <= 0.0 || *b >= 1.0) {
            return Err(ConfigError::InvalidRange(
                "zone fractions must lie strictly between 0 and 1",
            ));
        }
        if bounds.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ConfigError::UnorderedZones(
                "rest < light < fat_burn < cardio < peak",
            ));
        }
        Ok(())
    }
}

/// Post-activity recovery scan settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoveryConfig {
    /// Minutes after the activity end scanned for recovery samples
    pub window_minutes: i64,
    /// Max seconds between a checkpoint and the sample used for it
    pub tolerance_seconds: i64,
    /// Tail must contain a sample later than `end + min_tail_seconds`
    pub min_tail_seconds: i64,
    /// Checkpoints after the activity end, in minutes
    pub checkpoint_minutes: Vec<i64>,
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self {
            window_minutes: recovery::DEFAULT_WINDOW_MINUTES,
            tolerance_seconds: recovery::DEFAULT_TOLERANCE_SECONDS,
            min_tail_seconds: recovery::MIN_TAIL_SECONDS,
            checkpoint_minutes: recovery::CHECKPOINT_MINUTES.to_vec(),
        }
    }
}

impl RecoveryConfig {
    /// Validate recovery settings
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the window or tolerance is not positive or
    /// longer than a day, the min tail falls outside the window, or
    /// checkpoints are unordered or fall outside the window
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_minutes <= 0 || self.window_minutes > time::MINUTES_PER_DAY {
            return Err(ConfigError::ValueOutOfRange(
                "recovery window_minutes must be between 1 and 1440",
            ));
        }
        if self.tolerance_seconds <= 0 || self.tolerance_seconds > time::SECONDS_PER_DAY {
            return Err(ConfigError::ValueOutOfRange(
                "recovery tolerance_seconds must be between 1 and 86400",
            ));
        }
        if self.min_tail_seconds < 0
            || self.min_tail_seconds > self.window_minutes * time::SECONDS_PER_MINUTE
        {
            return Err(ConfigError::ValueOutOfRange(
                "recovery min_tail_seconds must be non-negative and within the window",
            ));
        }
        if self.checkpoint_minutes.windows(2).any(|w| w[0] >= w[1])
            || self
                .checkpoint_minutes
                .iter()
                .any(|&m| m <= 0 || m > self.window_minutes)
        {
            return Err(ConfigError::InvalidRange(
                "recovery checkpoints must be ascending and within the window",
            ));
        }
        Ok(())
    }
}

/// Walking detection settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WalkingConfig {
    /// Steps per second at or above which the activity counts as walking
    pub steps_per_second_threshold: f64,
}

impl Default for WalkingConfig {
    fn default() -> Self {
        Self {
            steps_per_second_threshold: walking::DEFAULT_STEPS_PER_SECOND,
        }
    }
}

/// Configuration for `ActivitySeriesBuilder`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityDetailConfig {
    /// How far `end` may precede `start` before the window is rejected
    pub window_tolerance_seconds: i64,
    /// Age used when the user's date of birth is unknown
    pub default_age: u32,
    /// Formula used to estimate maximum heart rate
    pub max_hr_algorithm: MaxHrAlgorithm,
    /// Zone band boundaries
    pub zones: HeartRateZoneConfig,
    /// Recovery scan
    pub recovery: RecoveryConfig,
    /// Walking detection
    pub walking: WalkingConfig,
}

impl Default for ActivityDetailConfig {
    fn default() -> Self {
        Self {
            window_tolerance_seconds: window::DEFAULT_TOLERANCE_SECONDS,
            default_age: heart_rate::DEFAULT_AGE,
            max_hr_algorithm: MaxHrAlgorithm::default(),
            zones: HeartRateZoneConfig::default(),
            recovery: RecoveryConfig::default(),
            walking: WalkingConfig::default(),
        }
    }
}

impl ActivityDetailConfig {
    /// Load configuration from environment, falling back to defaults per field
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for an unknown `CARDIO_MAX_HR_ALGORITHM`
    /// and any validation error of the assembled configuration
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let max_hr_algorithm = match env::var("CARDIO_MAX_HR_ALGORITHM") {
            Ok(value) => value
                .parse::<MaxHrAlgorithm>()
                .map_err(|e| ConfigError::Parse(e.message))?,
            Err(_) => defaults.max_hr_algorithm,
        };

        let config = Self {
            window_tolerance_seconds: env_or(
                "CARDIO_WINDOW_TOLERANCE_SECONDS",
                defaults.window_tolerance_seconds,
            ),
            default_age: env_or("CARDIO_DEFAULT_AGE", defaults.default_age),
            max_hr_algorithm,
            zones: defaults.zones,
            recovery: RecoveryConfig {
                window_minutes: env_or(
                    "CARDIO_RECOVERY_WINDOW_MINUTES",
                    defaults.recovery.window_minutes,
                ),
                tolerance_seconds: env_or(
                    "CARDIO_RECOVERY_TOLERANCE_SECONDS",
                    defaults.recovery.tolerance_seconds,
                ),
                ..defaults.recovery
            },
            walking: WalkingConfig {
                steps_per_second_threshold: env_or(
                    "CARDIO_WALKING_STEPS_PER_SECOND",
                    defaults.walking.steps_per_second_threshold,
                ),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` found
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0..=time::SECONDS_PER_DAY).contains(&self.window_tolerance_seconds) {
            return Err(ConfigError::ValueOutOfRange(
                "window_tolerance_seconds must be between 0 and 86400",
            ));
        }
        if !(heart_rate::MIN_AGE..=heart_rate::MAX_AGE).contains(&self.default_age) {
            return Err(ConfigError::ValueOutOfRange(
                "default_age must be between 1 and 120",
            ));
        }
        let threshold = self.walking.steps_per_second_threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(ConfigError::InvalidRange(
                "walking steps_per_second_threshold must be a non-negative number",
            ));
        }
        self.zones.validate()?;
        self.recovery.validate()
    }

    /// Process-wide configuration, loaded from the environment on first use
    pub fn global() -> &'static Self {
        ACTIVITY_DETAIL_CONFIG.get_or_init(|| {
            Self::from_env().unwrap_or_else(|e| {
                warn!(error = %e, "Invalid activity detail configuration, using defaults");
                Self::default()
            })
        })
    }
}
