// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Time conversions, heart rate zone fractions, recovery and walking thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cardio Series Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large namespace. Configuration defaults in `cardio-intelligence` are built
//! from these values.

/// Time conversion constants
pub mod time {
    /// Seconds in one minute
    pub const SECONDS_PER_MINUTE: i64 = 60;
    /// Seconds in one minute as `f64`
    pub const SECONDS_PER_MINUTE_F64: f64 = 60.0;
    /// Seconds in one hour as `f64`
    pub const SECONDS_PER_HOUR_F64: f64 = 3600.0;
    /// Minutes in one hour as `f64`
    pub const MINUTES_PER_HOUR_F64: f64 = 60.0;
    /// Seconds in one day
    pub const SECONDS_PER_DAY: i64 = 86_400;
    /// Minutes in one day
    pub const MINUTES_PER_DAY: i64 = 1_440;
}

/// Unit conversion constants
pub mod units {
    /// Meters in one kilometer
    pub const METERS_PER_KILOMETER: f64 = 1000.0;
    /// Multiplier to express a ratio as a percentage
    pub const PERCENTAGE_MULTIPLIER: f64 = 100.0;
}

/// Activity window derivation
pub mod window {
    /// How far `end` may precede `start` before the window is rejected
    pub const DEFAULT_TOLERANCE_SECONDS: i64 = 60;
}

/// Heart rate physiology
pub mod heart_rate {
    /// Age assumed when the user's date of birth is unknown
    pub const DEFAULT_AGE: u32 = 30;
    /// Lowest accepted age for max heart rate formulas
    pub const MIN_AGE: u32 = 1;
    /// Highest accepted age for max heart rate formulas
    pub const MAX_AGE: u32 = 120;
}

/// Heart rate zone upper bounds as fractions of maximum heart rate
///
/// Six bands: rest, light, fat burn, cardio, peak, and max (everything at or
/// above `PEAK_UPPER`).
pub mod zone_fractions {
    /// Upper bound of the rest band
    pub const REST_UPPER: f64 = 0.30;
    /// Upper bound of the light band
    pub const LIGHT_UPPER: f64 = 0.40;
    /// Upper bound of the fat burn band
    pub const FAT_BURN_UPPER: f64 = 0.50;
    /// Upper bound of the cardio band
    pub const CARDIO_UPPER: f64 = 0.65;
    /// Upper bound of the peak band
    pub const PEAK_UPPER: f64 = 0.80;
}

/// Post-activity heart rate recovery
pub mod recovery {
    /// Length of the tail after the activity scanned for recovery samples
    pub const DEFAULT_WINDOW_MINUTES: i64 = 20;
    /// Max distance between a checkpoint and the sample used for it
    pub const DEFAULT_TOLERANCE_SECONDS: i64 = 90;
    /// A tail sample must be later than `end + this` for recovery to be reported
    pub const MIN_TAIL_SECONDS: i64 = 30;
    /// Checkpoints reported after the activity end, in minutes
    pub const CHECKPOINT_MINUTES: [i64; 4] = [1, 2, 5, 10];
}

/// Walking detection and pace estimation
pub mod walking {
    /// Steps per second at or above which an activity counts as walking
    pub const DEFAULT_STEPS_PER_SECOND: f64 = 0.6;
}

/// Sample density
pub mod resolution {
    /// Samples beyond `duration_minutes + this` indicate sub-minute data
    pub const HIGH_PRECISION_MARGIN: f64 = 2.0;
}
