// ABOUTME: Configuration module for cardio-intelligence crate
// ABOUTME: Re-exports activity detail configuration types and validation errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cardio Series Contributors

/// Activity detail engine configuration (zones, recovery, walking, window)
pub mod activity_detail;
/// Configuration validation errors
pub mod error;

pub use activity_detail::{
    ActivityDetailConfig, HeartRateZoneConfig, RecoveryConfig, WalkingConfig,
};
pub use error::ConfigError;
