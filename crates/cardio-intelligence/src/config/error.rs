// ABOUTME: Configuration error types for activity detail configuration validation
// ABOUTME: Defines error variants for invalid ranges, unordered zones, and parse failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cardio Series Contributors

//! Configuration error types for activity detail configuration validation.

use cardio_core::errors::AppError;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Value outside acceptable range (e.g., fraction not between 0 and 1)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Zone boundaries must increase strictly from rest to peak
    #[error("Zone boundaries not strictly increasing: {0}")]
    UnorderedZones(&'static str),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        match error {
            ConfigError::InvalidRange(_) | ConfigError::ValueOutOfRange(_) => {
                Self::value_out_of_range(error.to_string()).with_source(error)
            }
            ConfigError::UnorderedZones(_) | ConfigError::Parse(_) => {
                Self::config(error.to_string()).with_source(error)
            }
        }
    }
}
