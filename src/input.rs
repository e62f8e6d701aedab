// ABOUTME: Loads activity detail requests from JSON text or files
// ABOUTME: Maps read and parse failures onto AppError codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cardio Series Contributors

use cardio_core::errors::{AppError, AppResult};
use cardio_intelligence::ActivityDetailRequest;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Parse a request from JSON text
///
/// # Errors
///
/// Returns `ErrorCode::SerializationError` when the text is not a valid request
pub fn parse_request(json: &str) -> AppResult<ActivityDetailRequest> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a request file
///
/// # Errors
///
/// Returns `ErrorCode::InvalidInput` when the file cannot be read and
/// `ErrorCode::SerializationError` when its content is not a valid request
pub fn read_request_file(path: &Path) -> AppResult<ActivityDetailRequest> {
    let json = fs::read_to_string(path).map_err(|e| {
        AppError::invalid_input(format!("cannot read request file {}", path.display()))
            .with_source(e)
    })?;
    let request = parse_request(&json)?;
    debug!(
        path = %path.display(),
        sample_count = request.minutes.len(),
        has_activity = request.activity.is_some(),
        "Loaded activity detail request"
    );
    Ok(request)
}
