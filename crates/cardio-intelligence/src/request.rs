// ABOUTME: Serializable request boundary for the activity detail engine
// ABOUTME: Carries an optional activity so a missing record can be reported as an invalid window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cardio Series Contributors

use cardio_core::models::{Activity, MinuteData};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inputs for one activity detail computation, as supplied by the data layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityDetailRequest {
    /// The session to describe; absent records are rejected
    #[serde(default)]
    pub activity: Option<Activity>,
    /// Catalog of samples, any order, possibly spanning many days
    #[serde(default)]
    pub minutes: Vec<MinuteData>,
    /// Calendar date the view is showing
    pub selected_date: NaiveDate,
    /// Used to position heart rate zones; the configured default age applies when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
}
