// ABOUTME: Core data models for the activity series engine
// ABOUTME: Re-exports Activity, ActivityBuilder and MinuteData
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cardio Series Contributors

//! # Data Models
//!
//! Both models are read-only inputs owned by the upstream data collaborator.
//!
//! - `Activity`: one exercise session with its window and aggregate totals
//! - `MinuteData`: one per-minute heart rate / steps sample

mod activity;
mod minute;

pub use activity::{Activity, ActivityBuilder};
pub use minute::MinuteData;
