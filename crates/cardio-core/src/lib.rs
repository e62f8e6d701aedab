// ABOUTME: Core types and constants for the Cardio activity series engine
// ABOUTME: Foundation crate with error handling, activity/minute models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cardio Series Contributors

#![deny(unsafe_code)]

//! # Cardio Core
//!
//! Foundation crate providing shared types and constants for the activity
//! detail engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Physiological and time constants organized by domain
//! - **models**: `Activity` sessions and per-minute `MinuteData` samples
//! - **intelligence**: Maximum heart rate estimation algorithms

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`Activity`, `MinuteData`)
pub mod models;

/// Intelligence types (`MaxHrAlgorithm`)
pub mod intelligence;
