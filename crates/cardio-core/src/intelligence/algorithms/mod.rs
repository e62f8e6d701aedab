// ABOUTME: Intelligence algorithm types for heart rate estimation
// ABOUTME: Contains MaxHrAlgorithm and the age helper it is fed with

/// Maximum heart rate estimation algorithms
pub mod maxhr;

pub use maxhr::{age_on, MaxHrAlgorithm};
