// ABOUTME: Intelligence module re-exports for algorithm types
// ABOUTME: Contains MaxHrAlgorithm used to position heart rate zones

/// Maximum heart rate estimation algorithms
pub mod algorithms;

pub use algorithms::MaxHrAlgorithm;
