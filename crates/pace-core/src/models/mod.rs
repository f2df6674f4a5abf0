// ABOUTME: Core data models shared across the workspace
// ABOUTME: Distance units and standard race distances

/// Distance units and conversion to the canonical kilometer
pub mod unit;

/// Standard race distances used for presets and predictions
pub mod race;

pub use race::RaceDistance;
pub use unit::DistanceUnit;
