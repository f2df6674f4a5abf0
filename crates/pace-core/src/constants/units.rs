// ABOUTME: Unit conversion constants for distance and time
// ABOUTME: Provides named constants to eliminate magic numbers in calculations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Kilometers in one kilometer
pub const KM_PER_KILOMETER: f64 = 1.0;

/// Kilometers in one statute mile
pub const KM_PER_MILE: f64 = 1.60934;

/// Seconds per minute
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Seconds per hour
pub const SECONDS_PER_HOUR: f64 = 3600.0;
