// ABOUTME: Pure split-point generation at fixed intervals along the total distance
// ABOUTME: Produces cumulative distance and elapsed time for every interval plus the finish
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pace_core::constants::splits::{MAX_SPLIT_ROWS, REMAINDER_TOLERANCE_KM};
use serde::{Deserialize, Serialize};

use super::derivation::is_positive;

/// One checkpoint along the distance, in canonical units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplitPoint {
    /// Cumulative distance in kilometers
    pub distance_km: f64,
    /// Elapsed time at the checkpoint, rounded to whole seconds
    pub elapsed_seconds: f64,
}

/// Checkpoints every `interval_km` up to `distance_km`
///
/// One point per whole interval, then a final point at the total distance
/// when the leftover exceeds 0.01 km. Empty unless interval, distance and
/// pace are all positive, and empty when the table would exceed
/// [`MAX_SPLIT_ROWS`] rows.
#[must_use]
pub fn split_points(
    distance_km: f64,
    interval_km: f64,
    pace_sec_per_km: Option<f64>,
) -> Vec<SplitPoint> {
    let Some(pace) = pace_sec_per_km.filter(|p| is_positive(*p)) else {
        return Vec::new();
    };
    if !is_positive(interval_km) || !is_positive(distance_km) {
        return Vec::new();
    }

    let intervals = (distance_km / interval_km).floor();
    if !intervals.is_finite() || intervals >= MAX_SPLIT_ROWS as f64 {
        return Vec::new();
    }
    let full_intervals = intervals as u64;
    let point_at = |km: f64| SplitPoint {
        distance_km: km,
        elapsed_seconds: (pace * km).round(),
    };

    let mut points: Vec<SplitPoint> = (1..=full_intervals)
        .map(|n| point_at(n as f64 * interval_km))
        .collect();

    let remainder = (full_intervals as f64).mul_add(-interval_km, distance_km);
    if remainder > REMAINDER_TOLERANCE_KM {
        points.push(point_at(distance_km));
    }

    points
}
