// ABOUTME: Locale-free text formatting for times, paces, speeds and distances
// ABOUTME: Also parses user-entered clock strings such as 45:00 or 1:02:03 into seconds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Formatters
//!
//! Thin presentation helpers kept apart from the numeric derivation so the
//! engine's figures can be tested without string comparisons. Every function
//! here is total: undefined inputs map to fixed placeholder strings.

use pace_core::constants::prediction::NO_DATA;
use pace_core::constants::units::SECONDS_PER_MINUTE;
use pace_core::errors::{AppError, AppResult};
use pace_core::models::DistanceUnit;

/// Whole seconds, rounded to nearest, clamped at zero
#[must_use]
pub fn whole_seconds(seconds: f64) -> u64 {
    if seconds.is_finite() && seconds > 0.0 {
        seconds.round() as u64
    } else {
        0
    }
}

/// Split `total` seconds into hours, minutes and seconds
#[must_use]
pub const fn clock_parts(total: u64) -> (u64, u64, u64) {
    (total / 3600, (total % 3600) / 60, total % 60)
}

/// Format elapsed time as `H:MM:SS` at or above one hour, `MM:SS` below
///
/// Used for split rows, halfway times and race predictions.
#[must_use]
pub fn format_clock(seconds: f64) -> String {
    let (hours, minutes, secs) = clock_parts(whole_seconds(seconds));
    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes:02}:{secs:02}")
    }
}

/// Format an optional elapsed time, falling back to `--:--`
#[must_use]
pub fn format_clock_or_placeholder(seconds: Option<f64>) -> String {
    seconds.map_or_else(|| NO_DATA.to_owned(), format_clock)
}

/// Format a total duration as zero-padded `HH:MM:SS`
#[must_use]
pub fn format_duration_hms(seconds: f64) -> String {
    let (hours, minutes, secs) = clock_parts(whole_seconds(seconds));
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

/// Format a pace in seconds per `unit` as `M:SS /unit`
#[must_use]
pub fn format_pace(seconds_per_unit: Option<f64>, unit: DistanceUnit) -> String {
    let total = seconds_per_unit.map_or(0, whole_seconds);
    let minutes = total / 60;
    let secs = total % 60;
    format!("{minutes}:{secs:02} /{unit}")
}

/// Format a speed in `unit` per hour as `F.F unit/h`
#[must_use]
pub fn format_speed(units_per_hour: Option<f64>, unit: DistanceUnit) -> String {
    let speed = units_per_hour.filter(|s| s.is_finite()).unwrap_or(0.0);
    format!("{speed:.1} {unit}/h")
}

/// Two decimal places, `0.00` for zero
#[must_use]
pub fn format_distance(value: f64) -> String {
    if value.is_finite() && value > 0.0 {
        format!("{value:.2}")
    } else {
        "0.00".to_owned()
    }
}

/// One decimal place, `0.0` for zero or less
#[must_use]
pub fn format_one_decimal(value: f64) -> String {
    if value.is_finite() && value > 0.0 {
        format!("{value:.1}")
    } else {
        "0.0".to_owned()
    }
}

/// Parse a clock string into seconds
///
/// Accepts `SS`, `MM:SS` and `H:MM:SS`. The leading component is unbounded
/// (`90:00` is ninety minutes); trailing components must be below 60.
///
/// # Errors
///
/// Returns `InvalidFormat` for empty or non-numeric components and
/// `ValueOutOfRange` when a trailing component is 60 or more.
pub fn parse_clock(text: &str) -> AppResult<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(AppError::invalid_format("Empty time value"));
    }

    let parts: Vec<&str> = trimmed.split(':').collect();
    if parts.len() > 3 {
        return Err(AppError::invalid_format(format!(
            "Time '{trimmed}' has too many components (expected H:MM:SS)"
        )));
    }

    let mut total: f64 = 0.0;
    for (index, part) in parts.iter().enumerate() {
        let value: u64 = part.parse().map_err(|e| {
            AppError::invalid_format(format!("Invalid time component '{part}' in '{trimmed}'"))
                .with_source(e)
        })?;
        if index > 0 && value >= 60 {
            return Err(AppError::out_of_range(format!(
                "Time component '{part}' in '{trimmed}' must be below 60"
            )));
        }
        total = total.mul_add(SECONDS_PER_MINUTE, value as f64);
    }

    Ok(total)
}
