// ABOUTME: Pure rate-resolution rules linking distance, duration, pace and speed
// ABOUTME: Decides which quantity is derived from a remembered pace or speed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pace_core::constants::units::SECONDS_PER_HOUR;

/// A pace or speed the user entered directly, in canonical units
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RememberedRate {
    /// Seconds per kilometer
    Pace(f64),
    /// Kilometers per hour
    Speed(f64),
}

impl RememberedRate {
    /// Pick the rate that drives derivation; pace wins over speed
    ///
    /// Non-positive or non-finite values count as absent.
    #[must_use]
    pub fn resolve(pace_sec_per_km: Option<f64>, speed_kmh: Option<f64>) -> Option<Self> {
        pace_sec_per_km
            .filter(|p| is_positive(*p))
            .map(Self::Pace)
            .or_else(|| speed_kmh.filter(|s| is_positive(*s)).map(Self::Speed))
    }

    /// Whole seconds needed to cover `distance_km` at this rate, if finite and positive
    #[must_use]
    pub fn duration_for(self, distance_km: f64) -> Option<f64> {
        let seconds = match self {
            Self::Pace(sec_per_km) => (sec_per_km * distance_km).round(),
            Self::Speed(kmh) => ((distance_km / kmh) * SECONDS_PER_HOUR).round(),
        };
        Some(seconds).filter(|s| is_positive(*s))
    }

    /// Kilometers covered in `duration_sec` at this rate, if finite and positive
    #[must_use]
    pub fn distance_for(self, duration_sec: f64) -> Option<f64> {
        let km = match self {
            Self::Pace(sec_per_km) => duration_sec / sec_per_km,
            Self::Speed(kmh) => kmh * (duration_sec / SECONDS_PER_HOUR),
        };
        Some(km).filter(|k| is_positive(*k))
    }
}

/// A value written back into the session by derivation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Derived {
    /// New canonical duration in seconds
    Duration(f64),
    /// New canonical distance in kilometers
    Distance(f64),
}

/// Fill in whichever of distance or duration is still zero
///
/// Returns `None` when both are known, both are zero, or the derived
/// value would not be finite and positive.
#[must_use]
pub fn fill_missing(distance_km: f64, duration_sec: f64, rate: RememberedRate) -> Option<Derived> {
    if distance_km > 0.0 && duration_sec <= 0.0 {
        rate.duration_for(distance_km).map(Derived::Duration)
    } else if duration_sec > 0.0 && distance_km <= 0.0 {
        rate.distance_for(duration_sec).map(Derived::Distance)
    } else {
        None
    }
}

/// Apply a freshly entered rate
///
/// A known distance always wins: duration is recomputed from it even when a
/// duration already exists. Otherwise distance is derived from a known duration.
/// Results that are not finite and positive are dropped.
#[must_use]
pub fn apply_entered_rate(
    distance_km: f64,
    duration_sec: f64,
    rate: RememberedRate,
) -> Option<Derived> {
    if distance_km > 0.0 {
        rate.duration_for(distance_km).map(Derived::Duration)
    } else if duration_sec > 0.0 {
        rate.distance_for(duration_sec).map(Derived::Distance)
    } else {
        None
    }
}

/// True for finite values strictly above zero
#[must_use]
pub fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
