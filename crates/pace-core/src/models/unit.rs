// ABOUTME: Distance unit enumeration with fixed conversion factors to kilometers
// ABOUTME: Converts distances, paces, and speeds between kilometers and miles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::units::{KM_PER_KILOMETER, KM_PER_MILE};
use crate::errors::AppError;

/// Unit used to enter and display distances, paces, and speeds
///
/// Kilometers are canonical: every unit carries a fixed factor that says how
/// many kilometers one of it contains.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DistanceUnit {
    /// Kilometers
    #[default]
    #[serde(rename = "km")]
    Kilometers,
    /// Statute miles
    #[serde(rename = "mi")]
    Miles,
}

impl DistanceUnit {
    /// All supported units in display order
    pub const ALL: [Self; 2] = [Self::Kilometers, Self::Miles];

    /// How many kilometers are in one of this unit
    #[must_use]
    pub const fn factor_to_km(self) -> f64 {
        match self {
            Self::Kilometers => KM_PER_KILOMETER,
            Self::Miles => KM_PER_MILE,
        }
    }

    /// Short label used in formatted values ("km", "mi")
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::Kilometers => "km",
            Self::Miles => "mi",
        }
    }

    /// Convert a distance in this unit to kilometers
    #[must_use]
    pub fn to_km(self, value: f64) -> f64 {
        value * self.factor_to_km()
    }

    /// Convert a distance in kilometers to this unit
    #[must_use]
    pub fn from_km(self, km: f64) -> f64 {
        km / self.factor_to_km()
    }

    /// Convert seconds per one of this unit to seconds per kilometer
    #[must_use]
    pub fn pace_to_sec_per_km(self, seconds_per_unit: f64) -> f64 {
        seconds_per_unit / self.factor_to_km()
    }

    /// Convert seconds per kilometer to seconds per one of this unit
    #[must_use]
    pub fn pace_from_sec_per_km(self, seconds_per_km: f64) -> f64 {
        seconds_per_km * self.factor_to_km()
    }

    /// Convert a speed in this unit per hour to kilometers per hour
    #[must_use]
    pub fn speed_to_kmh(self, units_per_hour: f64) -> f64 {
        units_per_hour * self.factor_to_km()
    }

    /// Convert kilometers per hour to this unit per hour
    #[must_use]
    pub fn speed_from_kmh(self, kmh: f64) -> f64 {
        kmh / self.factor_to_km()
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl FromStr for DistanceUnit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "km" | "kms" | "kilometer" | "kilometers" | "kilometre" | "kilometres" => {
                Ok(Self::Kilometers)
            }
            "mi" | "mile" | "miles" => Ok(Self::Miles),
            other => Err(AppError::invalid_input(format!(
                "Unknown distance unit '{other}' (expected km or mi)"
            ))),
        }
    }
}
