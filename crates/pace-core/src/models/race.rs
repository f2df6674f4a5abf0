// ABOUTME: Standard race distances for distance presets and race-time predictions
// ABOUTME: Covers 5K, 10K, half marathon, and marathon in canonical kilometers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// A standard road race distance
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RaceDistance {
    /// 5 kilometers
    FiveK,
    /// 10 kilometers
    TenK,
    /// Half marathon
    HalfMarathon,
    /// Marathon
    Marathon,
}

impl RaceDistance {
    /// Standard races in ascending distance order
    pub const STANDARD: [Self; 4] = [Self::FiveK, Self::TenK, Self::HalfMarathon, Self::Marathon];

    /// Race distance in kilometers
    #[must_use]
    pub const fn km(self) -> f64 {
        match self {
            Self::FiveK => 5.0,
            Self::TenK => 10.0,
            Self::HalfMarathon => 21.097,
            Self::Marathon => 42.195,
        }
    }

    /// Name used in prediction listings
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::FiveK => "5k",
            Self::TenK => "10k",
            Self::HalfMarathon => "Half Marathon",
            Self::Marathon => "Marathon",
        }
    }

    /// Short label used for distance presets
    #[must_use]
    pub const fn preset_label(self) -> &'static str {
        match self {
            Self::FiveK => "5k",
            Self::TenK => "10k",
            Self::HalfMarathon => "Half",
            Self::Marathon => "Marathon",
        }
    }
}

impl fmt::Display for RaceDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for RaceDistance {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace([' ', '_', '-'], "").as_str() {
            "5k" | "5km" => Ok(Self::FiveK),
            "10k" | "10km" => Ok(Self::TenK),
            "half" | "halfmarathon" | "hm" => Ok(Self::HalfMarathon),
            "marathon" | "full" => Ok(Self::Marathon),
            other => Err(AppError::invalid_input(format!(
                "Unknown race distance '{other}' (expected 5k, 10k, half or marathon)"
            ))),
        }
    }
}
