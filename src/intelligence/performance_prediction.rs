// ABOUTME: Race time prediction using the Riegel formula for equivalent performances
// ABOUTME: Predicts finish times at standard race distances from a known distance and time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pace_core::constants::prediction::RIEGEL_EXPONENT;
use pace_core::errors::{AppError, AppResult};
use pace_core::models::RaceDistance;
use serde::{Deserialize, Serialize};

use crate::formatters::format_clock_or_placeholder;

/// Predicted finish time for one standard race
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RacePrediction {
    /// Race the prediction is for
    pub race: RaceDistance,
    /// Race distance in kilometers
    pub distance_km: f64,
    /// Predicted time in whole seconds, absent without a reference performance
    pub seconds: Option<f64>,
    /// Formatted time (`H:MM:SS`, `MM:SS`, or `--:--`)
    pub display: String,
}

/// Race predictions for the standard distances
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RacePredictions {
    /// Predictions in ascending race distance order
    pub predictions: Vec<RacePrediction>,
    /// Reference distance used for the calculation
    pub based_on_distance_km: f64,
    /// Reference time used for the calculation
    pub based_on_time_seconds: f64,
}

/// Performance prediction engine
pub struct PerformancePredictor;

impl PerformancePredictor {
    /// Predict race time using Riegel formula
    ///
    /// Riegel's formula: Time2 = Time1 × (Distance2 / Distance1)^1.06
    ///
    /// Distances only need to share a unit; the result is in the unit of
    /// `known_time` and is not rounded.
    ///
    /// # Errors
    /// Returns `AppError::InvalidInput` if any distance or time is non-positive or not finite
    pub fn predict_time_riegel(
        known_distance: f64,
        known_time: f64,
        target_distance: f64,
    ) -> AppResult<f64> {
        let all_valid = [known_distance, known_time, target_distance]
            .iter()
            .all(|v| v.is_finite() && *v > 0.0);
        if !all_valid {
            return Err(AppError::invalid_input(
                "All distances and times must be positive",
            ));
        }

        let distance_ratio = target_distance / known_distance;
        let predicted_time = known_time * distance_ratio.powf(RIEGEL_EXPONENT);

        if predicted_time.is_finite() {
            Ok(predicted_time)
        } else {
            Err(AppError::out_of_range(format!(
                "Prediction for {target_distance} from {known_distance} overflowed"
            )))
        }
    }

    /// Riegel prediction rounded to the nearest whole second
    ///
    /// # Errors
    /// Returns `AppError::InvalidInput` under the same conditions as [`Self::predict_time_riegel`]
    pub fn predict_seconds_riegel(
        known_distance_km: f64,
        known_time_seconds: f64,
        target_distance_km: f64,
    ) -> AppResult<f64> {
        Self::predict_time_riegel(known_distance_km, known_time_seconds, target_distance_km)
            .map(f64::round)
    }

    /// Generate predictions for 5k, 10k, half marathon and marathon
    ///
    /// Never fails: races that cannot be predicted carry `seconds: None`
    /// and the `--:--` placeholder.
    #[must_use]
    pub fn generate_race_predictions(distance_km: f64, time_seconds: f64) -> RacePredictions {
        let predictions = RaceDistance::STANDARD
            .iter()
            .map(|&race| {
                let seconds =
                    Self::predict_seconds_riegel(distance_km, time_seconds, race.km()).ok();
                RacePrediction {
                    race,
                    distance_km: race.km(),
                    seconds,
                    display: format_clock_or_placeholder(seconds),
                }
            })
            .collect();

        RacePredictions {
            predictions,
            based_on_distance_km: distance_km,
            based_on_time_seconds: time_seconds,
        }
    }
}
