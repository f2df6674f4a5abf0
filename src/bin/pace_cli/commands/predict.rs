// ABOUTME: Race prediction command for pace-cli
// ABOUTME: Renders Riegel-equivalent times for a target or for the standard races
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pace_calculator::errors::AppResult;
use pace_calculator::intelligence::{PerformancePredictor, RacePrediction};
use pace_calculator::PaceSession;

use super::calc::reject_non_positive;
use crate::helpers::render::Renderer;

/// Predict equivalent times from `distance` (display unit) covered in `time` seconds
pub fn run(
    session: &mut PaceSession,
    distance: f64,
    time: f64,
    target_km: Option<f64>,
    renderer: &Renderer,
) -> AppResult<()> {
    reject_non_positive("--distance", distance)?;
    reject_non_positive("--time", time)?;
    session.set_distance(distance);
    session.set_duration(time);

    match target_km {
        Some(target) => {
            reject_non_positive("--target", target)?;
            let seconds = PerformancePredictor::predict_seconds_riegel(
                session.distance_km(),
                session.duration_sec(),
                target,
            )?;
            renderer.single_prediction(target, seconds)
        }
        None => {
            let predictions: Vec<RacePrediction> = session.race_predictions();
            renderer.predictions(&predictions)
        }
    }
}
