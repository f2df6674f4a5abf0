// ABOUTME: Full calculation command for pace-cli
// ABOUTME: Feeds distance, time, pace and speed into a session and renders everything derived
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pace_calculator::errors::{AppError, AppResult};
use pace_calculator::models::RaceDistance;
use pace_calculator::{PaceSession, SessionMode};
use tracing::{info, warn};

use crate::helpers::render::Renderer;

/// Raw inputs collected from the command line
pub struct CalcInputs {
    pub distance: Option<f64>,
    pub race: Option<RaceDistance>,
    pub time: Option<f64>,
    pub pace: Option<f64>,
    pub speed: Option<f64>,
}

/// Apply inputs in the order distance, time, pace, speed and render the session
pub fn run(session: &mut PaceSession, inputs: &CalcInputs, renderer: &Renderer) -> AppResult<()> {
    let provided = [
        inputs.distance.is_some() || inputs.race.is_some(),
        inputs.time.is_some(),
        inputs.pace.is_some(),
        inputs.speed.is_some(),
    ]
    .iter()
    .filter(|given| **given)
    .count();
    if provided == 0 {
        return Err(AppError::missing_field(
            "at least one of --distance, --race, --time, --pace, --speed",
        ));
    }
    if provided > 2 {
        warn!("More than two inputs given; later inputs override derived values");
    }

    if let Some(race) = inputs.race {
        session.set_race_distance(race);
    } else if let Some(distance) = inputs.distance {
        reject_negative("--distance", distance)?;
        session.set_distance(distance);
    }
    if let Some(time) = inputs.time {
        session.set_duration(time);
    }
    if let Some(pace) = inputs.pace {
        reject_non_positive("--pace", pace)?;
        session.set_pace(pace);
    }
    if let Some(speed) = inputs.speed {
        reject_non_positive("--speed", speed)?;
        session.set_speed(speed);
    }

    if session.mode() != SessionMode::Complete {
        info!(mode = ?session.mode(), "Not enough inputs to derive every value");
    }

    renderer.summary(&session.snapshot())
}

fn reject_negative(flag: &str, value: f64) -> AppResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(AppError::out_of_range(format!(
            "{flag} must be zero or more, got {value}"
        )))
    }
}

pub fn reject_non_positive(flag: &str, value: f64) -> AppResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AppError::out_of_range(format!(
            "{flag} must be greater than zero, got {value}"
        )))
    }
}
