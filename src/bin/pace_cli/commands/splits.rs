// ABOUTME: Split table command for pace-cli
// ABOUTME: Derives pace from a finish time or takes it directly, then renders split rows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pace_calculator::errors::{AppError, AppResult};
use pace_calculator::PaceSession;

use super::calc::reject_non_positive;
use crate::helpers::render::Renderer;

/// Render split rows for `distance` at a finish `time` or a `pace`
pub fn run(
    session: &mut PaceSession,
    distance: f64,
    time: Option<f64>,
    pace: Option<f64>,
    renderer: &Renderer,
) -> AppResult<()> {
    reject_non_positive("--distance", distance)?;
    session.set_distance(distance);

    match (time, pace) {
        (Some(time), _) => {
            reject_non_positive("--time", time)?;
            session.set_duration(time);
        }
        (None, Some(pace)) => {
            reject_non_positive("--pace", pace)?;
            session.set_pace(pace);
        }
        (None, None) => return Err(AppError::missing_field("--time or --pace")),
    }

    renderer.splits(
        &session.splits(),
        session.split_unit(),
        &session.split_interval_string(),
    )
}
