// ABOUTME: Serializable view of every derived value in a pace session
// ABOUTME: Lets presentation layers render a session without calling each getter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pace_core::models::DistanceUnit;
use serde::{Deserialize, Serialize};

use super::session::{PaceSession, SessionMode, SplitRow};
use crate::intelligence::RacePrediction;

/// Point-in-time rendering of a [`PaceSession`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Observable fill state
    pub mode: SessionMode,
    /// Display unit for distance, pace and speed
    pub unit: DistanceUnit,
    /// Unit of split distances
    pub split_unit: DistanceUnit,
    /// Distance, two decimals
    pub distance: String,
    /// Duration as `HH:MM:SS`
    pub duration: String,
    /// Pace as `M:SS /unit`
    pub pace: String,
    /// Speed as `F.F unit/h`
    pub speed: String,
    /// Whether the pace shown comes from direct entry
    pub pace_entered_directly: bool,
    /// Whether the speed shown comes from direct entry
    pub speed_entered_directly: bool,
    /// Split interval, one decimal
    pub split_interval: String,
    /// Half distance with unit
    pub halfway_distance: String,
    /// Half duration
    pub halfway_time: String,
    /// Split rows up to the finish
    pub splits: Vec<SplitRow>,
    /// Riegel predictions for the standard races
    pub predictions: Vec<RacePrediction>,
}

impl From<&PaceSession> for SessionSnapshot {
    fn from(session: &PaceSession) -> Self {
        Self {
            mode: session.mode(),
            unit: session.display_unit(),
            split_unit: session.split_unit(),
            distance: session.formatted_distance(),
            duration: session.formatted_duration(),
            pace: session.pace_string(),
            speed: session.speed_string(),
            pace_entered_directly: session.is_pace_entered_directly(),
            speed_entered_directly: session.is_speed_entered_directly(),
            split_interval: session.split_interval_string(),
            halfway_distance: session.halfway_distance_string(),
            halfway_time: session.halfway_time_string(),
            splits: session.splits(),
            predictions: session.race_predictions(),
        }
    }
}

impl PaceSession {
    /// Capture every derived value for rendering
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::from(self)
    }
}
