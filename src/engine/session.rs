// ABOUTME: Pace session state with setters that propagate edits between quantities
// ABOUTME: Owns canonical distance/duration, remembered rates, units and split interval
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Pace Session
//!
//! Distance is stored in kilometers and duration in seconds. Pace and speed
//! are never stored as live figures: they are read back from distance and
//! duration, or from the last directly entered value when one of those is
//! still unknown.
//!
//! Every setter writes its field and then runs [`PaceSession::recompute`]
//! explicitly, so propagation happens once, in a fixed order.

use pace_core::constants::splits::{DEFAULT_SPLIT_INTERVAL_KM, MIN_SPLIT_INTERVAL};
use pace_core::constants::units::SECONDS_PER_HOUR;
use pace_core::models::{DistanceUnit, RaceDistance};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::derivation::{apply_entered_rate, fill_missing, is_positive, Derived, RememberedRate};
use super::splits::split_points;
use crate::config::CalculatorConfig;
use crate::formatters::{
    format_clock, format_clock_or_placeholder, format_distance, format_duration_hms,
    format_one_decimal, format_pace, format_speed,
};
use crate::intelligence::{PerformancePredictor, RacePrediction};

/// Observable fill state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionMode {
    /// Neither distance nor duration is known
    Empty,
    /// Exactly one of distance or duration is known
    Partial,
    /// Both distance and duration are known
    Complete,
}

/// A formatted split row for presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitRow {
    /// Cumulative distance in kilometers
    pub distance_km: f64,
    /// Cumulative distance in the split unit, one decimal
    pub distance_display: String,
    /// Elapsed time at the checkpoint in whole seconds
    pub elapsed_seconds: f64,
    /// Elapsed time as `H:MM:SS` or `MM:SS`
    pub duration_display: String,
}

/// Running-performance calculator state for one session
#[derive(Debug, Clone)]
pub struct PaceSession {
    distance_km: f64,
    duration_sec: f64,
    display_unit: DistanceUnit,
    split_unit: DistanceUnit,
    split_interval_km: f64,
    last_entered_pace_sec_per_km: Option<f64>,
    last_entered_speed_kmh: Option<f64>,
    resetting: bool,
}

impl Default for PaceSession {
    fn default() -> Self {
        Self::with_unit(DistanceUnit::default())
    }
}

impl PaceSession {
    /// Create an empty session
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty session displaying `unit` for distances and splits
    #[must_use]
    pub fn with_unit(unit: DistanceUnit) -> Self {
        Self {
            distance_km: 0.0,
            duration_sec: 0.0,
            display_unit: unit,
            split_unit: unit,
            split_interval_km: DEFAULT_SPLIT_INTERVAL_KM,
            last_entered_pace_sec_per_km: None,
            last_entered_speed_kmh: None,
            resetting: false,
        }
    }

    /// Create an empty session using the configured default unit
    #[must_use]
    pub fn from_config(config: &CalculatorConfig) -> Self {
        Self::with_unit(config.default_unit)
    }

    // ------------------------------------------------------------------
    // Canonical state
    // ------------------------------------------------------------------

    /// Canonical distance in kilometers
    #[must_use]
    pub const fn distance_km(&self) -> f64 {
        self.distance_km
    }

    /// Canonical duration in seconds
    #[must_use]
    pub const fn duration_sec(&self) -> f64 {
        self.duration_sec
    }

    /// Unit used for distance, pace and speed
    #[must_use]
    pub const fn display_unit(&self) -> DistanceUnit {
        self.display_unit
    }

    /// Unit used for split distances
    #[must_use]
    pub const fn split_unit(&self) -> DistanceUnit {
        self.split_unit
    }

    /// Canonical split interval in kilometers
    #[must_use]
    pub const fn split_interval_km(&self) -> f64 {
        self.split_interval_km
    }

    /// Pace the user entered directly, in seconds per kilometer
    #[must_use]
    pub const fn last_entered_pace_sec_per_km(&self) -> Option<f64> {
        self.last_entered_pace_sec_per_km
    }

    /// Speed the user entered directly, in kilometers per hour
    #[must_use]
    pub const fn last_entered_speed_kmh(&self) -> Option<f64> {
        self.last_entered_speed_kmh
    }

    /// Whether distance, duration, or both are known
    #[must_use]
    pub fn mode(&self) -> SessionMode {
        match (self.distance_km > 0.0, self.duration_sec > 0.0) {
            (true, true) => SessionMode::Complete,
            (false, false) => SessionMode::Empty,
            _ => SessionMode::Partial,
        }
    }

    // ------------------------------------------------------------------
    // Distance and duration
    // ------------------------------------------------------------------

    /// Set the distance in the display unit
    ///
    /// Negative or non-finite values are ignored. Zero clears the distance.
    pub fn set_distance(&mut self, value_in_display_unit: f64) {
        let km = self.display_unit.to_km(value_in_display_unit);
        if !is_non_negative(value_in_display_unit) || !is_non_negative(km) {
            debug!(value = value_in_display_unit, "Ignoring invalid distance");
            return;
        }
        self.assign_distance_km(km);
    }

    /// Set the distance in kilometers regardless of the display unit
    pub fn set_distance_km(&mut self, km: f64) {
        if !is_non_negative(km) {
            debug!(value = km, "Ignoring invalid distance");
            return;
        }
        self.assign_distance_km(km);
    }

    /// Set the distance to a standard race
    pub fn set_race_distance(&mut self, race: RaceDistance) {
        self.assign_distance_km(race.km());
    }

    /// Set the elapsed time in seconds
    ///
    /// Negative or non-finite values are ignored. Zero clears the duration.
    pub fn set_duration(&mut self, seconds: f64) {
        if !is_non_negative(seconds) {
            debug!(value = seconds, "Ignoring invalid duration");
            return;
        }
        self.assign_duration_sec(seconds);
    }

    /// Distance in the display unit
    #[must_use]
    pub fn distance_in_display_unit(&self) -> f64 {
        self.display_unit.from_km(self.distance_km)
    }

    fn assign_distance_km(&mut self, km: f64) {
        self.distance_km = km;
        self.recompute();
    }

    fn assign_duration_sec(&mut self, seconds: f64) {
        self.duration_sec = seconds;
        self.recompute();
    }

    /// Fill in a missing distance or duration from the remembered rate
    ///
    /// Pace is consulted before speed. Does nothing while a reset is in
    /// progress, when both values are known, or when both are zero.
    pub fn recompute(&mut self) {
        if self.resetting {
            return;
        }
        let Some(rate) =
            RememberedRate::resolve(self.last_entered_pace_sec_per_km, self.last_entered_speed_kmh)
        else {
            return;
        };
        if let Some(derived) = fill_missing(self.distance_km, self.duration_sec, rate) {
            trace!(?rate, ?derived, "Derived missing value from remembered rate");
            self.write_derived(derived);
        }
    }

    // Derived writes go straight to the fields: both values are known
    // afterwards, so another derivation pass would find nothing to do.
    fn write_derived(&mut self, derived: Derived) {
        match derived {
            Derived::Duration(seconds) => self.duration_sec = seconds,
            Derived::Distance(km) => self.distance_km = km,
        }
    }

    // ------------------------------------------------------------------
    // Pace and speed
    // ------------------------------------------------------------------

    /// Enter a pace in seconds per display unit
    ///
    /// Values at or below zero are ignored. The pace is remembered, then
    /// duration is derived from a known distance, or distance from a known
    /// duration.
    pub fn set_pace(&mut self, seconds_per_display_unit: f64) {
        if !is_positive(seconds_per_display_unit) {
            debug!(value = seconds_per_display_unit, "Ignoring non-positive pace");
            return;
        }
        let pace = self
            .display_unit
            .pace_to_sec_per_km(seconds_per_display_unit);
        self.last_entered_pace_sec_per_km = Some(pace);
        self.apply_rate(RememberedRate::Pace(pace));
    }

    /// Enter a pace as minutes and seconds per display unit
    ///
    /// Negative components count as zero.
    pub fn set_pace_minutes_seconds(&mut self, minutes: i64, seconds: i64) {
        self.set_pace(combine_minutes_seconds(minutes, seconds));
    }

    /// Enter a speed in display units per hour
    ///
    /// Values at or below zero are ignored. Propagates like [`Self::set_pace`].
    pub fn set_speed(&mut self, speed_in_display_unit: f64) {
        if !is_positive(speed_in_display_unit) {
            debug!(value = speed_in_display_unit, "Ignoring non-positive speed");
            return;
        }
        let kmh = self.display_unit.speed_to_kmh(speed_in_display_unit);
        if !is_positive(kmh) {
            debug!(value = speed_in_display_unit, "Ignoring speed outside the representable range");
            return;
        }
        self.last_entered_speed_kmh = Some(kmh);
        self.apply_rate(RememberedRate::Speed(kmh));
    }

    fn apply_rate(&mut self, rate: RememberedRate) {
        if let Some(derived) = apply_entered_rate(self.distance_km, self.duration_sec, rate) {
            trace!(?rate, ?derived, "Applied entered rate");
            self.write_derived(derived);
        }
    }

    /// Set distance from a pace and a total duration
    ///
    /// Both must be positive. Duration is stored rounded to whole seconds.
    /// The pace is used for this calculation only and is not remembered.
    pub fn set_distance_from_pace(&mut self, seconds_per_display_unit: f64, duration_sec: f64) {
        if !is_positive(seconds_per_display_unit) || !is_positive(duration_sec) {
            debug!(
                pace = seconds_per_display_unit,
                duration = duration_sec,
                "Ignoring distance-from-pace request with non-positive input"
            );
            return;
        }
        let pace = self
            .display_unit
            .pace_to_sec_per_km(seconds_per_display_unit);
        let Some(km) = RememberedRate::Pace(pace).distance_for(duration_sec) else {
            return;
        };
        self.duration_sec = duration_sec.round();
        self.distance_km = km;
    }

    /// Minutes/seconds form of [`Self::set_distance_from_pace`]
    pub fn set_distance_from_pace_minutes_seconds(
        &mut self,
        pace_minutes: i64,
        pace_seconds: i64,
        duration_sec: f64,
    ) {
        self.set_distance_from_pace(
            combine_minutes_seconds(pace_minutes, pace_seconds),
            duration_sec,
        );
    }

    /// Pace in seconds per kilometer
    ///
    /// Live distance and duration win over the remembered pace.
    #[must_use]
    pub fn pace_sec_per_km(&self) -> Option<f64> {
        if self.has_live_figures() {
            return Some(self.duration_sec / self.distance_km);
        }
        self.last_entered_pace_sec_per_km.filter(|p| is_positive(*p))
    }

    /// Pace in seconds per display unit
    #[must_use]
    pub fn pace_in_display_unit(&self) -> Option<f64> {
        self.pace_sec_per_km()
            .map(|p| self.display_unit.pace_from_sec_per_km(p))
    }

    /// Speed in display units per hour
    ///
    /// Live distance and duration win over the remembered speed.
    #[must_use]
    pub fn speed_in_display_unit(&self) -> Option<f64> {
        if self.has_live_figures() {
            return Some(self.distance_in_display_unit() / (self.duration_sec / SECONDS_PER_HOUR));
        }
        self.last_entered_speed_kmh
            .filter(|s| is_positive(*s))
            .map(|kmh| self.display_unit.speed_from_kmh(kmh))
    }

    /// True when the visible pace comes from direct entry
    #[must_use]
    pub fn is_pace_entered_directly(&self) -> bool {
        !self.has_live_figures() && self.last_entered_pace_sec_per_km.is_some_and(is_positive)
    }

    /// True when the visible speed comes from direct entry
    #[must_use]
    pub fn is_speed_entered_directly(&self) -> bool {
        !self.has_live_figures() && self.last_entered_speed_kmh.is_some_and(is_positive)
    }

    fn has_live_figures(&self) -> bool {
        self.distance_km > 0.0 && self.duration_sec > 0.0
    }

    // ------------------------------------------------------------------
    // Units and split interval
    // ------------------------------------------------------------------

    /// Change the display unit
    ///
    /// The split unit follows. The split interval keeps its displayed number,
    /// so 1.0 km becomes 1.0 mi: the real distance of one split changes on
    /// purpose. Distance and duration are untouched.
    pub fn set_display_unit(&mut self, unit: DistanceUnit) {
        let displayed_split = self.split_interval_in_split_unit();
        self.display_unit = unit;
        self.split_unit = unit;
        let interval_km = unit.to_km(displayed_split);
        if is_positive(interval_km) {
            self.split_interval_km = interval_km;
        }
        debug!(
            unit = %unit,
            split_interval_km = self.split_interval_km,
            "Display unit changed"
        );
    }

    /// Change only the split unit, keeping the real split distance
    pub fn set_split_unit(&mut self, unit: DistanceUnit) {
        self.split_unit = unit;
    }

    /// Set the split interval in the split unit
    ///
    /// Clamped to at least 0.1 split units; non-finite values are ignored.
    pub fn set_split_interval(&mut self, value_in_split_unit: f64) {
        if !value_in_split_unit.is_finite() {
            debug!(value = value_in_split_unit, "Ignoring non-finite split interval");
            return;
        }
        let clamped = value_in_split_unit.max(MIN_SPLIT_INTERVAL);
        let interval_km = self.split_unit.to_km(clamped);
        if is_positive(interval_km) {
            self.split_interval_km = interval_km;
        }
    }

    /// Split interval in the split unit
    #[must_use]
    pub fn split_interval_in_split_unit(&self) -> f64 {
        self.split_unit.from_km(self.split_interval_km)
    }

    // ------------------------------------------------------------------
    // Splits and predictions
    // ------------------------------------------------------------------

    /// Rows at every split interval up to the finish
    ///
    /// Empty without a positive distance, split interval and resolvable pace.
    #[must_use]
    pub fn splits(&self) -> Vec<SplitRow> {
        split_points(
            self.distance_km,
            self.split_interval_km,
            self.pace_sec_per_km(),
        )
        .into_iter()
        .map(|point| SplitRow {
            distance_km: point.distance_km,
            distance_display: format!("{:.1}", self.split_unit.from_km(point.distance_km)),
            elapsed_seconds: point.elapsed_seconds,
            duration_display: format_clock(point.elapsed_seconds),
        })
        .collect()
    }

    /// Elapsed seconds to cover `distance_km` at the current pace
    #[must_use]
    pub fn predicted_seconds(&self, distance_km: f64) -> Option<f64> {
        if !is_positive(distance_km) {
            return None;
        }
        self.pace_sec_per_km()
            .map(|pace| (pace * distance_km).round())
            .filter(|s| is_positive(*s))
    }

    /// Formatted time to cover `distance_km` at the current pace, or `--:--`
    #[must_use]
    pub fn predicted_time(&self, distance_km: f64) -> String {
        format_clock_or_placeholder(self.predicted_seconds(distance_km))
    }

    /// Riegel-equivalent finish seconds at `target_km`
    #[must_use]
    pub fn predicted_equivalent_seconds(&self, target_km: f64) -> Option<f64> {
        PerformancePredictor::predict_seconds_riegel(self.distance_km, self.duration_sec, target_km)
            .ok()
    }

    /// Formatted Riegel-equivalent finish time at `target_km`, or `--:--`
    #[must_use]
    pub fn predicted_equivalent_time(&self, target_km: f64) -> String {
        format_clock_or_placeholder(self.predicted_equivalent_seconds(target_km))
    }

    /// Riegel predictions for 5k, 10k, half marathon and marathon
    #[must_use]
    pub fn race_predictions(&self) -> Vec<RacePrediction> {
        PerformancePredictor::generate_race_predictions(self.distance_km, self.duration_sec)
            .predictions
    }

    // ------------------------------------------------------------------
    // Formatted views
    // ------------------------------------------------------------------

    /// Distance in the display unit, two decimals
    #[must_use]
    pub fn formatted_distance(&self) -> String {
        format_distance(self.distance_in_display_unit())
    }

    /// Duration as `HH:MM:SS`
    #[must_use]
    pub fn formatted_duration(&self) -> String {
        format_duration_hms(self.duration_sec)
    }

    /// Pace as `M:SS /unit`
    #[must_use]
    pub fn pace_string(&self) -> String {
        format_pace(self.pace_in_display_unit(), self.display_unit)
    }

    /// Speed as `F.F unit/h`
    #[must_use]
    pub fn speed_string(&self) -> String {
        format_speed(self.speed_in_display_unit(), self.display_unit)
    }

    /// Split interval in the split unit, one decimal
    #[must_use]
    pub fn split_interval_string(&self) -> String {
        format_one_decimal(self.split_interval_in_split_unit())
    }

    /// Half the distance in the display unit, e.g. `5.0 km`
    #[must_use]
    pub fn halfway_distance_string(&self) -> String {
        let half = self.distance_in_display_unit() / 2.0;
        format!("{half:.1} {}", self.display_unit)
    }

    /// Half the duration, formatted like split times
    #[must_use]
    pub fn halfway_time_string(&self) -> String {
        format_clock(self.duration_sec / 2.0)
    }

    // ------------------------------------------------------------------
    // Reset
    // ------------------------------------------------------------------

    /// Return to defaults, keeping the display unit
    ///
    /// Remembered rates are cleared first and derivation is suppressed while
    /// fields are cleared, so no stale rate can bring a value back.
    pub fn reset(&mut self) {
        self.resetting = true;
        self.last_entered_pace_sec_per_km = None;
        self.last_entered_speed_kmh = None;
        self.assign_distance_km(0.0);
        self.assign_duration_sec(0.0);
        self.split_interval_km = DEFAULT_SPLIT_INTERVAL_KM;
        self.split_unit = self.display_unit;
        self.resetting = false;
        debug!(unit = %self.display_unit, "Session reset");
    }
}

fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

fn combine_minutes_seconds(minutes: i64, seconds: i64) -> f64 {
    minutes
        .max(0)
        .saturating_mul(60)
        .saturating_add(seconds.max(0)) as f64
}
