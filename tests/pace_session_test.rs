// ABOUTME: Integration tests for pace session derivation and propagation rules
// ABOUTME: Covers setters, remembered rates, unit changes, reset, and formatted getters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(clippy::float_cmp)]
#![allow(missing_docs)]

mod common;

use common::{assert_close, empty_session, ten_k_in_fifty};
use pace_calculator::{DistanceUnit, RaceDistance, SessionMode};

#[test]
fn test_ten_k_in_fifty_minutes() {
    let session = ten_k_in_fifty();

    assert_eq!(session.pace_sec_per_km(), Some(300.0));
    assert_eq!(session.pace_string(), "5:00 /km");
    assert_close(session.speed_in_display_unit().unwrap(), 12.0, 1e-12);
    assert_eq!(session.speed_string(), "12.0 km/h");
    assert_eq!(session.formatted_distance(), "10.00");
    assert_eq!(session.formatted_duration(), "00:50:00");
    assert_eq!(session.mode(), SessionMode::Complete);
}

#[test]
fn test_live_pace_and_speed_match_distance_and_duration() {
    let cases = [(5.0, 1_500.0), (21.097, 6_000.0), (42.195, 10_800.0), (3.3, 1_234.0)];
    for (distance, duration) in cases {
        let mut session = empty_session(DistanceUnit::Kilometers);
        session.set_distance(distance);
        session.set_duration(duration);

        assert_eq!(session.pace_sec_per_km(), Some(duration / distance));
        assert_eq!(
            session.speed_in_display_unit(),
            Some(session.distance_in_display_unit() / (duration / 3600.0))
        );
    }
}

#[test]
fn test_distance_and_duration_independent_without_rate() {
    let mut session = empty_session(DistanceUnit::Kilometers);
    session.set_distance(8.0);

    assert_eq!(session.duration_sec(), 0.0);
    assert_eq!(session.mode(), SessionMode::Partial);
    assert_eq!(session.pace_sec_per_km(), None);
    assert_eq!(session.pace_string(), "0:00 /km");
    assert_eq!(session.speed_string(), "0.0 km/h");
    assert!(session.splits().is_empty());
}

#[test]
fn test_pace_entered_first_waits_for_distance() {
    let mut session = empty_session(DistanceUnit::Kilometers);
    session.set_pace(300.0);

    assert_eq!(session.mode(), SessionMode::Empty);
    assert_eq!(session.pace_string(), "5:00 /km");
    assert!(session.is_pace_entered_directly());

    session.set_distance(10.0);
    assert_eq!(session.duration_sec(), 3000.0);
    assert!(!session.is_pace_entered_directly());
}

#[test]
fn test_pace_then_duration_derives_distance() {
    let mut session = empty_session(DistanceUnit::Kilometers);
    session.set_pace(300.0);
    session.set_duration(1500.0);

    assert_close(session.distance_km(), 5.0, 1e-12);
    assert_eq!(session.formatted_distance(), "5.00");
}

#[test]
fn test_pace_and_distance_entry_orders_agree() {
    for unit in DistanceUnit::ALL {
        let mut pace_first = empty_session(unit);
        pace_first.set_pace(480.0);
        pace_first.set_distance(5.0);

        let mut distance_first = empty_session(unit);
        distance_first.set_distance(5.0);
        distance_first.set_pace(480.0);

        assert_eq!(pace_first.duration_sec(), distance_first.duration_sec());
    }
}

#[test]
fn test_pace_in_miles_converts_to_seconds_per_km() {
    let mut session = empty_session(DistanceUnit::Miles);
    session.set_pace(480.0);
    session.set_distance(5.0);

    assert_close(
        session.last_entered_pace_sec_per_km().unwrap(),
        480.0 / 1.60934,
        1e-12,
    );
    assert_eq!(session.duration_sec(), 2400.0);
    assert_eq!(session.pace_string(), "8:00 /mi");
}

#[test]
fn test_pace_overrides_duration_when_distance_known() {
    let mut session = ten_k_in_fifty();
    session.set_pace(360.0);

    assert_eq!(session.duration_sec(), 3600.0);
    assert_close(session.distance_km(), 10.0, 1e-12);
    assert_eq!(session.pace_string(), "6:00 /km");
}

#[test]
fn test_non_positive_pace_and_speed_ignored() {
    let mut session = empty_session(DistanceUnit::Kilometers);
    session.set_pace(0.0);
    session.set_pace(-30.0);
    session.set_pace(f64::NAN);
    session.set_speed(0.0);
    session.set_speed(-1.0);

    assert_eq!(session.last_entered_pace_sec_per_km(), None);
    assert_eq!(session.last_entered_speed_kmh(), None);
    assert_eq!(session.mode(), SessionMode::Empty);
}

#[test]
fn test_negative_and_non_finite_distance_or_duration_ignored() {
    let mut session = ten_k_in_fifty();
    session.set_distance(-1.0);
    session.set_distance(f64::INFINITY);
    session.set_duration(-60.0);
    session.set_duration(f64::NAN);

    assert_eq!(session.distance_km(), 10.0);
    assert_eq!(session.duration_sec(), 3000.0);
}

#[test]
fn test_speed_then_distance_derives_duration() {
    let mut session = empty_session(DistanceUnit::Kilometers);
    session.set_speed(12.0);
    assert_eq!(session.speed_string(), "12.0 km/h");
    assert!(session.is_speed_entered_directly());

    session.set_distance(10.0);
    assert_eq!(session.duration_sec(), 3000.0);
    assert_eq!(session.pace_string(), "5:00 /km");
}

#[test]
fn test_speed_in_miles_then_duration_derives_distance() {
    let mut session = empty_session(DistanceUnit::Miles);
    session.set_speed(7.5);
    session.set_duration(3600.0);

    assert_close(session.distance_km(), 7.5 * 1.60934, 1e-12);
    assert_eq!(session.formatted_distance(), "7.50");
    assert_eq!(session.speed_string(), "7.5 mi/h");
}

#[test]
fn test_remembered_pace_takes_precedence_over_speed() {
    let mut session = empty_session(DistanceUnit::Kilometers);
    session.set_pace(300.0);
    session.set_speed(10.0);
    session.set_distance(10.0);

    assert_eq!(session.duration_sec(), 3000.0);
}

#[test]
fn test_clearing_duration_rederives_from_remembered_pace() {
    let mut session = empty_session(DistanceUnit::Kilometers);
    session.set_pace(300.0);
    session.set_distance(10.0);
    assert_eq!(session.duration_sec(), 3000.0);

    session.set_duration(0.0);
    assert_eq!(session.duration_sec(), 3000.0);
    assert_eq!(session.mode(), SessionMode::Complete);
}

#[test]
fn test_clearing_distance_without_rate_leaves_partial() {
    let mut session = ten_k_in_fifty();
    session.set_distance(0.0);

    assert_eq!(session.mode(), SessionMode::Partial);
    assert_eq!(session.duration_sec(), 3000.0);
    assert_eq!(session.pace_string(), "0:00 /km");
}

#[test]
fn test_miles_display_of_kilometer_state() {
    let mut session = ten_k_in_fifty();
    session.set_display_unit(DistanceUnit::Miles);

    assert_eq!(session.distance_km(), 10.0);
    assert_eq!(session.duration_sec(), 3000.0);
    assert_eq!(session.formatted_distance(), "6.21");
    assert_eq!(session.pace_string(), "8:03 /mi");
    assert_eq!(session.speed_string(), "7.5 mi/h");
    assert_eq!(session.halfway_distance_string(), "3.1 mi");
}

#[test]
fn test_display_unit_change_keeps_split_label() {
    let mut session = empty_session(DistanceUnit::Kilometers);
    assert_eq!(session.split_interval_string(), "1.0");

    session.set_display_unit(DistanceUnit::Miles);

    assert_eq!(session.split_unit(), DistanceUnit::Miles);
    assert_eq!(session.split_interval_string(), "1.0");
    assert_close(session.split_interval_km(), 1.60934, 1e-12);

    session.set_display_unit(DistanceUnit::Kilometers);
    assert_eq!(session.split_interval_string(), "1.0");
    assert_close(session.split_interval_km(), 1.0, 1e-12);
}

#[test]
fn test_split_unit_change_keeps_real_interval() {
    let mut session = empty_session(DistanceUnit::Kilometers);
    session.set_split_unit(DistanceUnit::Miles);

    assert_eq!(session.display_unit(), DistanceUnit::Kilometers);
    assert_eq!(session.split_interval_km(), 1.0);
    assert_eq!(session.split_interval_string(), "0.6");
}

#[test]
fn test_split_interval_clamped_to_minimum() {
    let mut session = empty_session(DistanceUnit::Kilometers);
    session.set_split_interval(0.05);
    assert_close(session.split_interval_km(), 0.1, 1e-12);

    session.set_split_interval(f64::NAN);
    assert_close(session.split_interval_km(), 0.1, 1e-12);

    session.set_split_interval(5.0);
    assert_eq!(session.split_interval_string(), "5.0");
}

#[test]
fn test_reset_restores_defaults() {
    let mut session = ten_k_in_fifty();
    session.set_pace(330.0);
    session.set_speed(11.0);
    session.set_split_interval(5.0);

    session.reset();

    assert_eq!(session.distance_km(), 0.0);
    assert_eq!(session.duration_sec(), 0.0);
    assert_eq!(session.last_entered_pace_sec_per_km(), None);
    assert_eq!(session.last_entered_speed_kmh(), None);
    assert_eq!(session.split_interval_string(), "1.0");
    assert_eq!(session.pace_string(), "0:00 /km");
    assert_eq!(session.formatted_duration(), "00:00:00");
    assert_eq!(session.mode(), SessionMode::Empty);
}

#[test]
fn test_reset_does_not_resurrect_values_from_stale_rate() {
    let mut session = empty_session(DistanceUnit::Kilometers);
    session.set_pace(300.0);
    session.set_distance(10.0);

    session.reset();
    session.set_distance(10.0);

    assert_eq!(session.duration_sec(), 0.0);
}

#[test]
fn test_reset_split_unit_follows_display_unit() {
    let mut session = empty_session(DistanceUnit::Kilometers);
    session.set_display_unit(DistanceUnit::Miles);
    session.set_split_unit(DistanceUnit::Kilometers);

    session.reset();

    assert_eq!(session.display_unit(), DistanceUnit::Miles);
    assert_eq!(session.split_unit(), DistanceUnit::Miles);
    assert_eq!(session.split_interval_km(), 1.0);
}

#[test]
fn test_race_distance_preset() {
    let mut session = empty_session(DistanceUnit::Miles);
    session.set_race_distance(RaceDistance::HalfMarathon);

    assert_eq!(session.distance_km(), 21.097);
    assert_eq!(session.formatted_distance(), "13.11");
}

#[test]
fn test_distance_from_pace_and_duration() {
    let mut session = empty_session(DistanceUnit::Kilometers);
    session.set_distance_from_pace_minutes_seconds(4, 30, 2700.4);

    assert_close(session.distance_km(), 2700.4 / 270.0, 1e-12);
    assert_eq!(session.duration_sec(), 2700.0);
    assert_eq!(session.last_entered_pace_sec_per_km(), None);

    session.set_distance_from_pace(0.0, 2700.0);
    session.set_distance_from_pace(270.0, 0.0);
    assert_eq!(session.duration_sec(), 2700.0);
}

#[test]
fn test_halfway_split_strings() {
    let mut session = ten_k_in_fifty();
    assert_eq!(session.halfway_distance_string(), "5.0 km");
    assert_eq!(session.halfway_time_string(), "25:00");

    session.set_duration(3001.0);
    assert_eq!(session.halfway_time_string(), "25:01");

    session.set_duration(8000.0);
    assert_eq!(session.halfway_time_string(), "1:06:40");
}

#[test]
fn test_predicted_time_at_current_pace() {
    let session = ten_k_in_fifty();
    assert_eq!(session.predicted_time(5.0), "25:00");
    assert_eq!(session.predicted_time(21.097), "1:45:29");
    assert_eq!(session.predicted_time(0.0), "--:--");

    let empty = empty_session(DistanceUnit::Kilometers);
    assert_eq!(empty.predicted_time(5.0), "--:--");
}
