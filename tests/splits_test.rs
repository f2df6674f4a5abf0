// ABOUTME: Integration tests for split row generation across the full distance
// ABOUTME: Validates row counts, finish rows, remainder tolerance, and split unit labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(clippy::float_cmp)]
#![allow(missing_docs)]

mod common;

use common::{empty_session, ten_k_in_fifty};
use pace_calculator::engine::split_points;
use pace_calculator::DistanceUnit;

#[test]
fn test_whole_kilometer_splits() {
    let session = ten_k_in_fifty();
    let rows = session.splits();

    assert_eq!(rows.len(), 10);
    assert_eq!(rows[0].distance_display, "1.0");
    assert_eq!(rows[0].duration_display, "05:00");
    assert_eq!(rows[4].duration_display, "25:00");
    assert_eq!(rows[9].distance_display, "10.0");
    assert_eq!(rows[9].duration_display, "50:00");
}

#[test]
fn test_remainder_adds_finish_row_at_total_distance() {
    let mut session = empty_session(DistanceUnit::Kilometers);
    session.set_split_interval(5.0);
    session.set_distance(21.097);
    session.set_pace(315.0);

    let rows = session.splits();
    let distances: Vec<&str> = rows.iter().map(|r| r.distance_display.as_str()).collect();
    let times: Vec<&str> = rows.iter().map(|r| r.duration_display.as_str()).collect();

    assert_eq!(distances, ["5.0", "10.0", "15.0", "20.0", "21.1"]);
    assert_eq!(times, ["26:15", "52:30", "1:18:45", "1:45:00", "1:50:46"]);
    assert_eq!(rows.last().unwrap().distance_km, 21.097);
}

#[test]
fn test_remainder_within_tolerance_has_no_finish_row() {
    let mut session = empty_session(DistanceUnit::Kilometers);
    session.set_distance(10.005);
    session.set_duration(3000.0);

    let rows = session.splits();
    assert_eq!(rows.len(), 10);
    assert_eq!(rows.last().unwrap().distance_display, "10.0");
}

#[test]
fn test_distance_shorter_than_interval_gives_single_finish_row() {
    let mut session = empty_session(DistanceUnit::Kilometers);
    session.set_split_interval(5.0);
    session.set_distance(3.0);
    session.set_duration(900.0);

    let rows = session.splits();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].distance_display, "3.0");
    assert_eq!(rows[0].duration_display, "15:00");
}

#[test]
fn test_splits_use_remembered_pace_only_with_distance() {
    let mut session = empty_session(DistanceUnit::Kilometers);
    session.set_pace(300.0);
    assert!(session.splits().is_empty());

    session.set_distance(2.0);
    assert_eq!(session.splits().len(), 2);
}

#[test]
fn test_mile_splits_after_unit_change() {
    let mut session = empty_session(DistanceUnit::Kilometers);
    session.set_display_unit(DistanceUnit::Miles);
    session.set_distance(3.0);
    session.set_pace(480.0);

    let rows = session.splits();
    let distances: Vec<&str> = rows.iter().map(|r| r.distance_display.as_str()).collect();
    assert_eq!(distances, ["1.0", "2.0", "3.0"]);
    assert_eq!(rows[0].duration_display, "08:00");
    assert_eq!(rows[2].duration_display, "24:00");
}

#[test]
fn test_split_labels_follow_split_unit_only() {
    let mut session = ten_k_in_fifty();
    session.set_split_unit(DistanceUnit::Miles);

    let rows = session.splits();
    assert_eq!(rows.len(), 10);
    assert_eq!(rows[0].distance_display, "0.6");
    assert_eq!(rows[9].distance_display, "6.2");
}

#[test]
fn test_split_row_count_matches_intervals_plus_remainder() {
    let cases = [
        (10.0, 1.0, 10),
        (10.5, 1.0, 11),
        (42.195, 5.0, 9),
        (0.5, 1.0, 1),
        (7.0, 2.0, 4),
    ];
    for (distance, interval, expected) in cases {
        let points = split_points(distance, interval, Some(300.0));
        assert_eq!(
            points.len(),
            expected,
            "distance {distance} interval {interval}"
        );
        assert_eq!(points.last().unwrap().distance_km, distance);
    }
}

#[test]
fn test_split_points_require_positive_inputs() {
    assert!(split_points(0.0, 1.0, Some(300.0)).is_empty());
    assert!(split_points(10.0, 0.0, Some(300.0)).is_empty());
    assert!(split_points(10.0, -1.0, Some(300.0)).is_empty());
    assert!(split_points(10.0, 1.0, None).is_empty());
    assert!(split_points(10.0, 1.0, Some(0.0)).is_empty());
}

#[test]
fn test_split_table_is_bounded() {
    assert!(split_points(1e9, 0.1, Some(300.0)).is_empty());
    assert!(split_points(1e300, 1e-300, Some(300.0)).is_empty());

    let largest = split_points(999.95, 0.1, Some(300.0));
    assert_eq!(largest.len(), 10_000);
    assert!(split_points(1000.0, 0.1, Some(300.0)).is_empty());

    let mut session = empty_session(DistanceUnit::Kilometers);
    session.set_split_interval(0.1);
    session.set_distance(1e9);
    session.set_duration(3e11);
    assert!(session.splits().is_empty());
}
