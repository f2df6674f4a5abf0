// ABOUTME: Output formatting helpers for pace-cli
// ABOUTME: Renders session snapshots, split tables and predictions as text or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pace_calculator::config::OutputFormat;
use pace_calculator::errors::{AppError, AppResult};
use pace_calculator::formatters::format_clock;
use pace_calculator::intelligence::RacePrediction;
use pace_calculator::models::DistanceUnit;
use pace_calculator::{SessionSnapshot, SplitRow};
use serde::Serialize;
use serde_json::json;

/// Writes results to stdout in the configured format
pub struct Renderer {
    format: OutputFormat,
}

impl Renderer {
    #[must_use]
    pub const fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Everything derived for a session
    pub fn summary(&self, snapshot: &SessionSnapshot) -> AppResult<()> {
        if self.format == OutputFormat::Json {
            return print_json(snapshot);
        }

        println!("Distance: {} {}", snapshot.distance, snapshot.unit);
        println!("Time:     {}", snapshot.duration);
        println!(
            "Pace:     {}{}",
            snapshot.pace,
            entered_marker(snapshot.pace_entered_directly)
        );
        println!(
            "Speed:    {}{}",
            snapshot.speed,
            entered_marker(snapshot.speed_entered_directly)
        );
        println!(
            "Halfway:  {} at {}",
            snapshot.halfway_distance, snapshot.halfway_time
        );
        println!();
        print_split_table(&snapshot.splits, snapshot.split_unit, &snapshot.split_interval);
        println!();
        print_prediction_table(&snapshot.predictions);
        Ok(())
    }

    /// Split rows only
    pub fn splits(
        &self,
        rows: &[SplitRow],
        unit: DistanceUnit,
        interval: &str,
    ) -> AppResult<()> {
        if self.format == OutputFormat::Json {
            return print_json(&json!({
                "split_unit": unit,
                "split_interval": interval,
                "splits": rows,
            }));
        }
        print_split_table(rows, unit, interval);
        Ok(())
    }

    /// Standard race predictions
    pub fn predictions(&self, predictions: &[RacePrediction]) -> AppResult<()> {
        if self.format == OutputFormat::Json {
            return print_json(predictions);
        }
        print_prediction_table(predictions);
        Ok(())
    }

    /// One prediction for an arbitrary target distance in kilometers
    pub fn single_prediction(&self, target_km: f64, seconds: f64) -> AppResult<()> {
        let display = format_clock(seconds);
        if self.format == OutputFormat::Json {
            return print_json(&json!({
                "target_km": target_km,
                "seconds": seconds,
                "display": display,
            }));
        }
        println!("{target_km} km - {display}");
        Ok(())
    }
}

fn entered_marker(entered: bool) -> &'static str {
    if entered {
        " (entered)"
    } else {
        ""
    }
}

fn print_split_table(rows: &[SplitRow], unit: DistanceUnit, interval: &str) {
    println!("Splits every {interval} {unit}");
    if rows.is_empty() {
        println!("  Enter a distance and pace (or time) to see splits.");
        return;
    }
    let header = match unit {
        DistanceUnit::Kilometers => "Km",
        DistanceUnit::Miles => "Mi",
    };
    println!("  {header:>7}  Time");
    for row in rows {
        println!("  {:>7}  {}", row.distance_display, row.duration_display);
    }
}

fn print_prediction_table(predictions: &[RacePrediction]) {
    println!("Predicted race times");
    for prediction in predictions {
        println!("  {} - {}", prediction.race, prediction.display);
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    let body = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::internal("Failed to serialize output").with_source(e))?;
    println!("{body}");
    Ok(())
}
