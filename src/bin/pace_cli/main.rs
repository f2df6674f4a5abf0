// ABOUTME: pace-cli - command-line front end for the pace calculator engine
// ABOUTME: Parses distances, clock times, paces and speeds and renders the derived session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # 10 km in 50 minutes: pace, speed, splits and race predictions
//! pace-cli calc --distance 10 --time 50:00
//!
//! # Marathon at 4:30 /km
//! pace-cli calc --race marathon --pace 4:30
//!
//! # Miles, JSON output
//! pace-cli --unit mi --json calc --distance 6.2 --speed 7.5
//!
//! # Riegel prediction from a 10 km result
//! pace-cli predict --distance 10 --time 45:00 --target 21.097
//!
//! # Splits every 5 km
//! pace-cli --split 5 splits --distance 21.097 --pace 5:15
//! ```

mod commands;
mod helpers;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use pace_calculator::config::{CalculatorConfig, OutputFormat};
use pace_calculator::errors::{AppError, ErrorResponse};
use pace_calculator::formatters::parse_clock;
use pace_calculator::logging::LoggingConfig;
use pace_calculator::models::{DistanceUnit, RaceDistance};
use pace_calculator::PaceSession;
use tracing::{debug, info};

use helpers::render::Renderer;

#[derive(Parser)]
#[command(
    name = "pace-cli",
    about = "Running pace calculator",
    long_about = "Give any two of distance, time, pace and speed to derive the rest, with splits and race predictions."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Unit for distance, pace and speed (km or mi); defaults to PACE_DEFAULT_UNIT
    #[arg(long, global = true)]
    unit: Option<DistanceUnit>,

    /// Split interval in the display unit
    #[arg(long, global = true)]
    split: Option<f64>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Derive the full session from any two inputs
    Calc {
        /// Distance in the display unit
        #[arg(long, short = 'd', conflicts_with = "race")]
        distance: Option<f64>,

        /// Standard race distance (5k, 10k, half, marathon)
        #[arg(long, short = 'r')]
        race: Option<RaceDistance>,

        /// Elapsed time (SS, MM:SS or H:MM:SS)
        #[arg(long, short = 't', value_parser = parse_clock_arg)]
        time: Option<f64>,

        /// Pace per display unit (M:SS)
        #[arg(long, short = 'p', value_parser = parse_clock_arg)]
        pace: Option<f64>,

        /// Speed in display units per hour
        #[arg(long, short = 's')]
        speed: Option<f64>,
    },

    /// Riegel equivalent times from a known performance
    Predict {
        /// Known distance in the display unit
        #[arg(long, short = 'd')]
        distance: f64,

        /// Known time (SS, MM:SS or H:MM:SS)
        #[arg(long, short = 't', value_parser = parse_clock_arg)]
        time: f64,

        /// Target distance in kilometers (standard races when omitted)
        #[arg(long)]
        target: Option<f64>,
    },

    /// Split table for a distance at a pace or finish time
    Splits {
        /// Distance in the display unit
        #[arg(long, short = 'd')]
        distance: f64,

        /// Finish time (SS, MM:SS or H:MM:SS)
        #[arg(long, short = 't', value_parser = parse_clock_arg, conflicts_with = "pace")]
        time: Option<f64>,

        /// Pace per display unit (M:SS)
        #[arg(long, short = 'p', value_parser = parse_clock_arg)]
        pace: Option<f64>,
    },
}

fn parse_clock_arg(text: &str) -> Result<f64, AppError> {
    parse_clock(text)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let json_errors = cli.json;

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err, json_errors),
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let mut config = CalculatorConfig::from_env()?;
    if let Some(unit) = cli.unit {
        config.default_unit = unit;
    }
    if cli.json {
        config.output_format = OutputFormat::Json;
    }
    info!(unit = %config.default_unit, output = %config.output_format, "pace-cli starting");

    let mut session = PaceSession::from_config(&config);
    if let Some(split) = cli.split {
        session.set_split_interval(split);
    }
    let renderer = Renderer::new(config.output_format);

    match cli.command {
        Command::Calc {
            distance,
            race,
            time,
            pace,
            speed,
        } => {
            let inputs = commands::calc::CalcInputs {
                distance,
                race,
                time,
                pace,
                speed,
            };
            commands::calc::run(&mut session, &inputs, &renderer)?;
        }
        Command::Predict {
            distance,
            time,
            target,
        } => {
            commands::predict::run(&mut session, distance, time, target, &renderer)?;
        }
        Command::Splits {
            distance,
            time,
            pace,
        } => {
            commands::splits::run(&mut session, distance, time, pace, &renderer)?;
        }
    }

    debug!(mode = ?session.mode(), "pace-cli finished");
    Ok(())
}

fn report(err: &anyhow::Error, json: bool) -> ExitCode {
    let Some(app_error) = err.downcast_ref::<AppError>() else {
        eprintln!("Error: {err:#}");
        return ExitCode::FAILURE;
    };

    if json {
        let response = ErrorResponse::from(AppError::new(app_error.code, app_error.message.clone()));
        match serde_json::to_string_pretty(&response) {
            Ok(body) => println!("{body}"),
            Err(_) => eprintln!("Error: {app_error}"),
        }
    } else {
        eprintln!("Error: {app_error}");
    }
    ExitCode::from(app_error.code.exit_code())
}
