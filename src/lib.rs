// ABOUTME: Main library entry point for the running pace calculator
// ABOUTME: Derives distance, duration, pace and speed, splits, and race predictions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pace Calculator
//!
//! Given any two of distance, duration, pace and speed, a [`PaceSession`]
//! derives the others, produces split rows across the full distance, and
//! predicts equivalent finish times at standard race distances.
//!
//! ## Quick Start
//!
//! ```
//! use pace_calculator::PaceSession;
//!
//! let mut session = PaceSession::new();
//! session.set_distance(10.0);
//! session.set_duration(3000.0);
//! assert_eq!(session.pace_string(), "5:00 /km");
//! assert_eq!(session.speed_string(), "12.0 km/h");
//! ```
//!
//! ## Architecture
//!
//! - **engine**: session state and the derivation rules
//! - **intelligence**: Riegel race-time predictions
//! - **formatters**: locale-free text rendering and clock parsing
//! - **config**: environment-driven defaults
//! - **logging**: `tracing` subscriber setup

/// Derivation engine: session state, rate resolution, splits
pub mod engine;

/// Environment-driven configuration
pub mod config;

/// Text formatting and clock parsing
pub mod formatters;

/// Race-time prediction
pub mod intelligence;

/// Structured logging setup
pub mod logging;

pub use pace_core::{constants, errors, models};

pub use engine::{PaceSession, SessionMode, SessionSnapshot, SplitRow};
pub use errors::{AppError, AppResult, ErrorCode};
pub use models::{DistanceUnit, RaceDistance};
