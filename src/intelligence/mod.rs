// ABOUTME: Performance intelligence for the pace calculator
// ABOUTME: Hosts race-time prediction algorithms built on a known performance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Race-time prediction from a single known performance.

/// Riegel race-time predictions
pub mod performance_prediction;

pub use performance_prediction::{PerformancePredictor, RacePrediction, RacePredictions};
