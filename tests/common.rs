// ABOUTME: Shared test utilities for pace calculator integration tests
// ABOUTME: Provides quiet logging setup, float comparison, and session builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::uninlined_format_args
)]
//! Shared test utilities for `pace_calculator`

use std::env;
use std::sync::Once;

use pace_calculator::{DistanceUnit, PaceSession};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Assert two floats agree within a relative tolerance
pub fn assert_close(actual: f64, expected: f64, relative: f64) {
    let scale = expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= relative * scale,
        "expected {expected}, got {actual} (tolerance {relative})"
    );
}

/// Kilometer session holding a complete 10 km / 50:00 performance
pub fn ten_k_in_fifty() -> PaceSession {
    init_test_logging();
    let mut session = PaceSession::new();
    session.set_distance(10.0);
    session.set_duration(3000.0);
    session
}

/// Empty session in the given display unit
pub fn empty_session(unit: DistanceUnit) -> PaceSession {
    init_test_logging();
    PaceSession::with_unit(unit)
}
