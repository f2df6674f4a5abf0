// ABOUTME: Application constants organized by domain
// ABOUTME: Unit conversions, split defaults, and race prediction constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Unit conversion constants
pub mod units;

/// Split interval defaults and tolerances
pub mod splits {
    /// Default split interval in kilometers
    pub const DEFAULT_SPLIT_INTERVAL_KM: f64 = 1.0;

    /// Smallest split interval accepted, expressed in the split unit
    pub const MIN_SPLIT_INTERVAL: f64 = 0.1;

    /// Remainders at or below this many kilometers do not get a finish row
    pub const REMAINDER_TOLERANCE_KM: f64 = 0.01;

    /// Most split rows generated for one distance
    ///
    /// Row count grows as distance over interval; above this limit no rows
    /// are produced.
    pub const MAX_SPLIT_ROWS: u64 = 10_000;
}

/// Race prediction constants
pub mod prediction {
    /// Riegel formula exponent (typical value for road running)
    pub const RIEGEL_EXPONENT: f64 = 1.06;

    /// Placeholder shown when no prediction can be made
    pub const NO_DATA: &str = "--:--";
}

/// Environment variable names read by the configuration layer
pub mod env_config {
    /// Initial display unit for new sessions (`km` or `mi`)
    pub const DEFAULT_UNIT: &str = "PACE_DEFAULT_UNIT";

    /// CLI output format (`text` or `json`)
    pub const OUTPUT_FORMAT: &str = "PACE_OUTPUT_FORMAT";

    /// Log output format (`json`, `pretty`, `compact`)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";

    /// Standard tracing filter directive
    pub const RUST_LOG: &str = "RUST_LOG";
}

/// Service identity used in structured logs
pub mod service_names {
    /// Name reported by the command line front end
    pub const PACE_CLI: &str = "pace-cli";
}
