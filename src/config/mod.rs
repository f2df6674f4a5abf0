// ABOUTME: Configuration module for calculator defaults and output settings
// ABOUTME: Environment-only configuration, no config files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the pace calculator
//!
//! - **Environment**: session defaults and CLI rendering read from environment variables

/// Environment-driven calculator configuration
pub mod environment;

pub use environment::{CalculatorConfig, OutputFormat};
