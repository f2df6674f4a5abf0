// ABOUTME: Environment configuration for session defaults and CLI output format
// ABOUTME: Parses PACE_DEFAULT_UNIT and PACE_OUTPUT_FORMAT with typed fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management

use std::env;
use std::fmt;
use std::str::FromStr;

use pace_core::constants::env_config;
use pace_core::errors::{AppError, AppResult};
use pace_core::models::DistanceUnit;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How the command line front end renders results
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(AppError::config(format!(
                "Unknown output format '{other}' (expected text or json)"
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Calculator configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalculatorConfig {
    /// Display unit of a new session
    pub default_unit: DistanceUnit,
    /// CLI output format
    pub output_format: OutputFormat,
}

impl CalculatorConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when a variable is set to an unrecognised value
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// Unset or empty variables fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when a variable is set to an unrecognised value
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default_unit = parse_var(&lookup, env_config::DEFAULT_UNIT, |raw| {
            raw.parse::<DistanceUnit>().map_err(|e| {
                AppError::config(format!("{}: {}", env_config::DEFAULT_UNIT, e.message))
            })
        })?
        .unwrap_or_default();

        let output_format = parse_var(&lookup, env_config::OUTPUT_FORMAT, |raw| {
            raw.parse::<OutputFormat>()
        })?
        .unwrap_or_default();

        let config = Self {
            default_unit,
            output_format,
        };
        debug!(
            unit = %config.default_unit,
            output = %config.output_format,
            "Calculator configuration loaded"
        );
        Ok(config)
    }
}

fn parse_var<F, T, P>(lookup: &F, key: &str, parse: P) -> AppResult<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    P: FnOnce(&str) -> AppResult<T>,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => parse(&raw).map(Some),
        _ => Ok(None),
    }
}
