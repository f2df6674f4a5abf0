// ABOUTME: Core types and constants for the running pace calculator
// ABOUTME: Foundation crate with error handling, unit constants, and distance models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pace Core
//!
//! Foundation crate providing shared types and constants for the pace
//! calculator. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Unit conversions and calculation constants organized by domain
//! - **models**: `DistanceUnit` and `RaceDistance`

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (distance units, race distances)
pub mod models;
