// ABOUTME: Derivation engine resolving distance, duration, pace and speed
// ABOUTME: Session state, rate resolution, split generation and snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Derivation Engine
//!
//! The numeric rules live in [`derivation`] and [`splits`] as pure functions;
//! [`PaceSession`] holds the state and sequences each edit with exactly one
//! derivation pass.
//!
//! The session is single-threaded. Callers sharing one across threads should
//! wrap the whole value in a single lock, because its fields are read and
//! written together.

/// Pure rate-resolution rules
pub mod derivation;

/// Pace session state and setters
pub mod session;

/// Serializable session view
pub mod snapshot;

/// Pure split-point generation
pub mod splits;

pub use derivation::{Derived, RememberedRate};
pub use session::{PaceSession, SessionMode, SplitRow};
pub use snapshot::SessionSnapshot;
pub use splits::{split_points, SplitPoint};
