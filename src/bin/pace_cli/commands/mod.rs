// ABOUTME: Command modules for pace-cli
// ABOUTME: Provides the calc, predict and splits subcommands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod calc;
pub mod predict;
pub mod splits;
