// ABOUTME: Helper modules for pace-cli
// ABOUTME: Provides text and JSON rendering of session results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod render;
