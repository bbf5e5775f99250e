// ABOUTME: Configuration module for calculator front ends
// ABOUTME: Re-exports the calculator settings and their error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Calculator presentation defaults loaded from the environment
pub mod calculator;

/// Configuration error types
pub mod error;

pub use calculator::{env_vars, parse_dose_list, CalculatorConfig, MAX_DISPLAY_DECIMALS};
pub use error::ConfigError;
