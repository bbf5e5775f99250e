// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Argument coercion helpers for peptide-cli
// ABOUTME: Turns raw flag text into numbers and syringe classes, falling back to config defaults

use peptide_calc::config::{parse_dose_list, CalculatorConfig};
use peptide_calc::input::{parse_optional, parse_or_zero};
use peptide_core::errors::{AppError, AppResult};
use peptide_core::models::SyringeClass;

/// Numeric flag; malformed text reads as zero like an empty calculator field
pub fn number(raw: &str) -> f64 {
    parse_or_zero(raw)
}

/// Optional numeric flag
pub fn optional_number(raw: Option<&str>) -> Option<f64> {
    parse_optional(raw)
}

/// Syringe flag, or the configured default when absent
pub fn syringe(raw: Option<&str>, config: &CalculatorConfig) -> AppResult<SyringeClass> {
    raw.map_or(Ok(config.default_syringe), |label| {
        label.parse::<SyringeClass>().map_err(AppError::from)
    })
}

/// Injections-per-day flag, or the configured default when absent
pub fn injections_per_day(raw: Option<&str>, config: &CalculatorConfig) -> f64 {
    raw.map_or(config.default_injections_per_day, parse_or_zero)
}

/// Chart dose list flag, or the configured list when absent
pub fn chart_doses(raw: Option<&str>, config: &CalculatorConfig) -> AppResult<Vec<f64>> {
    raw.map_or_else(
        || Ok(config.chart_doses_mcg.clone()),
        |list| {
            parse_dose_list(list, "--doses")
                .map_err(|e| AppError::invalid_input(e.to_string()).with_source(e))
        },
    )
}
