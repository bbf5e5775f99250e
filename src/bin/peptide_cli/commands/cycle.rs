// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Vial planning commands for peptide-cli
// ABOUTME: Vial lifespan, vials for a cycle, and cost per dose

use crate::helpers::display::{emit, OutputOptions};
use peptide_calc::formatters::{format_fixed, TextReport};
use peptide_core::errors::AppResult;
use peptide_dosing::{cost_per_dose, cycle_cost, vial_duration_days, vials_needed_for_days};
use serde::Serialize;
use std::fmt::Write as _;

/// Vials needed for a cycle, with spend when a price is known
#[derive(Debug, Serialize)]
struct VialsNeeded {
    vials_needed: i64,
    total_cost: Option<f64>,
}

impl TextReport for VialsNeeded {
    fn render_text(&self, decimals: u8) -> String {
        let mut text = format!("Vials needed: {}", self.vials_needed);
        if let Some(total) = self.total_cost {
            let _ = write!(text, "\nTotal cost: {}", format_fixed(total, decimals));
        }
        text
    }
}

/// Print how long one vial lasts
pub fn duration(
    vial_mg: f64,
    dose_mcg: f64,
    injections_per_day: f64,
    options: OutputOptions,
) -> AppResult<()> {
    emit(
        &vial_duration_days(vial_mg, dose_mcg, injections_per_day),
        options,
    )
}

/// Print vials (and spend) for a cycle of `target_days`
pub fn vials_needed(
    vial_mg: f64,
    dose_mcg: f64,
    injections_per_day: f64,
    target_days: f64,
    price_per_vial: Option<f64>,
    options: OutputOptions,
) -> AppResult<()> {
    let vials_needed = vials_needed_for_days(vial_mg, dose_mcg, injections_per_day, target_days);
    let report = VialsNeeded {
        vials_needed,
        total_cost: price_per_vial.map(|price| cycle_cost(price, vials_needed)),
    };
    emit(&report, options)
}

/// Print cost per dose
pub fn cost(
    price_per_vial: f64,
    vial_mg: f64,
    dose_mcg: f64,
    options: OutputOptions,
) -> AppResult<()> {
    emit(&cost_per_dose(price_per_vial, vial_mg, dose_mcg), options)
}
