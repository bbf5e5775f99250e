// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Reconstitution commands for peptide-cli
// ABOUTME: Concentration from mass and diluent, and diluent for a target concentration

use crate::helpers::display::{emit, OutputOptions};
use peptide_calc::formatters::Quantity;
use peptide_core::errors::AppResult;
use peptide_dosing::{diluent_for_target_concentration, reconstitute};
use tracing::debug;

/// Print the concentration after reconstitution
pub fn concentration(peptide_mg: f64, diluent_ml: f64, options: OutputOptions) -> AppResult<()> {
    let result = reconstitute(peptide_mg, diluent_ml);
    debug!(
        peptide_mg,
        diluent_ml,
        concentration = result.concentration_mg_per_ml,
        "Reconstituted"
    );
    emit(&result, options)
}

/// Print the diluent volume needed for a target concentration
pub fn diluent(peptide_mg: f64, target_mg_per_ml: f64, options: OutputOptions) -> AppResult<()> {
    let quantity = Quantity {
        label: "Diluent",
        value: diluent_for_target_concentration(peptide_mg, target_mg_per_ml),
        unit: "mL",
    };
    emit(&quantity, options)
}
