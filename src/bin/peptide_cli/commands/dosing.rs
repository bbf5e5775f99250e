// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Dose conversion commands for peptide-cli
// ABOUTME: Dose to syringe units, volume back to dose, and the dose reference chart

use crate::helpers::display::{emit, OutputOptions};
use peptide_calc::formatters::Quantity;
use peptide_core::errors::AppResult;
use peptide_core::models::SyringeClass;
use peptide_dosing::{dose_chart, dose_to_volume_with_syringe, volume_to_dose};
use tracing::{debug, warn};

/// Print volume and syringe units for a dose
pub fn dose(
    dose_mcg: f64,
    concentration_mg_per_ml: f64,
    syringe: SyringeClass,
    options: OutputOptions,
) -> AppResult<()> {
    let result = dose_to_volume_with_syringe(dose_mcg, concentration_mg_per_ml, syringe);
    if !result.fits_in_syringe {
        warn!(
            units = result.units,
            max_units = result.max_units,
            "Dose does not fit the selected syringe"
        );
    }
    emit(&result, options)
}

/// Print the dose contained in a volume
pub fn volume(volume_ml: f64, concentration_mg_per_ml: f64, options: OutputOptions) -> AppResult<()> {
    let quantity = Quantity {
        label: "Dose",
        value: volume_to_dose(volume_ml, concentration_mg_per_ml),
        unit: "mcg",
    };
    emit(&quantity, options)
}

/// Print the dose reference chart
pub fn chart(
    concentration_mg_per_ml: f64,
    syringe: SyringeClass,
    doses_mcg: &[f64],
    options: OutputOptions,
) -> AppResult<()> {
    debug!(rows = doses_mcg.len(), "Building dose chart");
    let rows = dose_chart(concentration_mg_per_ml, syringe, doses_mcg);
    emit(&rows, options)
}
