// ABOUTME: Dose reference chart evaluating the syringe conversion over a list of doses
// ABOUTME: Rows are computed in parallel with rayon and returned in input order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::dosing::dose_to_volume_with_syringe;
use peptide_core::models::SyringeClass;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Doses shown on the default reference chart (mcg)
pub const COMMON_DOSES_MCG: [f64; 8] = [100.0, 250.0, 500.0, 750.0, 1000.0, 2000.0, 2500.0, 5000.0];

/// One line of the dose chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoseChartRow {
    /// Dose (mcg)
    pub dose_mcg: f64,
    /// Volume to draw (mL)
    pub volume_ml: f64,
    /// Syringe units
    pub units: f64,
    /// Whether the dose fits on the chart's syringe
    pub fits_in_syringe: bool,
}

/// Conversion rows for each of `doses_mcg` at one concentration and barrel
#[must_use]
pub fn dose_chart(
    concentration_mg_per_ml: f64,
    syringe: SyringeClass,
    doses_mcg: &[f64],
) -> Vec<DoseChartRow> {
    doses_mcg
        .par_iter()
        .map(|&dose_mcg| {
            let dose = dose_to_volume_with_syringe(dose_mcg, concentration_mg_per_ml, syringe);
            DoseChartRow {
                dose_mcg,
                volume_ml: dose.volume_ml,
                units: dose.units,
                fits_in_syringe: dose.fits_in_syringe,
            }
        })
        .collect()
}
