// ABOUTME: Reconstitution arithmetic converting peptide mass and diluent volume to concentration
// ABOUTME: Includes the inverse diluent calculation and mg/mcg conversions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Reconstitution Module
//!
//! Dissolving a lyophilized peptide of known mass in a known volume of
//! diluent gives a solution of concentration `mass / volume` (mg/mL). This
//! module computes that in both directions. No rounding happens here;
//! display precision belongs to the caller.

use peptide_core::constants::{MCG_PER_MG, UNITS_PER_ML};
use serde::{Deserialize, Serialize};

/// Result of dissolving a peptide in diluent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reconstitution {
    /// Resulting concentration in mg/mL
    pub concentration_mg_per_ml: f64,
}

/// Convert milligrams to micrograms
#[must_use]
pub fn mg_to_mcg(mg: f64) -> f64 {
    mg * MCG_PER_MG
}

/// Convert micrograms to milligrams
#[must_use]
pub fn mcg_to_mg(mcg: f64) -> f64 {
    mcg / MCG_PER_MG
}

/// Concentration after dissolving `peptide_mg` in `diluent_ml`
///
/// Formula: concentration = `peptide_mg` / `diluent_ml`
///
/// A diluent volume of zero or below yields a concentration of `0`.
///
/// # Example
///
/// ```
/// use peptide_dosing::reconstitute;
///
/// let result = reconstitute(5.0, 2.5);
/// assert!((result.concentration_mg_per_ml - 2.0).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn reconstitute(peptide_mg: f64, diluent_ml: f64) -> Reconstitution {
    let concentration_mg_per_ml = if diluent_ml <= 0.0 {
        0.0
    } else {
        peptide_mg / diluent_ml
    };

    Reconstitution {
        concentration_mg_per_ml,
    }
}

/// Diluent volume (mL) needed to reach `target_mg_per_ml`
///
/// Formula: diluent = `peptide_mg` / `target_mg_per_ml`
///
/// A target concentration of zero or below yields `0` mL.
#[must_use]
pub fn diluent_for_target_concentration(peptide_mg: f64, target_mg_per_ml: f64) -> f64 {
    if target_mg_per_ml <= 0.0 {
        return 0.0;
    }
    peptide_mg / target_mg_per_ml
}

/// Micrograms of peptide held in one syringe unit (0.01 mL)
#[must_use]
pub fn concentration_mcg_per_unit(concentration_mg_per_ml: f64) -> f64 {
    mg_to_mcg(concentration_mg_per_ml) / UNITS_PER_ML
}
