// ABOUTME: Dose to injection volume conversion with insulin syringe unit read-out
// ABOUTME: Capacity-fit check against the fixed syringe table and the inverse volume to dose
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Dose Conversion Module
//!
//! Translates a desired dose (mcg) at a known concentration (mg/mL) into an
//! injection volume and the reading on an insulin syringe.
//!
//! Syringe units follow the insulin convention: 1 unit = 0.01 mL on every
//! barrel size. Only the unit read-out is rounded (half up, to the nearest
//! whole unit); the volume stays continuous and the rounding error is never
//! fed back into it.

use crate::reconstitution::mcg_to_mg;
use peptide_core::constants::{MCG_PER_MG, UNITS_PER_ML};
use peptide_core::models::SyringeClass;
use serde::{Deserialize, Serialize};

/// Injection volume and syringe reading for a dose
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoseVolume {
    /// Volume to draw (mL)
    pub volume_ml: f64,
    /// Insulin syringe units, a whole number
    pub units: f64,
}

/// Dose conversion checked against a specific syringe barrel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SyringeDose {
    /// Volume to draw (mL)
    pub volume_ml: f64,
    /// Insulin syringe units, a whole number
    pub units: f64,
    /// Barrel the dose was checked against
    pub syringe: SyringeClass,
    /// Maximum units on that barrel
    pub max_units: u32,
    /// Whether `units` fits on the barrel's scale
    pub fits_in_syringe: bool,
}

/// Round to the nearest integer with ties toward positive infinity
///
/// `f64::round` sends ties away from zero, which differs for negative
/// halves (`-12.5` must become `-12`).
pub(crate) fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Maximum graduated units for a syringe class (`0.3` -> 30, `0.5` -> 50, `1` -> 100)
#[must_use]
pub fn max_units_for(syringe: SyringeClass) -> u32 {
    syringe.max_units()
}

/// Volume and syringe units needed to deliver `dose_mcg`
///
/// Formula:
/// - volume (mL) = (`dose_mcg` / 1000) / `concentration_mg_per_ml`
/// - units = round(volume x 100)
///
/// A concentration of zero or below yields a zero volume and zero units.
///
/// # Example
///
/// ```
/// use peptide_dosing::dose_to_volume;
///
/// let dose = dose_to_volume(250.0, 2.0);
/// assert!((dose.volume_ml - 0.125).abs() < f64::EPSILON);
/// assert!((dose.units - 13.0).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn dose_to_volume(dose_mcg: f64, concentration_mg_per_ml: f64) -> DoseVolume {
    if concentration_mg_per_ml <= 0.0 {
        return DoseVolume {
            volume_ml: 0.0,
            units: 0.0,
        };
    }

    let volume_ml = mcg_to_mg(dose_mcg) / concentration_mg_per_ml;
    DoseVolume {
        volume_ml,
        units: round_half_up(volume_ml * UNITS_PER_ML),
    }
}

/// Dose conversion plus a capacity check against `syringe`
///
/// The unit count does not depend on the barrel; only `fits_in_syringe`
/// does. A dose fits when `units <= max_units_for(syringe)`.
#[must_use]
pub fn dose_to_volume_with_syringe(
    dose_mcg: f64,
    concentration_mg_per_ml: f64,
    syringe: SyringeClass,
) -> SyringeDose {
    let DoseVolume { volume_ml, units } = dose_to_volume(dose_mcg, concentration_mg_per_ml);
    let max_units = max_units_for(syringe);

    SyringeDose {
        volume_ml,
        units,
        syringe,
        max_units,
        fits_in_syringe: units <= f64::from(max_units),
    }
}

/// Dose (mcg) contained in `volume_ml` of solution at `concentration_mg_per_ml`
///
/// Formula: dose = volume x concentration x 1000
#[must_use]
pub fn volume_to_dose(volume_ml: f64, concentration_mg_per_ml: f64) -> f64 {
    volume_ml * concentration_mg_per_ml * MCG_PER_MG
}

/// Volume (mL) marked by a syringe reading of `units`
#[must_use]
pub fn units_to_volume(units: f64) -> f64 {
    units / UNITS_PER_ML
}
