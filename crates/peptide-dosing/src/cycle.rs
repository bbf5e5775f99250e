// ABOUTME: Vial lifespan, vials-per-cycle, and cost-per-dose planning
// ABOUTME: Whole-dose counting with round-up purchasing of partial vials
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Cycle Planning Module
//!
//! A vial only yields whole doses, so dose counts are floored. Vial
//! purchases are rounded up because a partially used vial is still bought
//! whole. Zero or negative divisors (dose size, injection frequency, vial
//! lifespan) yield zero results.

use crate::reconstitution::mg_to_mcg;
use serde::{Deserialize, Serialize};

/// How long one vial lasts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VialDuration {
    /// Days of supply at the given frequency
    pub days: f64,
    /// Whole doses in the vial
    pub doses: f64,
}

impl VialDuration {
    const ZERO: Self = Self {
        days: 0.0,
        doses: 0.0,
    };
}

/// Price of a single dose
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoseCost {
    /// Cost of one dose, in the currency of the vial price
    pub cost_per_dose: f64,
    /// Whole doses in the vial
    pub doses_per_vial: f64,
}

fn whole_doses(vial_mg: f64, dose_mcg: f64) -> f64 {
    (mg_to_mcg(vial_mg) / dose_mcg).floor()
}

/// Whole doses in a vial and the days they cover
///
/// Formula:
/// - doses = floor(`vial_mg` x 1000 / `dose_mcg`)
/// - days = doses / `injections_per_day`
///
/// Returns zero days and zero doses when `dose_mcg <= 0` or
/// `injections_per_day <= 0`.
///
/// # Example
///
/// ```
/// use peptide_dosing::vial_duration_days;
///
/// let duration = vial_duration_days(5.0, 250.0, 1.0);
/// assert!((duration.doses - 20.0).abs() < f64::EPSILON);
/// assert!((duration.days - 20.0).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn vial_duration_days(vial_mg: f64, dose_mcg: f64, injections_per_day: f64) -> VialDuration {
    if dose_mcg <= 0.0 || injections_per_day <= 0.0 {
        return VialDuration::ZERO;
    }

    let doses = whole_doses(vial_mg, dose_mcg);
    VialDuration {
        days: doses / injections_per_day,
        doses,
    }
}

/// Vials to buy to cover `target_days`
///
/// Formula: ceil(`target_days` / days per vial), where days per vial comes
/// from [`vial_duration_days`]. Returns `0` when a vial lasts zero days or
/// less.
#[must_use]
pub fn vials_needed_for_days(
    vial_mg: f64,
    dose_mcg: f64,
    injections_per_day: f64,
    target_days: f64,
) -> i64 {
    let VialDuration { days, .. } = vial_duration_days(vial_mg, dose_mcg, injections_per_day);
    if days <= 0.0 {
        return 0;
    }
    (target_days / days).ceil() as i64
}

/// Cost of one dose drawn from a vial priced at `price_per_vial`
///
/// Formula:
/// - doses per vial = floor(`vial_mg` x 1000 / `dose_mcg`)
/// - cost per dose = `price_per_vial` / doses per vial
///
/// A dose of zero or below yields zeros, and a vial holding no whole dose
/// costs `0` per dose.
#[must_use]
pub fn cost_per_dose(price_per_vial: f64, vial_mg: f64, dose_mcg: f64) -> DoseCost {
    if dose_mcg <= 0.0 {
        return DoseCost {
            cost_per_dose: 0.0,
            doses_per_vial: 0.0,
        };
    }

    let doses_per_vial = whole_doses(vial_mg, dose_mcg);
    let cost_per_dose = if doses_per_vial > 0.0 {
        price_per_vial / doses_per_vial
    } else {
        0.0
    };

    DoseCost {
        cost_per_dose,
        doses_per_vial,
    }
}

/// Total spend for `vials` vials
#[must_use]
pub fn cycle_cost(price_per_vial: f64, vials: i64) -> f64 {
    price_per_vial * vials as f64
}
