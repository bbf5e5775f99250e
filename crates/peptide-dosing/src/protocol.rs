// ABOUTME: End-to-end protocol calculation chaining reconstitution, dosing, and cycle planning
// ABOUTME: Single entry point producing every calculator read-out for one set of inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::cycle::{
    cost_per_dose, cycle_cost, vial_duration_days, vials_needed_for_days, DoseCost, VialDuration,
};
use crate::dosing::{dose_to_volume_with_syringe, SyringeDose};
use crate::reconstitution::{concentration_mcg_per_unit, reconstitute, Reconstitution};
use peptide_core::models::SyringeClass;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Everything the calculator form collects
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProtocolInput {
    /// Peptide in the vial (mg)
    pub vial_mg: f64,
    /// Diluent added to the vial (mL)
    pub diluent_ml: f64,
    /// Desired dose per injection (mcg)
    pub dose_mcg: f64,
    /// Syringe barrel used to draw the dose
    pub syringe: SyringeClass,
    /// Injections per day
    pub injections_per_day: f64,
    /// Vial price, when cost planning is wanted
    pub price_per_vial: Option<f64>,
    /// Cycle length in days, when vial counting is wanted
    pub target_days: Option<f64>,
}

impl Default for ProtocolInput {
    fn default() -> Self {
        Self {
            vial_mg: 0.0,
            diluent_ml: 0.0,
            dose_mcg: 0.0,
            syringe: SyringeClass::default(),
            injections_per_day: 1.0,
            price_per_vial: None,
            target_days: None,
        }
    }
}

/// Complete calculator output for one [`ProtocolInput`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProtocolPlan {
    /// Concentration after reconstitution
    pub reconstitution: Reconstitution,
    /// Injection volume and syringe reading
    pub dose: SyringeDose,
    /// Micrograms in each syringe unit
    pub mcg_per_unit: f64,
    /// Smallest barrel that holds the dose, if any does
    pub smallest_fitting_syringe: Option<SyringeClass>,
    /// Vial lifespan
    pub duration: VialDuration,
    /// Per-dose cost, present when a vial price was given
    pub cost: Option<DoseCost>,
    /// Vials for the cycle, present when a cycle length was given
    pub vials_needed: Option<i64>,
    /// Spend for the cycle, present when both price and length were given
    pub total_cost: Option<f64>,
}

/// Run every calculator over one set of form inputs
///
/// The concentration from reconstitution feeds the dose conversion; vial
/// planning works from the vial mass and dose directly. Like the
/// individual calculators this never fails.
#[must_use]
pub fn calculate_protocol(input: &ProtocolInput) -> ProtocolPlan {
    let reconstitution = reconstitute(input.vial_mg, input.diluent_ml);
    let concentration = reconstitution.concentration_mg_per_ml;

    debug!(
        vial_mg = input.vial_mg,
        diluent_ml = input.diluent_ml,
        dose_mcg = input.dose_mcg,
        syringe = input.syringe.label(),
        concentration_mg_per_ml = concentration,
        "Calculating dosing protocol"
    );

    let dose = dose_to_volume_with_syringe(input.dose_mcg, concentration, input.syringe);
    let duration = vial_duration_days(input.vial_mg, input.dose_mcg, input.injections_per_day);

    let cost = input
        .price_per_vial
        .map(|price| cost_per_dose(price, input.vial_mg, input.dose_mcg));
    let vials_needed = input.target_days.map(|days| {
        vials_needed_for_days(
            input.vial_mg,
            input.dose_mcg,
            input.injections_per_day,
            days,
        )
    });
    let total_cost = input
        .price_per_vial
        .zip(vials_needed)
        .map(|(price, vials)| cycle_cost(price, vials));

    ProtocolPlan {
        reconstitution,
        dose,
        mcg_per_unit: concentration_mcg_per_unit(concentration),
        smallest_fitting_syringe: SyringeClass::smallest_fitting(dose.units),
        duration,
        cost,
        vials_needed,
        total_cost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_input() -> ProtocolInput {
        ProtocolInput {
            vial_mg: 5.0,
            diluent_ml: 2.5,
            dose_mcg: 250.0,
            syringe: SyringeClass::OneMl,
            injections_per_day: 1.0,
            price_per_vial: Some(50.0),
            target_days: Some(28.0),
        }
    }

    #[test]
    fn test_reference_protocol() {
        let plan = calculate_protocol(&reference_input());

        assert_eq!(plan.reconstitution.concentration_mg_per_ml, 2.0);
        assert_eq!(plan.dose.volume_ml, 0.125);
        assert_eq!(plan.dose.units, 13.0);
        assert!(plan.dose.fits_in_syringe);
        assert_eq!(plan.smallest_fitting_syringe, Some(SyringeClass::ThreeTenthsMl));
        assert_eq!(plan.duration.doses, 20.0);
        assert_eq!(plan.duration.days, 20.0);
        assert_eq!(plan.cost.map(|c| c.cost_per_dose), Some(2.5));
        assert_eq!(plan.vials_needed, Some(2));
        assert_eq!(plan.total_cost, Some(100.0));
    }

    #[test]
    fn test_optional_sections_absent() {
        let input = ProtocolInput {
            price_per_vial: None,
            target_days: None,
            ..reference_input()
        };
        let plan = calculate_protocol(&input);
        assert!(plan.cost.is_none());
        assert!(plan.vials_needed.is_none());
        assert!(plan.total_cost.is_none());
    }

    #[test]
    fn test_empty_form_is_all_zero() {
        let plan = calculate_protocol(&ProtocolInput::default());
        assert_eq!(plan.reconstitution.concentration_mg_per_ml, 0.0);
        assert_eq!(plan.dose.volume_ml, 0.0);
        assert_eq!(plan.dose.units, 0.0);
        assert!(plan.dose.fits_in_syringe);
        assert_eq!(plan.duration.days, 0.0);
    }

    #[test]
    fn test_plan_serializes_syringe_label() {
        let json = serde_json::to_value(calculate_protocol(&reference_input())).unwrap();
        assert_eq!(json["dose"]["syringe"], "1");
        assert_eq!(json["vials_needed"], 2);
    }
}
