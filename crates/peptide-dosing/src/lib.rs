// ABOUTME: Peptide dosing arithmetic: reconstitution, syringe conversion, vial planning
// ABOUTME: Total, side-effect-free calculator functions consumed by every front end
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Peptide Dosing
//!
//! Calculator functions behind a reconstitution and dosing calculator.
//!
//! Every function here is total: there is no error channel. A zero or
//! negative divisor produces a zero-valued result so that a calculator
//! recomputing on every keystroke keeps rendering while fields are half
//! typed. Other negative inputs are not rejected and flow through the
//! formulas as written. `NaN` is not guarded and propagates; callers coerce
//! unparsed fields before calling in.
//!
//! ## Modules
//!
//! - **reconstitution**: mass, diluent, and concentration conversions
//! - **dosing**: dose to injection volume and insulin syringe units
//! - **cycle**: vial lifespan, vials per cycle, and cost per dose
//! - **protocol**: one-call composition of the three calculators
//! - **chart**: dose reference table evaluated in parallel

/// Mass, diluent volume, and concentration arithmetic
pub mod reconstitution;

/// Dose, volume, and syringe unit conversion
pub mod dosing;

/// Vial lifespan and cost planning
pub mod cycle;

/// End-to-end protocol calculation
pub mod protocol;

/// Dose reference chart
pub mod chart;

pub use chart::{dose_chart, DoseChartRow, COMMON_DOSES_MCG};
pub use cycle::{
    cost_per_dose, cycle_cost, vial_duration_days, vials_needed_for_days, DoseCost, VialDuration,
};
pub use dosing::{
    dose_to_volume, dose_to_volume_with_syringe, max_units_for, units_to_volume, volume_to_dose,
    DoseVolume, SyringeDose,
};
pub use peptide_core::models::SyringeClass;
pub use protocol::{calculate_protocol, ProtocolInput, ProtocolPlan};
pub use reconstitution::{
    concentration_mcg_per_unit, diluent_for_target_concentration, mcg_to_mg, mg_to_mcg,
    reconstitute, Reconstitution,
};
