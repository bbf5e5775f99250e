// ABOUTME: End-to-end tests for the protocol planner and its rendered reports
// ABOUTME: Follows one vial from reconstitution through syringe reading, lifespan, and cost
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use peptide_calc::formatters::{format_output, OutputFormat};
use peptide_calc::input::parse_or_zero;
use peptide_dosing::{
    calculate_protocol, dose_chart, ProtocolInput, SyringeClass, COMMON_DOSES_MCG,
};
use serde_json::Value;

mod common;

// ============================================================================
// REFERENCE PROTOCOL: 5 mg vial, 2.5 mL water, 250 mcg daily
// ============================================================================

#[test]
fn test_reference_protocol_one_ml_syringe() {
    common::init_test_logging();
    let plan = calculate_protocol(&common::reference_protocol(SyringeClass::OneMl));

    assert_eq!(plan.reconstitution.concentration_mg_per_ml, 2.0);
    assert_eq!(plan.dose.volume_ml, 0.125);
    assert_eq!(plan.dose.units, 13.0);
    assert_eq!(plan.dose.max_units, 100);
    assert!(plan.dose.fits_in_syringe);
    assert_eq!(plan.mcg_per_unit, 20.0);
    assert_eq!(plan.smallest_fitting_syringe, Some(SyringeClass::ThreeTenthsMl));
    assert_eq!(plan.duration.doses, 20.0);
    assert_eq!(plan.duration.days, 20.0);
    assert_eq!(plan.cost.unwrap().cost_per_dose, 2.5);
    assert_eq!(plan.vials_needed, Some(2));
    assert_eq!(plan.total_cost, Some(100.0));
}

#[test]
fn test_reference_protocol_small_syringe() {
    let plan = calculate_protocol(&common::reference_protocol(SyringeClass::ThreeTenthsMl));

    assert_eq!(plan.dose.units, 13.0);
    assert_eq!(plan.dose.max_units, 30);
    assert!(plan.dose.fits_in_syringe);
}

#[test]
fn test_oversized_dose_suggests_larger_syringe() {
    let input = ProtocolInput {
        dose_mcg: 1500.0,
        syringe: SyringeClass::ThreeTenthsMl,
        ..common::reference_protocol(SyringeClass::ThreeTenthsMl)
    };
    let plan = calculate_protocol(&input);

    // 1500 mcg at 2 mg/mL is 0.75 mL
    assert_eq!(plan.dose.units, 75.0);
    assert!(!plan.dose.fits_in_syringe);
    assert_eq!(plan.smallest_fitting_syringe, Some(SyringeClass::OneMl));

    let text = format_output(&plan, OutputFormat::Text, 2).unwrap().data;
    assert!(text.contains("Warning"));
    assert!(text.contains("Smallest fitting syringe: 1 mL"));
}

#[test]
fn test_dose_larger_than_any_syringe() {
    let input = ProtocolInput {
        dose_mcg: 2500.0,
        ..common::reference_protocol(SyringeClass::OneMl)
    };
    let plan = calculate_protocol(&input);

    assert_eq!(plan.dose.units, 125.0);
    assert_eq!(plan.smallest_fitting_syringe, None);

    let text = format_output(&plan, OutputFormat::Text, 2).unwrap().data;
    assert!(text.contains("Smallest fitting syringe: none, split the dose"));
}

// ============================================================================
// EMPTY AND PARTIAL FORMS
// ============================================================================

#[test]
fn test_empty_form_yields_zeroes() {
    let fields = ["", "", ""];
    let input = ProtocolInput {
        vial_mg: parse_or_zero(fields[0]),
        diluent_ml: parse_or_zero(fields[1]),
        dose_mcg: parse_or_zero(fields[2]),
        ..ProtocolInput::default()
    };
    let plan = calculate_protocol(&input);

    assert_eq!(plan.reconstitution.concentration_mg_per_ml, 0.0);
    assert_eq!(plan.dose.volume_ml, 0.0);
    assert_eq!(plan.dose.units, 0.0);
    assert!(plan.dose.fits_in_syringe);
    assert_eq!(plan.duration.days, 0.0);
    assert_eq!(plan.cost, None);
    assert_eq!(plan.vials_needed, None);
    assert_eq!(plan.total_cost, None);
}

#[test]
fn test_missing_diluent_still_plans_vial() {
    let input = ProtocolInput {
        diluent_ml: 0.0,
        ..common::reference_protocol(SyringeClass::OneMl)
    };
    let plan = calculate_protocol(&input);

    assert_eq!(plan.reconstitution.concentration_mg_per_ml, 0.0);
    assert_eq!(plan.dose.units, 0.0);
    assert_eq!(plan.duration.doses, 20.0);
    assert_eq!(plan.vials_needed, Some(2));
}

#[test]
fn test_price_without_cycle_length() {
    let input = ProtocolInput {
        target_days: None,
        ..common::reference_protocol(SyringeClass::OneMl)
    };
    let plan = calculate_protocol(&input);

    assert!(plan.cost.is_some());
    assert_eq!(plan.vials_needed, None);
    assert_eq!(plan.total_cost, None);
}

// ============================================================================
// RENDERING
// ============================================================================

#[test]
fn test_reference_protocol_text_report() {
    let plan = calculate_protocol(&common::reference_protocol(SyringeClass::OneMl));
    let output = format_output(&plan, OutputFormat::Text, 2).unwrap();

    let expected = [
        "Concentration: 2.00 mg/mL",
        "Each unit: 20.00 mcg",
        "Volume: 0.13 mL",
        "Units: 13 of 100 on a 1 mL syringe",
        "Doses per vial: 20",
        "Days per vial: 20.00",
        "Cost per dose: 2.50",
        "Vials needed: 2",
        "Total cost: 100.00",
    ]
    .join("\n");
    assert_eq!(output.data, expected);
    assert_eq!(output.format, OutputFormat::Text);
}

#[test]
fn test_text_report_respects_precision() {
    let plan = calculate_protocol(&common::reference_protocol(SyringeClass::OneMl));
    let text = format_output(&plan, OutputFormat::Text, 3).unwrap().data;

    assert!(text.contains("Volume: 0.125 mL"));
    assert!(text.contains("Concentration: 2.000 mg/mL"));
}

#[test]
fn test_reference_protocol_json_report() {
    let plan = calculate_protocol(&common::reference_protocol(SyringeClass::HalfMl));
    let output = format_output(&plan, OutputFormat::Json, 2).unwrap();
    let json: Value = serde_json::from_str(&output.data).unwrap();

    assert_eq!(json["reconstitution"]["concentration_mg_per_ml"], 2.0);
    assert_eq!(json["dose"]["volume_ml"], 0.125);
    assert_eq!(json["dose"]["units"], 13.0);
    assert_eq!(json["dose"]["syringe"], "0.5");
    assert_eq!(json["dose"]["max_units"], 50);
    assert_eq!(json["dose"]["fits_in_syringe"], true);
    assert_eq!(json["smallest_fitting_syringe"], "0.3");
    assert_eq!(json["vials_needed"], 2);
    assert_eq!(json["total_cost"], 100.0);
}

#[test]
fn test_chart_report_lists_every_dose() {
    let rows = dose_chart(2.0, SyringeClass::HalfMl, &COMMON_DOSES_MCG);
    let text = format_output(&rows, OutputFormat::Text, 2).unwrap().data;

    // header plus one line per dose
    assert_eq!(text.lines().count(), COMMON_DOSES_MCG.len() + 1);
    let last = text.lines().last().unwrap();
    assert!(last.trim_start().starts_with("5000"));
    assert!(last.ends_with("no"));
}
