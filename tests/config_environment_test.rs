// ABOUTME: Unit tests for calculator configuration loaded from the environment
// ABOUTME: Validates overrides, defaults, range checks, and parse failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use peptide_calc::config::{env_vars, CalculatorConfig, ConfigError};
use peptide_calc::{AppError, ErrorCode};
use peptide_dosing::{SyringeClass, COMMON_DOSES_MCG};
use serial_test::serial;
use std::env;

const ALL_VARS: [&str; 4] = [
    env_vars::DISPLAY_DECIMALS,
    env_vars::DEFAULT_SYRINGE,
    env_vars::DEFAULT_INJECTIONS_PER_DAY,
    env_vars::CHART_DOSES,
];

fn clear_env() {
    for var in ALL_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_load_without_overrides_uses_defaults() {
    clear_env();
    let config = CalculatorConfig::load().unwrap();

    assert_eq!(config, CalculatorConfig::default());
    assert_eq!(config.display_decimals, 2);
    assert_eq!(config.default_syringe, SyringeClass::OneMl);
    assert_eq!(config.default_injections_per_day, 1.0);
    assert_eq!(config.chart_doses_mcg, COMMON_DOSES_MCG.to_vec());
}

#[test]
#[serial]
fn test_load_applies_every_override() {
    clear_env();
    env::set_var(env_vars::DISPLAY_DECIMALS, "3");
    env::set_var(env_vars::DEFAULT_SYRINGE, " .3 ");
    env::set_var(env_vars::DEFAULT_INJECTIONS_PER_DAY, "2");
    env::set_var(env_vars::CHART_DOSES, "100, 200, 300");

    let config = CalculatorConfig::load().unwrap();
    clear_env();

    assert_eq!(config.display_decimals, 3);
    assert_eq!(config.default_syringe, SyringeClass::ThreeTenthsMl);
    assert_eq!(config.default_injections_per_day, 2.0);
    assert_eq!(config.chart_doses_mcg, vec![100.0, 200.0, 300.0]);
}

#[test]
#[serial]
fn test_unparseable_decimals_rejected() {
    clear_env();
    env::set_var(env_vars::DISPLAY_DECIMALS, "two");

    let result = CalculatorConfig::load();
    clear_env();

    match result {
        Err(ConfigError::Parse(message)) => {
            assert!(message.contains(env_vars::DISPLAY_DECIMALS));
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
#[serial]
fn test_out_of_range_decimals_rejected() {
    clear_env();
    env::set_var(env_vars::DISPLAY_DECIMALS, "9");

    let result = CalculatorConfig::load();
    clear_env();

    assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));
}

#[test]
#[serial]
fn test_unknown_syringe_rejected() {
    clear_env();
    env::set_var(env_vars::DEFAULT_SYRINGE, "3ml");

    let result = CalculatorConfig::load();
    clear_env();

    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
#[serial]
fn test_zero_frequency_rejected() {
    clear_env();
    env::set_var(env_vars::DEFAULT_INJECTIONS_PER_DAY, "0");

    let result = CalculatorConfig::load();
    clear_env();

    assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));
}

#[test]
#[serial]
fn test_chart_list_errors() {
    clear_env();
    env::set_var(env_vars::CHART_DOSES, "100,lots");
    assert!(matches!(
        CalculatorConfig::load(),
        Err(ConfigError::Parse(_))
    ));

    env::set_var(env_vars::CHART_DOSES, " , ");
    assert!(matches!(
        CalculatorConfig::load(),
        Err(ConfigError::InvalidList(_))
    ));

    env::set_var(env_vars::CHART_DOSES, "250,-5");
    assert!(matches!(
        CalculatorConfig::load(),
        Err(ConfigError::InvalidList(_))
    ));
    clear_env();
}

#[test]
fn test_config_error_maps_to_config_code() {
    let error: AppError =
        ConfigError::ValueOutOfRange("display decimals must be between 0 and 6").into();

    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(error.to_string().contains("display decimals"));
}
