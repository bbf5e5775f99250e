// ABOUTME: Calculator presentation defaults loaded from environment variables
// ABOUTME: Display precision, default syringe and frequency, and the dose chart list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Calculator Configuration
//!
//! Only presentation defaults are configurable. The dosing arithmetic and
//! the syringe capacity table are fixed and never read from here.

use super::error::ConfigError;
use peptide_core::constants::units::DEFAULT_DISPLAY_DECIMALS;
use peptide_core::models::SyringeClass;
use peptide_dosing::COMMON_DOSES_MCG;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Highest display precision accepted
pub const MAX_DISPLAY_DECIMALS: u8 = 6;

/// Environment variable names
pub mod env_vars {
    /// Decimal places for text output
    pub const DISPLAY_DECIMALS: &str = "PEPTIDE_DISPLAY_DECIMALS";
    /// Syringe label used when none is given
    pub const DEFAULT_SYRINGE: &str = "PEPTIDE_DEFAULT_SYRINGE";
    /// Injections per day used when none is given
    pub const DEFAULT_INJECTIONS_PER_DAY: &str = "PEPTIDE_DEFAULT_INJECTIONS_PER_DAY";
    /// Comma separated dose list for the reference chart
    pub const CHART_DOSES: &str = "PEPTIDE_CHART_DOSES";
}

/// Presentation defaults for calculator front ends
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Decimal places used when rendering results as text
    pub display_decimals: u8,
    /// Syringe barrel assumed when the user picks none
    pub default_syringe: SyringeClass,
    /// Injection frequency assumed when the user gives none
    pub default_injections_per_day: f64,
    /// Doses listed on the reference chart (mcg)
    pub chart_doses_mcg: Vec<f64>,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            display_decimals: DEFAULT_DISPLAY_DECIMALS,
            default_syringe: SyringeClass::OneMl,
            default_injections_per_day: 1.0,
            chart_doses_mcg: COMMON_DOSES_MCG.to_vec(),
        }
    }
}

impl CalculatorConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable cannot be parsed or the
    /// resulting configuration fails validation
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error naming the first setting that is out of range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display_decimals > MAX_DISPLAY_DECIMALS {
            return Err(ConfigError::ValueOutOfRange(
                "display decimals must be between 0 and 6",
            ));
        }

        if !(self.default_injections_per_day.is_finite() && self.default_injections_per_day > 0.0)
        {
            return Err(ConfigError::ValueOutOfRange(
                "default injections per day must be positive",
            ));
        }

        if self.chart_doses_mcg.is_empty() {
            return Err(ConfigError::InvalidList("chart doses must not be empty"));
        }
        if self
            .chart_doses_mcg
            .iter()
            .any(|dose| !(dose.is_finite() && *dose > 0.0))
        {
            return Err(ConfigError::InvalidList("chart doses must be positive"));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(env_vars::DISPLAY_DECIMALS, &mut self.display_decimals)?;
        Self::apply_env_var(env_vars::DEFAULT_SYRINGE, &mut self.default_syringe)?;
        Self::apply_env_var(
            env_vars::DEFAULT_INJECTIONS_PER_DAY,
            &mut self.default_injections_per_day,
        )?;

        if let Ok(list) = env::var(env_vars::CHART_DOSES) {
            self.chart_doses_mcg = parse_dose_list(&list, env_vars::CHART_DOSES)?;
        }

        Ok(self)
    }
}

/// Parse a comma separated list of doses, ignoring blank entries
///
/// `source` names where the list came from (an environment variable or a
/// command-line flag) and is quoted in the error.
///
/// # Errors
///
/// Returns `ConfigError::Parse` if any entry is not a number
pub fn parse_dose_list(list: &str, source: &str) -> Result<Vec<f64>, ConfigError> {
    list.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            entry
                .parse::<f64>()
                .map_err(|_| ConfigError::Parse(format!("Invalid {source}: '{entry}'")))
        })
        .collect()
}
