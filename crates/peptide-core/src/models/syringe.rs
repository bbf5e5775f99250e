// ABOUTME: Insulin syringe capacity classes with their display labels
// ABOUTME: Parses the "0.3" / "0.5" / "1" labels and resolves maximum units

use crate::constants::SYRINGE_MAX_UNITS;
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Insulin syringe barrel capacity
///
/// Labels match the calculator's selector values, so serde and `FromStr`
/// both use `"0.3"`, `"0.5"` and `"1"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SyringeClass {
    /// 0.3 mL barrel, 30 units
    #[serde(rename = "0.3")]
    ThreeTenthsMl,
    /// 0.5 mL barrel, 50 units
    #[serde(rename = "0.5")]
    HalfMl,
    /// 1 mL barrel, 100 units
    #[default]
    #[serde(rename = "1")]
    OneMl,
}

impl SyringeClass {
    /// Every capacity class, smallest first
    pub const ALL: [Self; 3] = [Self::ThreeTenthsMl, Self::HalfMl, Self::OneMl];

    /// Maximum graduated units on this barrel
    #[must_use]
    pub fn max_units(self) -> u32 {
        SYRINGE_MAX_UNITS
            .iter()
            .find(|(class, _)| *class == self)
            .map_or(0, |(_, units)| *units)
    }

    /// Barrel capacity in milliliters
    #[must_use]
    pub const fn capacity_ml(self) -> f64 {
        match self {
            Self::ThreeTenthsMl => 0.3,
            Self::HalfMl => 0.5,
            Self::OneMl => 1.0,
        }
    }

    /// Selector label (`"0.3"`, `"0.5"`, `"1"`)
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ThreeTenthsMl => "0.3",
            Self::HalfMl => "0.5",
            Self::OneMl => "1",
        }
    }

    /// Smallest barrel whose scale holds `units`, if any
    #[must_use]
    pub fn smallest_fitting(units: f64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|class| units <= f64::from(class.max_units()))
    }
}

impl fmt::Display for SyringeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mL", self.label())
    }
}

/// Syringe label parse failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyringeClassError {
    /// Label is not one of the supported barrel sizes
    #[error("unknown syringe size '{0}', expected one of 0.3, 0.5, 1")]
    Unknown(String),
}

impl From<SyringeClassError> for AppError {
    fn from(error: SyringeClassError) -> Self {
        Self::invalid_format(error.to_string()).with_source(error)
    }
}

impl FromStr for SyringeClass {
    type Err = SyringeClassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0.3" | ".3" => Ok(Self::ThreeTenthsMl),
            "0.5" | ".5" => Ok(Self::HalfMl),
            "1" | "1.0" => Ok(Self::OneMl),
            other => Err(SyringeClassError::Unknown(other.to_owned())),
        }
    }
}
