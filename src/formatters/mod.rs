// ABOUTME: Output format abstraction for rendering calculator results as text or JSON
// ABOUTME: Fixed-decimal display rounding kept apart from the dosing arithmetic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! The calculators return full-precision values. Rounding to a fixed number
//! of decimals is a display concern and happens only here.
//!
//! ## Supported Formats
//!
//! - **Text**: Human-readable lines, rounded to the configured precision
//! - **JSON**: Full-precision values, for scripts and other front ends
//!
//! ## Usage
//!
//! ```rust
//! use peptide_calc::formatters::{format_output, OutputFormat};
//! use peptide_dosing::reconstitute;
//!
//! let result = reconstitute(5.0, 2.5);
//! let output = format_output(&result, OutputFormat::Text, 2).unwrap();
//! assert_eq!(output.data, "Concentration: 2.00 mg/mL");
//! ```

use peptide_core::errors::AppError;
use peptide_dosing::{
    DoseChartRow, DoseCost, DoseVolume, ProtocolPlan, Reconstitution, SyringeDose, VialDuration,
};
use serde::Serialize;
use std::fmt;
use std::fmt::Write as _;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text (default)
    #[default]
    Text,
    /// JSON with full-precision numbers
    Json,
}

impl OutputFormat {
    /// Parse format from string parameter (case-insensitive)
    /// Returns `Text` for unrecognized values
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Formatted output containing the rendered data and its format
#[derive(Debug, Clone)]
pub struct FormattedOutput {
    /// The rendered data
    pub data: String,
    /// The format used for rendering
    pub format: OutputFormat,
}

/// Error type for formatting operations
#[derive(Debug, Clone)]
pub struct FormatError {
    /// Error message describing what went wrong
    pub message: String,
    /// The format that was being used when the error occurred
    pub format: OutputFormat,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Format error ({}): {}", self.format, self.message)
    }
}

impl std::error::Error for FormatError {}

impl From<FormatError> for AppError {
    fn from(error: FormatError) -> Self {
        Self::new(
            peptide_core::errors::ErrorCode::SerializationError,
            error.to_string(),
        )
        .with_source(error)
    }
}

/// Round `value` to `decimals` places, ties away from zero
///
/// Negative zero is normalised so a tiny negative never prints as `-0.00`.
#[must_use]
pub fn round_to(value: f64, decimals: u8) -> f64 {
    let factor = 10_f64.powi(i32::from(decimals));
    (value * factor).round() / factor + 0.0
}

/// Render `value` with exactly `decimals` places
#[must_use]
pub fn format_fixed(value: f64, decimals: u8) -> String {
    let precision = usize::from(decimals);
    format!("{:.precision$}", round_to(value, decimals))
}

/// A single labelled number, for calculators that return a bare value
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quantity {
    /// What the number is
    pub label: &'static str,
    /// The number
    pub value: f64,
    /// Unit suffix
    pub unit: &'static str,
}

/// Human-readable rendering of a calculator result
pub trait TextReport {
    /// Render as text lines, rounding to `decimals` places
    fn render_text(&self, decimals: u8) -> String;
}

impl TextReport for Quantity {
    fn render_text(&self, decimals: u8) -> String {
        format!(
            "{}: {} {}",
            self.label,
            format_fixed(self.value, decimals),
            self.unit
        )
    }
}

impl TextReport for Reconstitution {
    fn render_text(&self, decimals: u8) -> String {
        format!(
            "Concentration: {} mg/mL",
            format_fixed(self.concentration_mg_per_ml, decimals)
        )
    }
}

impl TextReport for DoseVolume {
    fn render_text(&self, decimals: u8) -> String {
        format!(
            "Volume: {} mL\nUnits: {}",
            format_fixed(self.volume_ml, decimals),
            format_fixed(self.units, 0)
        )
    }
}

impl TextReport for SyringeDose {
    fn render_text(&self, decimals: u8) -> String {
        let mut text = format!(
            "Volume: {} mL\nUnits: {} of {} on a {} syringe",
            format_fixed(self.volume_ml, decimals),
            format_fixed(self.units, 0),
            self.max_units,
            self.syringe
        );
        if !self.fits_in_syringe {
            text.push_str("\nWarning: dose exceeds syringe capacity, use a larger syringe");
        }
        text
    }
}

impl TextReport for VialDuration {
    fn render_text(&self, decimals: u8) -> String {
        format!(
            "Doses per vial: {}\nDays per vial: {}",
            format_fixed(self.doses, 0),
            format_fixed(self.days, decimals)
        )
    }
}

impl TextReport for DoseCost {
    fn render_text(&self, decimals: u8) -> String {
        format!(
            "Doses per vial: {}\nCost per dose: {}",
            format_fixed(self.doses_per_vial, 0),
            format_fixed(self.cost_per_dose, decimals)
        )
    }
}

impl TextReport for ProtocolPlan {
    fn render_text(&self, decimals: u8) -> String {
        let mut text = self.reconstitution.render_text(decimals);
        let _ = write!(
            text,
            "\nEach unit: {} mcg\n{}\n{}",
            format_fixed(self.mcg_per_unit, decimals),
            self.dose.render_text(decimals),
            self.duration.render_text(decimals)
        );
        if !self.dose.fits_in_syringe {
            let suggestion = self
                .smallest_fitting_syringe
                .map_or_else(|| "none, split the dose".to_owned(), |s| s.to_string());
            let _ = write!(text, "\nSmallest fitting syringe: {suggestion}");
        }
        if let Some(cost) = self.cost {
            let _ = write!(
                text,
                "\nCost per dose: {}",
                format_fixed(cost.cost_per_dose, decimals)
            );
        }
        if let Some(vials) = self.vials_needed {
            let _ = write!(text, "\nVials needed: {vials}");
        }
        if let Some(total) = self.total_cost {
            let _ = write!(text, "\nTotal cost: {}", format_fixed(total, decimals));
        }
        text
    }
}

impl TextReport for Vec<DoseChartRow> {
    fn render_text(&self, decimals: u8) -> String {
        let mut text = format!("{:>10}  {:>10}  {:>6}  fits", "dose mcg", "volume mL", "units");
        for row in self {
            let _ = write!(
                text,
                "\n{:>10}  {:>10}  {:>6}  {}",
                format_fixed(row.dose_mcg, 0),
                format_fixed(row.volume_ml, decimals),
                format_fixed(row.units, 0),
                if row.fits_in_syringe { "yes" } else { "no" }
            );
        }
        text
    }
}

/// Render a calculator result in the requested format
///
/// # Errors
///
/// Returns `FormatError` if JSON serialization fails
pub fn format_output<T: Serialize + TextReport>(
    data: &T,
    format: OutputFormat,
    decimals: u8,
) -> Result<FormattedOutput, FormatError> {
    let data = match format {
        OutputFormat::Text => data.render_text(decimals),
        OutputFormat::Json => serde_json::to_string_pretty(data).map_err(|e| FormatError {
            message: e.to_string(),
            format,
        })?,
    };

    Ok(FormattedOutput { data, format })
}
