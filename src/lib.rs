// ABOUTME: Main library entry point for the peptide dosing calculator application
// ABOUTME: Configuration, logging, input coercion, and result formatting for front ends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Peptide Calc
//!
//! Application layer around the `peptide-dosing` calculators. The
//! arithmetic lives in that crate; this crate adds what a front end needs
//! to drive it: settings, logging, turning raw field text into numbers,
//! and rendering results.
//!
//! ## Architecture
//!
//! - **peptide-core**: error types, unit constants, syringe model
//! - **peptide-dosing**: reconstitution, syringe conversion, vial planning
//! - **peptide-calc** (this crate): config, logging, input, formatters,
//!   and the `peptide-cli` binary
//!
//! ## Example Usage
//!
//! ```rust
//! use peptide_calc::formatters::{format_output, OutputFormat};
//! use peptide_calc::input::parse_or_zero;
//! use peptide_dosing::{calculate_protocol, ProtocolInput, SyringeClass};
//!
//! let input = ProtocolInput {
//!     vial_mg: parse_or_zero("5"),
//!     diluent_ml: parse_or_zero("2.5"),
//!     dose_mcg: parse_or_zero("250"),
//!     syringe: SyringeClass::OneMl,
//!     ..ProtocolInput::default()
//! };
//! let plan = calculate_protocol(&input);
//! let output = format_output(&plan, OutputFormat::Text, 2).unwrap();
//! assert!(output.data.contains("Concentration: 2.00 mg/mL"));
//! ```

/// Calculator settings and environment overrides
pub mod config;

/// Output formats and display rounding
pub mod formatters;

/// Coercion of raw field text into calculator inputs
pub mod input;

/// Structured logging setup
pub mod logging;

pub use peptide_core::errors::{AppError, AppResult, ErrorCode};
