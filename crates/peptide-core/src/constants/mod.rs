// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Unit conversion factors, syringe graduation, and the syringe capacity table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Pure data constants grouped by domain. Nothing here is configurable at
//! runtime; the syringe table in particular is fixed by the physical
//! graduation of insulin syringes.

/// Unit conversion and measurement constants
pub mod units;

/// Syringe capacity classes and their unit scales
pub mod syringe;

pub use syringe::SYRINGE_MAX_UNITS;
pub use units::{MCG_PER_MG, UNITS_PER_ML};
