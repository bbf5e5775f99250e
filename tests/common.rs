// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging setup and the reference calculator inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(dead_code, clippy::missing_panics_doc, clippy::must_use_candidate)]
//! Shared test utilities for `peptide_calc`

use peptide_dosing::{ProtocolInput, SyringeClass};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// 5 mg vial, 2.5 mL diluent, 250 mcg once daily, $50 per vial, 28 day cycle
pub fn reference_protocol(syringe: SyringeClass) -> ProtocolInput {
    ProtocolInput {
        vial_mg: 5.0,
        diluent_ml: 2.5,
        dose_mcg: 250.0,
        syringe,
        injections_per_day: 1.0,
        price_per_vial: Some(50.0),
        target_days: Some(28.0),
    }
}

/// Assert two floats agree to within a relative tolerance
pub fn assert_close(actual: f64, expected: f64, what: &str) {
    let tolerance = 1e-9 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "{what}: expected {expected}, got {actual}"
    );
}
