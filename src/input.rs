// ABOUTME: Caller-side coercion of raw calculator field input into numbers
// ABOUTME: Unparseable, NaN, and infinite input becomes zero before reaching the arithmetic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! The dosing functions do not guard against `NaN`; it would propagate
//! through every formula. Front ends read fields through these helpers so
//! a half-typed or empty field behaves like `0`.

/// Replace `NaN` and infinities with `0`
#[must_use]
pub fn coerce(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Parse a text field, treating anything unparseable as `0`
///
/// Surrounding whitespace and a trailing unit suffix such as `mg`, `mcg`,
/// `ml` or `iu` are ignored, so `"5 mg"` reads as `5`.
#[must_use]
pub fn parse_or_zero(raw: &str) -> f64 {
    let trimmed = raw.trim();
    let numeric = trimmed
        .trim_end_matches(|c: char| c.is_ascii_alphabetic())
        .trim_end();
    numeric.parse::<f64>().map_or(0.0, coerce)
}

/// Parse an optional field; blank means absent
#[must_use]
pub fn parse_optional(raw: Option<&str>) -> Option<f64> {
    raw.filter(|value| !value.trim().is_empty())
        .map(parse_or_zero)
}
