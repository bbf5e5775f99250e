// ABOUTME: Unit conversion constants for mass and volume
// ABOUTME: Microgram/milligram factor and insulin syringe graduation

/// Micrograms in one milligram (exact)
pub const MCG_PER_MG: f64 = 1000.0;

/// Insulin syringe units in one milliliter, independent of barrel size
pub const UNITS_PER_ML: f64 = 100.0;

/// Decimal places used when a front end does not configure its own precision
pub const DEFAULT_DISPLAY_DECIMALS: u8 = 2;
