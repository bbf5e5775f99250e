// ABOUTME: Fixed syringe capacity table mapping barrel size to maximum units
// ABOUTME: Immutable lookup used by the capacity-fit check

use crate::models::SyringeClass;

/// Maximum graduated units for each syringe capacity class
///
/// One unit is 0.01 mL on every barrel, so the maximum is capacity x 100.
pub const SYRINGE_MAX_UNITS: [(SyringeClass, u32); 3] = [
    (SyringeClass::ThreeTenthsMl, 30),
    (SyringeClass::HalfMl, 50),
    (SyringeClass::OneMl, 100),
];
