// ABOUTME: Core data models shared across the calculator workspace
// ABOUTME: Re-exports the syringe capacity class and its parse error

/// Insulin syringe capacity classes
pub mod syringe;

pub use syringe::{SyringeClass, SyringeClassError};
