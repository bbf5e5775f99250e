// ABOUTME: Core types and constants for the peptide dosing calculator
// ABOUTME: Foundation crate with error handling, unit constants, and the syringe model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Peptide Core
//!
//! Foundation crate providing shared types and constants for the peptide
//! dosing calculator. This crate is designed to change infrequently, so the
//! arithmetic crate and the application crate can build on a stable base.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Unit conversion factors and the fixed syringe table
//! - **models**: Domain types shared by every front end (`SyringeClass`)

/// Unified error handling system with standard error codes
pub mod errors;

/// Unit conversion constants and the syringe capacity table
pub mod constants;

/// Core data models (`SyringeClass`)
pub mod models;
