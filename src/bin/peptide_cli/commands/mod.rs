// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for peptide-cli
// ABOUTME: Provides access to reconstitution, dosing, cycle, and protocol commands

pub mod cycle;
pub mod dosing;
pub mod protocol;
pub mod reconstitution;
