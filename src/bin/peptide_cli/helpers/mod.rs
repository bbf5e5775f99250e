// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports helper modules for peptide-cli
// ABOUTME: Provides access to argument parsing and output display utilities

pub mod args;
pub mod display;
