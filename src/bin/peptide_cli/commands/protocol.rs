// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Full protocol command for peptide-cli
// ABOUTME: Runs every calculator over one set of inputs and prints the combined plan

use crate::helpers::display::{emit, OutputOptions};
use peptide_core::errors::AppResult;
use peptide_dosing::{calculate_protocol, ProtocolInput};

/// Print the combined protocol plan
pub fn plan(input: &ProtocolInput, options: OutputOptions) -> AppResult<()> {
    emit(&calculate_protocol(input), options)
}
