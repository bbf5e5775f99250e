// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output helpers for peptide-cli
// ABOUTME: Renders calculator results in the selected format and writes them to stdout

use peptide_calc::formatters::{format_output, OutputFormat, TextReport};
use peptide_core::errors::AppResult;
use serde::Serialize;

/// How results are rendered
#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    /// Text or JSON
    pub format: OutputFormat,
    /// Decimal places for text output
    pub decimals: u8,
}

/// Render a result and print it
pub fn emit<T: Serialize + TextReport>(data: &T, options: OutputOptions) -> AppResult<()> {
    let output = format_output(data, options.format, options.decimals)?;
    println!("{}", output.data);
    Ok(())
}
