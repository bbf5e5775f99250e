// ABOUTME: peptide-cli - command-line front end for the peptide dosing calculators
// ABOUTME: Reconstitution, syringe conversion, vial planning, and full protocol reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Concentration after adding 2.5 mL to a 5 mg vial
//! peptide-cli reconstitute --peptide-mg 5 --diluent-ml 2.5
//!
//! # Syringe units for a 250 mcg dose at 2 mg/mL on a 0.3 mL syringe
//! peptide-cli dose --dose-mcg 250 --concentration 2 --syringe 0.3
//!
//! # How long a 5 mg vial lasts at 250 mcg twice a day
//! peptide-cli vial --vial-mg 5 --dose-mcg 250 --per-day 2
//!
//! # Everything at once, as JSON
//! peptide-cli --format json plan --vial-mg 5 --diluent-ml 2.5 --dose-mcg 250 --price 50 --days 28
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use helpers::args;
use helpers::display::OutputOptions;
use peptide_calc::config::CalculatorConfig;
use peptide_calc::formatters::OutputFormat;
use peptide_calc::logging::{self, LoggingConfig};
use peptide_core::errors::{AppError, AppResult};
use peptide_dosing::ProtocolInput;
use std::process::ExitCode;
use std::time::Instant;
use tracing::error;

#[derive(Parser)]
#[command(
    name = "peptide-cli",
    about = "Peptide reconstitution and dosing calculator",
    long_about = "Computes concentration, injection volume, insulin syringe units, vial lifespan, and cost per dose."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format: text or json
    #[arg(long, global = true, default_value = "text")]
    format: String,

    /// Decimal places for text output (defaults to PEPTIDE_DISPLAY_DECIMALS or 2)
    #[arg(long, global = true)]
    decimals: Option<u8>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Concentration after dissolving a peptide in diluent
    Reconstitute {
        /// Peptide in the vial (mg)
        #[arg(long, allow_hyphen_values = true)]
        peptide_mg: String,
        /// Diluent added (mL)
        #[arg(long, allow_hyphen_values = true)]
        diluent_ml: String,
    },

    /// Diluent needed to reach a target concentration
    Diluent {
        /// Peptide in the vial (mg)
        #[arg(long, allow_hyphen_values = true)]
        peptide_mg: String,
        /// Desired concentration (mg/mL)
        #[arg(long, allow_hyphen_values = true)]
        target_mg_per_ml: String,
    },

    /// Injection volume and syringe units for a dose
    Dose {
        /// Desired dose (mcg)
        #[arg(long, allow_hyphen_values = true)]
        dose_mcg: String,
        /// Solution concentration (mg/mL)
        #[arg(long, allow_hyphen_values = true)]
        concentration: String,
        /// Syringe size: 0.3, 0.5 or 1 (mL)
        #[arg(long)]
        syringe: Option<String>,
    },

    /// Dose contained in a drawn volume
    Volume {
        /// Drawn volume (mL)
        #[arg(long, allow_hyphen_values = true)]
        volume_ml: String,
        /// Solution concentration (mg/mL)
        #[arg(long, allow_hyphen_values = true)]
        concentration: String,
    },

    /// Whole doses in a vial and the days they last
    Vial {
        /// Peptide in the vial (mg)
        #[arg(long, allow_hyphen_values = true)]
        vial_mg: String,
        /// Dose per injection (mcg)
        #[arg(long, allow_hyphen_values = true)]
        dose_mcg: String,
        /// Injections per day
        #[arg(long, allow_hyphen_values = true)]
        per_day: Option<String>,
    },

    /// Vials to buy for a cycle
    VialsNeeded {
        /// Peptide in the vial (mg)
        #[arg(long, allow_hyphen_values = true)]
        vial_mg: String,
        /// Dose per injection (mcg)
        #[arg(long, allow_hyphen_values = true)]
        dose_mcg: String,
        /// Injections per day
        #[arg(long, allow_hyphen_values = true)]
        per_day: Option<String>,
        /// Cycle length (days)
        #[arg(long, allow_hyphen_values = true)]
        days: String,
        /// Price per vial, to report total spend
        #[arg(long, allow_hyphen_values = true)]
        price: Option<String>,
    },

    /// Cost of a single dose
    Cost {
        /// Price per vial
        #[arg(long, allow_hyphen_values = true)]
        price: String,
        /// Peptide in the vial (mg)
        #[arg(long, allow_hyphen_values = true)]
        vial_mg: String,
        /// Dose per injection (mcg)
        #[arg(long, allow_hyphen_values = true)]
        dose_mcg: String,
    },

    /// Full protocol: concentration, syringe reading, vial lifespan, and cost
    Plan {
        /// Peptide in the vial (mg)
        #[arg(long, allow_hyphen_values = true)]
        vial_mg: String,
        /// Diluent added (mL)
        #[arg(long, allow_hyphen_values = true)]
        diluent_ml: String,
        /// Dose per injection (mcg)
        #[arg(long, allow_hyphen_values = true)]
        dose_mcg: String,
        /// Syringe size: 0.3, 0.5 or 1 (mL)
        #[arg(long)]
        syringe: Option<String>,
        /// Injections per day
        #[arg(long, allow_hyphen_values = true)]
        per_day: Option<String>,
        /// Price per vial
        #[arg(long, allow_hyphen_values = true)]
        price: Option<String>,
        /// Cycle length (days)
        #[arg(long, allow_hyphen_values = true)]
        days: Option<String>,
    },

    /// Reference chart of volume and units for common doses
    Chart {
        /// Solution concentration (mg/mL)
        #[arg(long, allow_hyphen_values = true)]
        concentration: String,
        /// Syringe size: 0.3, 0.5 or 1 (mL)
        #[arg(long)]
        syringe: Option<String>,
        /// Comma separated doses in mcg (defaults to PEPTIDE_CHART_DOSES)
        #[arg(long)]
        doses: Option<String>,
    },
}

impl Command {
    const fn name(&self) -> &'static str {
        match self {
            Self::Reconstitute { .. } => "reconstitute",
            Self::Diluent { .. } => "diluent",
            Self::Dose { .. } => "dose",
            Self::Volume { .. } => "volume",
            Self::Vial { .. } => "vial",
            Self::VialsNeeded { .. } => "vials-needed",
            Self::Cost { .. } => "cost",
            Self::Plan { .. } => "plan",
            Self::Chart { .. } => "chart",
        }
    }
}

fn run(command: Command, config: &CalculatorConfig, options: OutputOptions) -> AppResult<()> {
    match command {
        Command::Reconstitute {
            peptide_mg,
            diluent_ml,
        } => commands::reconstitution::concentration(
            args::number(&peptide_mg),
            args::number(&diluent_ml),
            options,
        ),
        Command::Diluent {
            peptide_mg,
            target_mg_per_ml,
        } => commands::reconstitution::diluent(
            args::number(&peptide_mg),
            args::number(&target_mg_per_ml),
            options,
        ),
        Command::Dose {
            dose_mcg,
            concentration,
            syringe,
        } => commands::dosing::dose(
            args::number(&dose_mcg),
            args::number(&concentration),
            args::syringe(syringe.as_deref(), config)?,
            options,
        ),
        Command::Volume {
            volume_ml,
            concentration,
        } => commands::dosing::volume(
            args::number(&volume_ml),
            args::number(&concentration),
            options,
        ),
        Command::Vial {
            vial_mg,
            dose_mcg,
            per_day,
        } => commands::cycle::duration(
            args::number(&vial_mg),
            args::number(&dose_mcg),
            args::injections_per_day(per_day.as_deref(), config),
            options,
        ),
        Command::VialsNeeded {
            vial_mg,
            dose_mcg,
            per_day,
            days,
            price,
        } => commands::cycle::vials_needed(
            args::number(&vial_mg),
            args::number(&dose_mcg),
            args::injections_per_day(per_day.as_deref(), config),
            args::number(&days),
            args::optional_number(price.as_deref()),
            options,
        ),
        Command::Cost {
            price,
            vial_mg,
            dose_mcg,
        } => commands::cycle::cost(
            args::number(&price),
            args::number(&vial_mg),
            args::number(&dose_mcg),
            options,
        ),
        Command::Plan {
            vial_mg,
            diluent_ml,
            dose_mcg,
            syringe,
            per_day,
            price,
            days,
        } => {
            let input = ProtocolInput {
                vial_mg: args::number(&vial_mg),
                diluent_ml: args::number(&diluent_ml),
                dose_mcg: args::number(&dose_mcg),
                syringe: args::syringe(syringe.as_deref(), config)?,
                injections_per_day: args::injections_per_day(per_day.as_deref(), config),
                price_per_vial: args::optional_number(price.as_deref()),
                target_days: args::optional_number(days.as_deref()),
            };
            commands::protocol::plan(&input, options)
        }
        Command::Chart {
            concentration,
            syringe,
            doses,
        } => commands::dosing::chart(
            args::number(&concentration),
            args::syringe(syringe.as_deref(), config)?,
            &args::chart_doses(doses.as_deref(), config)?,
            options,
        ),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // A second subscriber cannot be installed; calculators still work without logs
    if let Err(e) = LoggingConfig::for_cli(cli.verbose).init() {
        eprintln!("Logging disabled: {e}");
    }

    let config = match CalculatorConfig::load() {
        Ok(config) => config,
        Err(e) => return fail(&AppError::from(e)),
    };
    let decimals = cli.decimals.unwrap_or(config.display_decimals);
    if let Err(e) = check_decimals(decimals) {
        return fail(&e);
    }

    let options = OutputOptions {
        format: OutputFormat::from_str_param(&cli.format),
        decimals,
    };

    let name = cli.command.name();
    let started = Instant::now();
    match run(cli.command, &config, options) {
        Ok(()) => {
            logging::log_command(name, options.format.as_str(), started.elapsed().as_micros());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(cli.command = name, code = ?e.code, "{}", e.message);
            eprintln!("{e}");
            ExitCode::from(exit_status(&e))
        }
    }
}

fn check_decimals(decimals: u8) -> AppResult<()> {
    if decimals > peptide_calc::config::MAX_DISPLAY_DECIMALS {
        return Err(AppError::invalid_input(format!(
            "--decimals must be between 0 and {}, got {decimals}",
            peptide_calc::config::MAX_DISPLAY_DECIMALS
        )));
    }
    Ok(())
}

fn fail(error: &AppError) -> ExitCode {
    error!(code = ?error.code, "{}", error.message);
    eprintln!("{error}");
    ExitCode::from(exit_status(error))
}

fn exit_status(error: &AppError) -> u8 {
    u8::try_from(error.code.exit_code()).unwrap_or(1)
}
