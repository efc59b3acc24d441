// ABOUTME: Ahara CLI - command-line caller for the nutrient deficiency risk engine
// ABOUTME: Runs single, batch, weekly, and food-list inference and prints constitution guides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Nutrition Intelligence
//!
//! Usage:
//! ```bash
//! # Predict deficiency risk for one meal (file or stdin)
//! ahara-cli predict --input meal.json
//! echo '{"iron": 2, "vitaminC": 100, "protein": 80, "dosha": "VATA"}' | ahara-cli predict
//!
//! # Evaluate a JSON array of meals
//! ahara-cli batch --input meals.json
//!
//! # Analyze a week of meals: {"log": {"days": [...]}, "profile": {...}}
//! ahara-cli weekly --input week.json
//!
//! # Analyze a meal given as foods: {"foods": ["spinach", "lentils"], "portions": [150], "profile": {...}}
//! ahara-cli analyze --input lunch.json
//!
//! # Goal-driven advice: {"profile": {"healthGoals": [...], ...}, "nutrition": {...}}
//! ahara-cli personalize --input me.json
//!
//! # Food guide, seasonal advice, and meal modifications
//! ahara-cli guide --constitution pitta --season summer --meal meal.json
//!
//! # Search the food nutrient table
//! ahara-cli foods --search rice
//!
//! # Use a different model artifact
//! ahara-cli --artifact /opt/models/v2.json predict --input meal.json
//! ```

mod commands;
mod helpers;

use ahara::config::AharaConfig;
use ahara::errors::{AppError, ErrorResponse};
use ahara::logging::LoggingConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "ahara-cli",
    about = "Ahara nutrient deficiency risk CLI",
    long_about = "Predicts iron, vitamin C, and protein deficiency risk for meals and prints constitution-aware dietary advice as JSON."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Model artifact path (overrides `AHARA_MODEL_ARTIFACT`)
    #[arg(long, global = true)]
    artifact: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Predict deficiency risk for one meal profile
    Predict {
        /// JSON file with one meal profile (stdin if omitted)
        #[arg(long, short = 'i')]
        input: Option<PathBuf>,
    },

    /// Predict deficiency risk for a JSON array of meal profiles
    Batch {
        /// JSON file with an array of meal profiles (stdin if omitted)
        #[arg(long, short = 'i')]
        input: Option<PathBuf>,
    },

    /// Analyze a week of logged meals
    Weekly {
        /// JSON file with `log` and `profile` (stdin if omitted)
        #[arg(long, short = 'i')]
        input: Option<PathBuf>,
    },

    /// Analyze a meal given as a list of foods
    Analyze {
        /// JSON file with `foods`, optional `portions`, and `profile` (stdin if omitted)
        #[arg(long, short = 'i')]
        input: Option<PathBuf>,
    },

    /// Personalized recommendations and supplement suggestions
    Personalize {
        /// JSON file with `profile` and `nutrition` (stdin if omitted)
        #[arg(long, short = 'i')]
        input: Option<PathBuf>,
    },

    /// Search the food nutrient table
    Foods {
        /// Case-insensitive name fragment (all foods if omitted)
        #[arg(long, short = 's')]
        search: Option<String>,
    },

    /// Show the food guide for a constitution
    Guide {
        /// Constitution name (VATA, PITTA, KAPHA)
        #[arg(long, short = 'c')]
        constitution: String,

        /// Season for seasonal advice (spring, summer, fall, winter)
        #[arg(long, short = 's')]
        season: Option<String>,

        /// Meal profile JSON file to derive meal modifications from
        #[arg(long, short = 'm')]
        meal: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    if let Err(e) = logging.init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let load_config = || -> anyhow::Result<AharaConfig> {
        let config = AharaConfig::from_env()?;
        Ok(match cli.artifact.clone() {
            Some(path) => config.with_model_artifact_path(path),
            None => config,
        })
    };

    match cli.command {
        Command::Predict { input } => {
            commands::inference::predict(&load_config()?, input.as_deref())
        }
        Command::Batch { input } => commands::inference::batch(&load_config()?, input.as_deref()),
        Command::Weekly { input } => {
            commands::inference::weekly(&load_config()?, input.as_deref())
        }
        Command::Analyze { input } => {
            commands::inference::analyze(&load_config()?, input.as_deref())
        }
        Command::Personalize { input } => {
            commands::inference::personalize(&load_config()?, input.as_deref())
        }
        Command::Foods { search } => commands::guide::foods(search.as_deref()),
        Command::Guide {
            constitution,
            season,
            meal,
        } => commands::guide::show(&constitution, season.as_deref(), meal.as_deref()),
    }
}

fn report_error(error: anyhow::Error) {
    match error.downcast::<AppError>() {
        Ok(app_error) => {
            let response = ErrorResponse::from(app_error);
            match serde_json::to_string_pretty(&response) {
                Ok(json) => eprintln!("{json}"),
                Err(_) => eprintln!("{}", response.error.message),
            }
        }
        Err(other) => eprintln!("Error: {other:#}"),
    }
}
