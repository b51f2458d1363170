// ABOUTME: PetCare CLI - command-line front end for feeding recommendations
// ABOUTME: Computes recommendations for animals and pet records, and prints the feeding guide
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PetCare Feeding
//!
//! Usage:
//! ```bash
//! # Recommendation for a 6 month old, 4 kg cat
//! petcare-cli recommend --species cat --weight 4 --age-months 6
//!
//! # Very active adult dog, size-adjusted life stages, JSON output
//! petcare-cli --format json --dog-age-policy size-adjusted \
//!     recommend --species dog --weight 30 --age-months 75 --activity high
//!
//! # Recommendation for a pet record with a birthday
//! petcare-cli pet --name Mochi --species cat --weight 4.2 --birthday 2023-05-14
//!
//! # Feeding guide for dogs
//! petcare-cli guide --species dog
//! ```

mod commands;
mod helpers;

use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use petcare::config::{load_feeding_config, PolicyOverrides};
use petcare::logging::LoggingConfig;
use petcare::{ActivityLevel, AppResult, DogAgePolicy, FeedingRecommendationEngine, MealCountPolicy};
use petcare_core::constants::display::DATE_FORMAT;
use tracing::debug;

use helpers::display::OutputFormat;

#[derive(Parser)]
#[command(
    name = "petcare-cli",
    version,
    about = "PetCare feeding recommendations",
    long_about = "Computes daily calories, food amount, meals per day, and a feeding schedule for cats and dogs."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Dog life-stage policy (simple, size-adjusted)
    #[arg(long, global = true)]
    dog_age_policy: Option<DogAgePolicy>,

    /// Meal count policy (age-category, age-months)
    #[arg(long, global = true)]
    meal_policy: Option<MealCountPolicy>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Feeding recommendation for an animal profile
    Recommend {
        /// Species (cat or dog)
        #[arg(long)]
        species: String,

        /// Body weight in kilograms
        #[arg(long, allow_negative_numbers = true)]
        weight: f64,

        /// Age in whole months
        #[arg(long, allow_negative_numbers = true)]
        age_months: i64,

        /// Activity level (low, normal, high)
        #[arg(long, default_value_t = ActivityLevel::Normal)]
        activity: ActivityLevel,
    },

    /// Feeding recommendation for a pet record with a birthday
    Pet {
        /// Pet name
        #[arg(long)]
        name: String,

        /// Species (cat or dog)
        #[arg(long)]
        species: String,

        /// Body weight in kilograms
        #[arg(long, allow_negative_numbers = true)]
        weight: f64,

        /// Birthday (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        birthday: NaiveDate,

        /// Breed
        #[arg(long, default_value = "")]
        breed: String,

        /// Gender
        #[arg(long, default_value = "")]
        gender: String,

        /// Date to compute the age at (YYYY-MM-DD, defaults to today)
        #[arg(long, value_parser = parse_date)]
        today: Option<NaiveDate>,
    },

    /// Static feeding guide reference content
    Guide {
        /// Only show entries for this species
        #[arg(long)]
        species: Option<String>,
    },
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|e| format!("expected a date like 2024-01-31: {e}"))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = LoggingConfig::for_cli(cli.verbose).init() {
        eprintln!("Warning: {e}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e.message);
            debug!(code = ?e.code, details = %e.details, "Command failed");
            ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(1))
        }
    }
}

fn run(cli: Cli) -> AppResult<()> {
    let format = cli.format;

    match cli.command {
        Command::Recommend {
            species,
            weight,
            age_months,
            activity,
        } => {
            let engine = build_engine(cli.dog_age_policy, cli.meal_policy)?;
            commands::recommend::run(&engine, &species, weight, age_months, activity, format)
        }
        Command::Pet {
            name,
            species,
            weight,
            birthday,
            breed,
            gender,
            today,
        } => {
            let engine = build_engine(cli.dog_age_policy, cli.meal_policy)?;
            let input = commands::pet::PetInput {
                name,
                breed,
                species,
                gender,
                birthday,
                weight_kg: weight,
            };
            commands::pet::run(&engine, input, today, format)
        }
        Command::Guide { species } => commands::guide::run(species.as_deref(), format),
    }
}

fn build_engine(
    dog_age_policy: Option<DogAgePolicy>,
    meal_count_policy: Option<MealCountPolicy>,
) -> AppResult<FeedingRecommendationEngine> {
    let config = load_feeding_config(PolicyOverrides {
        dog_age_policy,
        meal_count_policy,
    })?;
    Ok(FeedingRecommendationEngine::new(config))
}
