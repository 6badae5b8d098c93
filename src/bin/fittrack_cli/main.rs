// ABOUTME: fittrack CLI - command-line front end for the fittrack client core
// ABOUTME: Goals, weight suggestions, food search, session plans and stored profile management
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Daily goals for a profile
//! fittrack-cli goals --height 170 --weight 70 --age 25 --gender male --goal maintain
//!
//! # Guided formula with activity inputs and the intermediate values
//! fittrack-cli goals --height 170 --weight 70 --age 25 --gender male --goal lose_weight \
//!     --flow guided --workouts 4 --level intermediate --weekly-kg 0.5 --breakdown
//!
//! # Next set suggestion
//! fittrack-cli suggest 60kg/10 --battery 85
//!
//! # Food search
//! fittrack-cli foods chicken --category protein
//!
//! # Session plan for a program
//! fittrack-cli session full_body_a --battery 72
//!
//! # Complete onboarding and store the profile
//! fittrack-cli profile create --height 170 --weight 70 --age 25 --gender male --goal maintain
//!
//! # Show or clear the stored profile
//! fittrack-cli profile show
//! fittrack-cli profile clear
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use fittrack::config::AppConfig;
use fittrack::models::{FitnessGoal, FitnessLevel, FoodCategory, Gender};
use fittrack::onboarding::OnboardingFlow;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "fittrack-cli",
    about = "fittrack client core CLI",
    long_about = "Compute daily goals, plan strength sessions, search foods and manage the stored onboarding profile."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

/// Biometric and goal inputs shared by `goals` and `profile create`
#[derive(Args, Debug)]
struct ProfileArgs {
    /// Height in centimeters
    #[arg(long)]
    height: Option<f64>,

    /// Weight in kilograms
    #[arg(long)]
    weight: Option<f64>,

    /// Age in years
    #[arg(long)]
    age: Option<u32>,

    /// Gender (male, female, other)
    #[arg(long)]
    gender: Option<Gender>,

    /// Fitness goal (lose_weight, gain_muscle, maintain)
    #[arg(long, default_value = "maintain")]
    goal: FitnessGoal,

    /// Onboarding flow (simplified, guided); defaults to FITTRACK_ONBOARDING_FLOW
    #[arg(long)]
    flow: Option<OnboardingFlow>,

    /// Workouts per week (guided flow)
    #[arg(long)]
    workouts: Option<u8>,

    /// Fitness level (guided flow)
    #[arg(long)]
    level: Option<FitnessLevel>,

    /// Weekly weight change target in kg (guided flow)
    #[arg(long)]
    weekly_kg: Option<f64>,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Compute daily nutrition and activity goals
    Goals {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Show BMR, TDEE and the goal adjustment
        #[arg(long)]
        breakdown: bool,
    },

    /// Suggest the next set from the last logged one
    Suggest {
        /// Last performance, e.g. 60kg/10, 135lb/8-10, BW/12
        last_performance: String,

        /// Body battery (0-100)
        #[arg(long, short = 'b')]
        battery: u8,
    },

    /// Search the food database
    Foods {
        /// Case-insensitive name filter
        #[arg(default_value = "")]
        query: String,

        /// Restrict to one category
        #[arg(long, value_parser = parse_category)]
        category: Option<FoodCategory>,
    },

    /// Plan a workout session, or list programs when no id is given
    Session {
        /// Program id
        program: Option<String>,

        /// Body battery (0-100)
        #[arg(long, short = 'b', default_value = "75")]
        battery: u8,
    },

    /// Manage the stored onboarding profile
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },

    /// Show detected platform capabilities
    Platform,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ProfileCommand {
    /// Show the stored profile and goals
    Show,

    /// Run onboarding with the given inputs and store the result
    Create {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Credit goal id to select (repeatable, at most five)
        #[arg(long = "credit-goal")]
        credit_goals: Vec<String>,
    },

    /// Delete the stored profile
    Clear,
}

fn parse_category(value: &str) -> Result<FoodCategory, String> {
    FoodCategory::from_str_lossy(value).ok_or_else(|| format!("unknown food category '{value}'"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::from_env()?;
    let logging = if cli.verbose {
        config.logging.clone().with_level("debug")
    } else {
        config.logging.clone()
    };
    logging.init()?;
    config.log_summary();
    debug!("fittrack-cli starting");

    let json = cli.json;
    match cli.command {
        Command::Goals { profile, breakdown } => {
            commands::goals::run(&config, &profile, breakdown, json)?;
        }
        Command::Suggest {
            last_performance,
            battery,
        } => commands::suggest::run(&last_performance, battery, json)?,
        Command::Foods { query, category } => commands::foods::run(&query, category, json)?,
        Command::Session { program, battery } => {
            commands::session::run(program.as_deref(), battery, json)?;
        }
        Command::Profile { action } => match action {
            ProfileCommand::Show => commands::profile::show(&config, json)?,
            ProfileCommand::Create {
                profile,
                credit_goals,
            } => commands::profile::create(&config, &profile, &credit_goals, json)?,
            ProfileCommand::Clear => commands::profile::clear(&config)?,
        },
        Command::Platform => commands::platform::run(json)?,
    }

    Ok(())
}
