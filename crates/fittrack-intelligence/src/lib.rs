// ABOUTME: Goal calculation and training-load heuristics for fittrack
// ABOUTME: Mifflin-St Jeor goal pipeline, weight suggestions and their configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # fittrack Intelligence
//!
//! Pure, synchronous algorithms used by the client modules. Nothing in this
//! crate performs IO apart from reading `FITTRACK_*` overrides when the
//! global configuration is first loaded.
//!
//! ## Modules
//!
//! - **config**: `GoalCalculatorConfig`, `TrainingLoadConfig` and `ConfigError`
//! - **`goal_calculator`**: BMR, TDEE, goal adjustment and macro split
//! - **`weight_suggestion`**: Body-battery driven load and rep suggestions

/// Calculator and training load configuration
pub mod config;

/// Daily goal calculation
pub mod goal_calculator;

/// Next-set load suggestions
pub mod weight_suggestion;

pub use goal_calculator::{
    compute_goals, CalculationPath, GoalBreakdown, GoalCalculator, GuidedActivity,
};
pub use weight_suggestion::{suggest_weight, ReadinessBand, WeightSuggestion};
