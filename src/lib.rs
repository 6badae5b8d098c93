// ABOUTME: Main library entry point for the fittrack client core
// ABOUTME: Food log, credits, onboarding, training load and storage collaborators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # fittrack
//!
//! Client core for a fitness tracker: food logging, workout logging, weight
//! tracking, credits and rewards, and an onboarding wizard that turns a
//! biometric profile into daily goals.
//!
//! ## Architecture
//!
//! - **`fittrack-core`**: errors, constants and value models
//! - **`fittrack-intelligence`**: goal calculator and weight suggestions
//! - this crate: storage and platform collaborators, the typed profile
//!   repository, catalog data and the stateful client modules
//!
//! Persistence and platform detection are injected through the
//! [`storage::KeyValueStore`] and [`platform::PlatformProbe`] traits.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fittrack::intelligence::{compute_goals, CalculationPath};
//! use fittrack::models::{FitnessGoal, Gender, UserProfile};
//!
//! let profile = UserProfile::new(170.0, 70.0, 25, Gender::Male);
//! let goals = compute_goals(&profile.into(), FitnessGoal::Maintain, &CalculationPath::Simplified)?;
//! println!("{} kcal, {} g protein", goals.daily_calories, goals.daily_protein);
//! # Ok::<(), fittrack::errors::AppError>(())
//! ```

/// Error types shared across the workspace
pub use fittrack_core::errors;

/// Constants shared across the workspace
pub use fittrack_core::constants;

/// Value models shared across the workspace
pub use fittrack_core::models;

/// Goal calculator and training load heuristics
pub use fittrack_intelligence as intelligence;

/// Embedded catalog data (foods, credit goals, rewards, programs)
pub mod catalog;

/// Environment configuration
pub mod config;

/// Credit goal selection, daily scoring and the reward ledger
pub mod credits;

/// Food database search
pub mod food;

/// Structured logging setup
pub mod logging;

/// Meal builder and daily food log
pub mod meals;

/// Multi-step onboarding wizard
pub mod onboarding;

/// Platform capability probe
pub mod platform;

/// Typed profile repository over a key-value store
pub mod profile;

/// Key-value storage backends
pub mod storage;

/// Body weight history
pub mod weight_log;

/// Workout session planning
pub mod workouts;
