// ABOUTME: Configuration module for the fittrack-intelligence crate
// ABOUTME: Re-exports goal calculator and training load configuration with the error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Configuration error type
pub mod error;
/// Goal calculator coefficients and thresholds
pub mod goals;
/// Body-battery training load prescriptions
pub mod training;

pub use error::ConfigError;
pub use goals::GoalCalculatorConfig;
pub use training::TrainingLoadConfig;
