// ABOUTME: Configuration module for the fittrack client
// ABOUTME: Environment-driven settings for storage, onboarding and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for fittrack
//!
//! - **Environment**: storage backend, data directory and onboarding flow
//!   read from `FITTRACK_*` variables
//!
//! Calculator coefficients live with the calculator in
//! `fittrack_intelligence::config`.

/// Environment configuration
pub mod environment;

pub use environment::{AppConfig, Environment, StorageBackend, StorageConfig};
