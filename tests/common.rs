// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, reference profiles and catalog helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `fittrack`

use fittrack::catalog::Catalog;
use fittrack::intelligence::config::GoalCalculatorConfig;
use fittrack::intelligence::GoalCalculator;
use fittrack::models::{Gender, ProfileDraft, UserProfile};
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// 170 cm, 70 kg, 25 year old male
pub fn reference_profile() -> UserProfile {
    UserProfile::new(170.0, 70.0, 25, Gender::Male)
}

/// Reference profile as a complete draft
pub fn reference_draft() -> ProfileDraft {
    reference_profile().into()
}

/// Calculator with built-in defaults, unaffected by environment overrides
pub fn default_calculator() -> GoalCalculator {
    GoalCalculator::new(GoalCalculatorConfig::default())
}

/// Embedded catalog
pub fn catalog() -> Catalog {
    Catalog::load_embedded().expect("embedded catalog must load")
}
