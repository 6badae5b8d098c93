// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Nutrition energy factors, goal defaults, storage keys and environment variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain. Tunable calculator values live in
//! `fittrack-intelligence`'s configuration; the values here are facts that do
//! not change between deployments.

/// Energy density of macronutrients
pub mod energy {
    /// Kilocalories per gram of protein
    pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
    /// Kilocalories per gram of carbohydrate
    pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
    /// Kilocalories per gram of fat
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
    /// Approximate kilocalories stored in one kilogram of body mass
    pub const KCAL_PER_KG_BODY_MASS: f64 = 7700.0;
    /// Days per week
    pub const DAYS_PER_WEEK: f64 = 7.0;
}

/// Goals used when the biometric profile is incomplete
pub mod fallback_goals {
    /// Daily calorie target
    pub const DAILY_CALORIES: u32 = 2000;
    /// Daily protein target (grams)
    pub const DAILY_PROTEIN_G: u32 = 100;
    /// Daily step target
    pub const DAILY_STEPS: u32 = 8000;
    /// Nightly sleep target (hours)
    pub const DAILY_SLEEP_HOURS: u32 = 8;
    /// Weekly workout target
    pub const WEEKLY_WORKOUTS: u32 = 3;
}

/// Credit and reward limits
pub mod credits {
    /// Maximum number of credit goals a user can select
    pub const MAX_SELECTED_GOALS: usize = 5;
}

/// Body battery (recovery score) bounds
pub mod body_battery {
    /// Lowest possible score
    pub const MIN: u8 = 0;
    /// Highest possible score
    pub const MAX: u8 = 100;
}

/// Key-value storage keys
pub mod storage_keys {
    /// Onboarding/profile document
    pub const PROFILE: &str = "fittrack.profile";
    /// Current profile document schema version
    pub const PROFILE_SCHEMA_VERSION: u32 = 1;
}

/// Service identity used in structured logs
pub mod service_names {
    /// Library and CLI service name
    pub const FITTRACK: &str = "fittrack";
}

/// Environment variable names
pub mod env_config {
    /// Storage backend (`memory` or `file`)
    pub const STORAGE: &str = "FITTRACK_STORAGE";
    /// Directory holding the file store
    pub const DATA_DIR: &str = "FITTRACK_DATA_DIR";
    /// Override for the key-value key holding the profile document
    pub const PROFILE_KEY: &str = "FITTRACK_PROFILE_KEY";
    /// Default onboarding flow (`simplified` or `guided`)
    pub const ONBOARDING_FLOW: &str = "FITTRACK_ONBOARDING_FLOW";
    /// Platform name reported by the environment probe
    pub const PLATFORM: &str = "FITTRACK_PLATFORM";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}
