// ABOUTME: Goal calculator configuration for BMR, TDEE, macro split and activity targets
// ABOUTME: Defaults, FITTRACK_* environment overrides, validation and a process-wide instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Goal Calculator Configuration
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Protein: Phillips & Van Loon (2011) DOI: 10.1080/02640414.2011.619204

use super::error::ConfigError;
use fittrack_core::constants::fallback_goals;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;

/// Complete goal calculator configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoalCalculatorConfig {
    /// Mifflin-St Jeor coefficients
    pub bmr: BmrConfig,
    /// Activity multipliers turning BMR into TDEE
    pub activity: ActivityMultiplierConfig,
    /// Calorie adjustments for lose/gain goals
    pub adjustment: GoalAdjustmentConfig,
    /// Protein factors and fat share
    pub macros: MacroSplitConfig,
    /// Step, sleep and workout targets
    pub targets: ActivityTargetsConfig,
    /// Goals returned when the profile is incomplete
    pub fallback: FallbackGoalsConfig,
    /// Plausible biometric ranges
    pub bounds: BiometricBoundsConfig,
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161), also used for `Gender::Other`
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

/// Activity multipliers for TDEE
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityMultiplierConfig {
    /// Fixed light-activity multiplier for the simplified path
    pub simplified_multiplier: f64,
    /// Sedentary base multiplier for the guided path
    pub guided_base_multiplier: f64,
    /// Added per weekly workout on the guided path
    pub guided_per_workout: f64,
    /// Highest accepted weekly workout count
    pub max_workouts_per_week: u8,
}

impl Default for ActivityMultiplierConfig {
    fn default() -> Self {
        Self {
            simplified_multiplier: 1.4,
            guided_base_multiplier: 1.2,
            guided_per_workout: 0.1,
            max_workouts_per_week: 7,
        }
    }
}

/// Calorie adjustment for lose/gain goals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalAdjustmentConfig {
    /// Fixed deficit/surplus on the simplified path (kcal/day)
    pub simplified_kcal: f64,
    /// Smallest accepted weekly weight change (kg)
    pub min_weekly_goal_kg: f64,
    /// Largest accepted weekly weight change (kg)
    pub max_weekly_goal_kg: f64,
    /// Weekly change used when the guided flow leaves it unset (kg)
    pub default_weekly_goal_kg: f64,
}

impl Default for GoalAdjustmentConfig {
    fn default() -> Self {
        Self {
            simplified_kcal: 500.0,
            min_weekly_goal_kg: 0.1,
            max_weekly_goal_kg: 1.0,
            default_weekly_goal_kg: 0.5,
        }
    }
}

/// Macronutrient split configuration
///
/// Reference: Phillips & Van Loon (2011) DOI: 10.1080/02640414.2011.619204
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroSplitConfig {
    /// Protein g/kg on the simplified path
    pub simplified_protein_g_per_kg: f64,
    /// Protein g/kg on the guided path
    pub guided_protein_g_per_kg: f64,
    /// Protein g/kg for muscle gain on either path
    pub muscle_gain_protein_g_per_kg: f64,
    /// Share of target calories assigned to fat (0-1)
    pub fat_share_of_calories: f64,
}

impl Default for MacroSplitConfig {
    fn default() -> Self {
        Self {
            simplified_protein_g_per_kg: 1.6,
            guided_protein_g_per_kg: 1.8,
            muscle_gain_protein_g_per_kg: 2.2,
            fat_share_of_calories: 0.25,
        }
    }
}

/// Step, sleep and workout targets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityTargetsConfig {
    /// Flat step target on the simplified path
    pub simplified_steps: u32,
    /// Beginner step tier
    pub beginner_steps: u32,
    /// Intermediate step tier
    pub intermediate_steps: u32,
    /// Advanced step tier
    pub advanced_steps: u32,
    /// Nightly sleep target (hours)
    pub sleep_hours: u32,
    /// Weekly workouts on the simplified path
    pub simplified_weekly_workouts: u32,
}

impl Default for ActivityTargetsConfig {
    fn default() -> Self {
        Self {
            simplified_steps: 10_000,
            beginner_steps: 8_000,
            intermediate_steps: 10_000,
            advanced_steps: 12_000,
            sleep_hours: fallback_goals::DAILY_SLEEP_HOURS,
            simplified_weekly_workouts: fallback_goals::WEEKLY_WORKOUTS,
        }
    }
}

/// Goals used when the profile is incomplete
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackGoalsConfig {
    /// Daily calories
    pub calories: u32,
    /// Daily protein (g)
    pub protein_g: u32,
    /// Daily steps
    pub steps: u32,
}

impl Default for FallbackGoalsConfig {
    fn default() -> Self {
        Self {
            calories: fallback_goals::DAILY_CALORIES,
            protein_g: fallback_goals::DAILY_PROTEIN_G,
            steps: fallback_goals::DAILY_STEPS,
        }
    }
}

/// Biometric values the formulas are meaningful for
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BiometricBoundsConfig {
    /// Maximum height (cm)
    pub max_height_cm: f64,
    /// Maximum weight (kg)
    pub max_weight_kg: f64,
    /// Minimum age (years); Mifflin-St Jeor is validated from 10
    pub min_age: u32,
    /// Maximum age (years)
    pub max_age: u32,
}

impl Default for BiometricBoundsConfig {
    fn default() -> Self {
        Self {
            max_height_cm: 272.0,
            max_weight_kg: 400.0,
            min_age: 10,
            max_age: 120,
        }
    }
}

/// Process-wide configuration
static GOAL_CALCULATOR_CONFIG: OnceLock<GoalCalculatorConfig> = OnceLock::new();

impl GoalCalculatorConfig {
    /// Get the process-wide configuration, loading it from the environment on first use
    pub fn global() -> &'static Self {
        GOAL_CALCULATOR_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                tracing::warn!("Failed to load goal calculator config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error when a fraction is outside 0-1, a coefficient is not
    /// positive, or ordered thresholds are out of order
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..1.0).contains(&self.macros.fat_share_of_calories) {
            return Err(ConfigError::ValueOutOfRange(
                "fat_share_of_calories must be within 0.0..1.0",
            ));
        }

        let protein_factors = [
            self.macros.simplified_protein_g_per_kg,
            self.macros.guided_protein_g_per_kg,
            self.macros.muscle_gain_protein_g_per_kg,
        ];
        if protein_factors.iter().any(|factor| *factor <= 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "protein factors must be positive",
            ));
        }

        if self.activity.simplified_multiplier < 1.0 || self.activity.guided_base_multiplier < 1.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "activity multipliers must be at least 1.0",
            ));
        }

        if self.adjustment.min_weekly_goal_kg > self.adjustment.max_weekly_goal_kg {
            return Err(ConfigError::InvalidRange(
                "min_weekly_goal_kg must be <= max_weekly_goal_kg",
            ));
        }
        if !(self.adjustment.min_weekly_goal_kg..=self.adjustment.max_weekly_goal_kg)
            .contains(&self.adjustment.default_weekly_goal_kg)
        {
            return Err(ConfigError::InvalidRange(
                "default_weekly_goal_kg must lie between the min and max weekly goal",
            ));
        }

        let tiers = &self.targets;
        if tiers.beginner_steps > tiers.intermediate_steps
            || tiers.intermediate_steps > tiers.advanced_steps
        {
            return Err(ConfigError::InvalidRange(
                "step tiers must be in ascending order",
            ));
        }

        if self.bounds.min_age >= self.bounds.max_age {
            return Err(ConfigError::InvalidRange("min_age must be < max_age"));
        }
        if self.bounds.max_height_cm <= 0.0 || self.bounds.max_weight_kg <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "biometric maxima must be positive",
            ));
        }

        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        override_from_env(
            "FITTRACK_SIMPLIFIED_ACTIVITY_MULTIPLIER",
            &mut self.activity.simplified_multiplier,
        )?;
        override_from_env(
            "FITTRACK_SIMPLIFIED_ADJUSTMENT_KCAL",
            &mut self.adjustment.simplified_kcal,
        )?;
        override_from_env(
            "FITTRACK_SIMPLIFIED_PROTEIN_G_PER_KG",
            &mut self.macros.simplified_protein_g_per_kg,
        )?;
        override_from_env(
            "FITTRACK_GUIDED_PROTEIN_G_PER_KG",
            &mut self.macros.guided_protein_g_per_kg,
        )?;
        override_from_env(
            "FITTRACK_MUSCLE_GAIN_PROTEIN_G_PER_KG",
            &mut self.macros.muscle_gain_protein_g_per_kg,
        )?;
        override_from_env(
            "FITTRACK_FAT_SHARE_OF_CALORIES",
            &mut self.macros.fat_share_of_calories,
        )?;
        override_from_env("FITTRACK_SLEEP_HOURS", &mut self.targets.sleep_hours)?;
        override_from_env("FITTRACK_FALLBACK_CALORIES", &mut self.fallback.calories)?;
        override_from_env("FITTRACK_FALLBACK_PROTEIN_G", &mut self.fallback.protein_g)?;
        override_from_env("FITTRACK_FALLBACK_STEPS", &mut self.fallback.steps)?;
        Ok(self)
    }
}

/// Replace `target` with the parsed value of `key` when the variable is set
fn override_from_env<T: FromStr>(key: &str, target: &mut T) -> Result<(), ConfigError> {
    if let Ok(val) = env::var(key) {
        *target = val
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse(format!("Invalid {key}: '{val}'")))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(GoalCalculatorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_fat_share_must_be_fraction() {
        let mut config = GoalCalculatorConfig::default();
        config.macros.fat_share_of_calories = 25.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }

    #[test]
    fn test_step_tiers_must_ascend() {
        let mut config = GoalCalculatorConfig::default();
        config.targets.beginner_steps = 15_000;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
    }

    #[test]
    fn test_default_weekly_goal_inside_bounds() {
        let mut config = GoalCalculatorConfig::default();
        config.adjustment.default_weekly_goal_kg = 2.0;
        assert!(config.validate().is_err());
    }
}
