// ABOUTME: Daily goal calculation using the Mifflin-St Jeor equation
// ABOUTME: BMR, TDEE, goal adjustment, macronutrient split and activity targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Goal Calculator Module
//!
//! Turns a biometric profile and a fitness goal into a [`GoalSet`]. Two
//! onboarding paths share one pipeline and differ only in their inputs:
//!
//! | | Simplified | Guided |
//! |---|---|---|
//! | TDEE multiplier | 1.4 | `1.2 + 0.1 × workouts/week` |
//! | Lose/gain adjustment | ±500 kcal | `± weekly_kg × 7700 / 7` |
//! | Protein (g/kg) | 1.6 | 1.8 |
//! | Steps | 10000 | tier by fitness level |
//!
//! Muscle gain uses 2.2 g/kg protein on both paths. Fat is 25% of target
//! calories and carbohydrates take the remainder.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - Phillips, S.M., & Van Loon, L.J. (2011). Dietary protein for athletes.
//!   *Journal of Sports Sciences*, 29(sup1), S29-S38.
//!   <https://doi.org/10.1080/02640414.2011.619204>

use crate::config::goals::{BiometricBoundsConfig, BmrConfig, GoalCalculatorConfig};
use fittrack_core::constants::energy::{
    DAYS_PER_WEEK, KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
    KCAL_PER_KG_BODY_MASS,
};
use fittrack_core::errors::{AppError, AppResult};
use fittrack_core::models::{FitnessGoal, FitnessLevel, Gender, GoalSet, ProfileDraft, UserProfile};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Activity inputs collected by the guided onboarding flow
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GuidedActivity {
    /// Workouts per week (0-7)
    pub workouts_per_week: u8,
    /// Self-reported fitness level for the step tier
    pub fitness_level: FitnessLevel,
    /// Desired weekly weight change in kg; `None` uses the configured default
    pub weekly_goal_kg: Option<f64>,
}

/// Which onboarding formula variant to apply
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "path", rename_all = "snake_case")]
pub enum CalculationPath {
    /// Fixed light-activity assumptions
    Simplified,
    /// Activity-aware calculation from the guided flow
    Guided(GuidedActivity),
}

/// Goal set together with the intermediate values that produced it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalBreakdown {
    /// Basal Metabolic Rate (kcal/day); `None` when the fallback was used
    pub bmr: Option<f64>,
    /// Activity multiplier applied to BMR
    pub activity_multiplier: Option<f64>,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: Option<f64>,
    /// Signed calorie adjustment for the goal (kcal/day)
    pub calorie_adjustment: Option<f64>,
    /// Protein factor used (g/kg)
    pub protein_g_per_kg: Option<f64>,
    /// Whether the documented defaults were returned for an incomplete profile
    pub used_fallback: bool,
    /// Resulting targets
    pub goals: GoalSet,
}

/// Goal calculator bound to one configuration
#[derive(Debug, Clone)]
pub struct GoalCalculator {
    config: GoalCalculatorConfig,
}

impl Default for GoalCalculator {
    fn default() -> Self {
        Self::new(GoalCalculatorConfig::global().clone())
    }
}

impl GoalCalculator {
    /// Create a calculator using `config`
    #[must_use]
    pub const fn new(config: GoalCalculatorConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &GoalCalculatorConfig {
        &self.config
    }

    /// Compute the daily goal set
    ///
    /// An incomplete draft yields the fallback goals rather than an error.
    ///
    /// # Errors
    ///
    /// Returns `InvalidProfile` for non-positive or implausible biometrics and
    /// `ValueOutOfRange` for guided inputs outside their bounds
    pub fn compute(
        &self,
        draft: &ProfileDraft,
        goal: FitnessGoal,
        path: &CalculationPath,
    ) -> AppResult<GoalSet> {
        self.compute_breakdown(draft, goal, path)
            .map(|breakdown| breakdown.goals)
    }

    /// Compute the goal set and keep the intermediate values
    ///
    /// # Errors
    ///
    /// Same as [`GoalCalculator::compute`]
    pub fn compute_breakdown(
        &self,
        draft: &ProfileDraft,
        goal: FitnessGoal,
        path: &CalculationPath,
    ) -> AppResult<GoalBreakdown> {
        self.validate_path(path)?;

        let Some(profile) = draft.complete() else {
            debug!(
                missing = ?draft.missing_fields(),
                "Profile incomplete, returning fallback goals"
            );
            return Ok(GoalBreakdown {
                bmr: None,
                activity_multiplier: None,
                tdee: None,
                calorie_adjustment: None,
                protein_g_per_kg: None,
                used_fallback: true,
                goals: self.fallback_goals(path),
            });
        };

        validate_profile(&profile, &self.config.bounds)?;

        let bmr = calculate_mifflin_st_jeor(&profile, &self.config.bmr);
        if bmr <= 0.0 {
            warn!(bmr, "Rejected biometric profile: non-positive BMR");
            return Err(AppError::invalid_profile(
                "bmr",
                format!("Profile yields a non-positive BMR ({bmr:.1} kcal/day)"),
            ));
        }
        let multiplier = self.activity_multiplier(path);
        let tdee = bmr * multiplier;
        let adjustment = self.calorie_adjustment(goal, path, tdee);
        let protein_factor = self.protein_factor(goal, path);

        let calories = round_to_u32(tdee + adjustment);
        let (protein, carbs, fats) = split_macros(
            calories,
            profile.weight_kg * protein_factor,
            self.config.macros.fat_share_of_calories,
        );

        let goals = GoalSet {
            daily_calories: calories,
            daily_protein: protein,
            daily_carbs: carbs,
            daily_fats: fats,
            daily_steps: self.step_target(path),
            daily_sleep_hours: self.config.targets.sleep_hours,
            weekly_workouts: self.weekly_workouts(path),
        };

        debug!(
            bmr,
            tdee,
            adjustment,
            calories = goals.daily_calories,
            %goal,
            "Computed daily goals"
        );

        Ok(GoalBreakdown {
            bmr: Some(bmr),
            activity_multiplier: Some(multiplier),
            tdee: Some(tdee),
            calorie_adjustment: Some(adjustment),
            protein_g_per_kg: Some(protein_factor),
            used_fallback: false,
            goals,
        })
    }

    /// Goals returned when the biometric profile is incomplete
    #[must_use]
    pub fn fallback_goals(&self, path: &CalculationPath) -> GoalSet {
        let fallback = &self.config.fallback;
        let (protein, carbs, fats) = split_macros(
            fallback.calories,
            f64::from(fallback.protein_g),
            self.config.macros.fat_share_of_calories,
        );
        GoalSet {
            daily_calories: fallback.calories,
            daily_protein: protein,
            daily_carbs: carbs,
            daily_fats: fats,
            daily_steps: fallback.steps,
            daily_sleep_hours: self.config.targets.sleep_hours,
            weekly_workouts: self.weekly_workouts(path),
        }
    }

    /// Check guided inputs against the configured bounds
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for too many workouts or a weekly goal
    /// outside the configured range
    pub fn validate_path(&self, path: &CalculationPath) -> AppResult<()> {
        let CalculationPath::Guided(activity) = path else {
            return Ok(());
        };

        let max_workouts = self.config.activity.max_workouts_per_week;
        if activity.workouts_per_week > max_workouts {
            return Err(AppError::out_of_range(
                "workouts_per_week",
                format!("Workouts per week must be between 0 and {max_workouts}"),
            ));
        }

        if let Some(weekly_kg) = activity.weekly_goal_kg {
            let adjustment = &self.config.adjustment;
            if !weekly_kg.is_finite()
                || !(adjustment.min_weekly_goal_kg..=adjustment.max_weekly_goal_kg)
                    .contains(&weekly_kg)
            {
                return Err(AppError::out_of_range(
                    "weekly_goal_kg",
                    format!(
                        "Weekly goal must be between {} and {} kg",
                        adjustment.min_weekly_goal_kg, adjustment.max_weekly_goal_kg
                    ),
                ));
            }
        }
        Ok(())
    }

    fn activity_multiplier(&self, path: &CalculationPath) -> f64 {
        let activity = &self.config.activity;
        match path {
            CalculationPath::Simplified => activity.simplified_multiplier,
            CalculationPath::Guided(guided) => activity.guided_per_workout.mul_add(
                f64::from(guided.workouts_per_week),
                activity.guided_base_multiplier,
            ),
        }
    }

    /// Signed adjustment; a deficit never takes calories below zero
    fn calorie_adjustment(&self, goal: FitnessGoal, path: &CalculationPath, tdee: f64) -> f64 {
        let adjustment = &self.config.adjustment;
        let magnitude = match path {
            CalculationPath::Simplified => adjustment.simplified_kcal,
            CalculationPath::Guided(guided) => {
                guided
                    .weekly_goal_kg
                    .unwrap_or(adjustment.default_weekly_goal_kg)
                    * KCAL_PER_KG_BODY_MASS
                    / DAYS_PER_WEEK
            }
        };

        match goal {
            FitnessGoal::LoseWeight => -magnitude.min(tdee),
            FitnessGoal::GainMuscle => magnitude,
            FitnessGoal::Maintain => 0.0,
        }
    }

    fn protein_factor(&self, goal: FitnessGoal, path: &CalculationPath) -> f64 {
        let macros = &self.config.macros;
        match (goal, path) {
            (FitnessGoal::GainMuscle, _) => macros.muscle_gain_protein_g_per_kg,
            (_, CalculationPath::Simplified) => macros.simplified_protein_g_per_kg,
            (_, CalculationPath::Guided(_)) => macros.guided_protein_g_per_kg,
        }
    }

    fn step_target(&self, path: &CalculationPath) -> u32 {
        let targets = &self.config.targets;
        match path {
            CalculationPath::Simplified => targets.simplified_steps,
            CalculationPath::Guided(guided) => match guided.fitness_level {
                FitnessLevel::Beginner => targets.beginner_steps,
                FitnessLevel::Intermediate => targets.intermediate_steps,
                FitnessLevel::Advanced => targets.advanced_steps,
            },
        }
    }

    fn weekly_workouts(&self, path: &CalculationPath) -> u32 {
        match path {
            CalculationPath::Simplified => self.config.targets.simplified_weekly_workouts,
            CalculationPath::Guided(guided) => u32::from(guided.workouts_per_week),
        }
    }
}

/// Compute goals with the process-wide configuration
///
/// # Errors
///
/// Same as [`GoalCalculator::compute`]
pub fn compute_goals(
    draft: &ProfileDraft,
    goal: FitnessGoal,
    path: &CalculationPath,
) -> AppResult<GoalSet> {
    GoalCalculator::default().compute(draft, goal, path)
}

/// Reject biometrics the formula is not meaningful for
///
/// # Errors
///
/// Returns `InvalidProfile` naming the offending field
pub fn validate_profile(profile: &UserProfile, bounds: &BiometricBoundsConfig) -> AppResult<()> {
    let reject = |field: &str, message: String| -> AppResult<()> {
        warn!(field, "Rejected biometric profile: {}", message);
        Err(AppError::invalid_profile(field, message))
    };

    if !profile.height_cm.is_finite()
        || profile.height_cm <= 0.0
        || profile.height_cm > bounds.max_height_cm
    {
        return reject(
            "height_cm",
            format!(
                "Height must be greater than 0 and at most {} cm",
                bounds.max_height_cm
            ),
        );
    }
    if !profile.weight_kg.is_finite()
        || profile.weight_kg <= 0.0
        || profile.weight_kg > bounds.max_weight_kg
    {
        return reject(
            "weight_kg",
            format!(
                "Weight must be greater than 0 and at most {} kg",
                bounds.max_weight_kg
            ),
        );
    }
    if !(bounds.min_age..=bounds.max_age).contains(&profile.age) {
        return reject(
            "age",
            format!(
                "Age must be between {} and {} years",
                bounds.min_age, bounds.max_age
            ),
        );
    }
    Ok(())
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_offset`
/// - Men: +5
/// - Women and other: -161
#[must_use]
pub fn calculate_mifflin_st_jeor(profile: &UserProfile, config: &BmrConfig) -> f64 {
    let gender_constant = match profile.gender {
        Gender::Male => config.msj_male_constant,
        Gender::Female | Gender::Other => config.msj_female_constant,
    };

    config.msj_weight_coef * profile.weight_kg
        + config.msj_height_coef * profile.height_cm
        + config.msj_age_coef * f64::from(profile.age)
        + gender_constant
}

/// Split `calories` into `(protein, carbs, fats)` grams
///
/// Fat takes `fat_share` of the calories. Protein is the requested amount,
/// capped so protein and fat never exceed the calorie total. Carbohydrates
/// take whatever is left.
#[must_use]
pub fn split_macros(calories: u32, protein_target_g: f64, fat_share: f64) -> (u32, u32, u32) {
    let calories = f64::from(calories);
    let fats = round_to_u32(calories * fat_share / KCAL_PER_GRAM_FAT);
    let fat_kcal = f64::from(fats) * KCAL_PER_GRAM_FAT;

    let protein_budget = ((calories - fat_kcal).max(0.0) / KCAL_PER_GRAM_PROTEIN).floor();
    let protein = round_to_u32(protein_target_g.min(protein_budget));

    let remaining = calories - f64::from(protein) * KCAL_PER_GRAM_PROTEIN - fat_kcal;
    let carbs = round_to_u32(remaining / KCAL_PER_GRAM_CARBS);

    (protein, carbs, fats)
}

/// Round half away from zero and clamp into `u32`
fn round_to_u32(value: f64) -> u32 {
    value.round().max(0.0) as u32
}
