// ABOUTME: Multi-step onboarding wizard collecting biometrics, goal and activity
// ABOUTME: Validates each step, previews goals and persists the completed record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Onboarding wizard
//!
//! Two flows share one state machine:
//!
//! - **Simplified**: `Welcome → Biometrics → Goal → Summary`
//! - **Guided**: `Welcome → Biometrics → Goal → Activity → CreditGoals → Summary`
//!
//! [`OnboardingWizard::next`] refuses to leave a step whose inputs are
//! invalid. [`OnboardingWizard::finish`] is only accepted on the summary
//! step; it computes the goals and saves an [`OnboardingRecord`].

use crate::credits::{CreditGoalSelection, SelectionChange};
use crate::errors::{AppError, AppResult};
use crate::intelligence::config::GoalCalculatorConfig;
use crate::intelligence::goal_calculator::validate_profile;
use crate::intelligence::{CalculationPath, GoalCalculator, GuidedActivity};
use crate::models::{
    CreditGoal, FitnessGoal, FitnessLevel, Gender, GoalSet, ProfileDraft,
};
use crate::profile::{OnboardingRecord, ProfileRepository};
use crate::storage::KeyValueStore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};

/// Which set of steps the wizard walks through
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingFlow {
    /// Biometrics and goal only
    #[default]
    Simplified,
    /// Adds activity level and credit goal selection
    Guided,
}

impl OnboardingFlow {
    /// Steps in order
    #[must_use]
    pub const fn steps(self) -> &'static [OnboardingStep] {
        match self {
            Self::Simplified => &[
                OnboardingStep::Welcome,
                OnboardingStep::Biometrics,
                OnboardingStep::Goal,
                OnboardingStep::Summary,
            ],
            Self::Guided => &[
                OnboardingStep::Welcome,
                OnboardingStep::Biometrics,
                OnboardingStep::Goal,
                OnboardingStep::Activity,
                OnboardingStep::CreditGoals,
                OnboardingStep::Summary,
            ],
        }
    }
}

impl FromStr for OnboardingFlow {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "simplified" | "simple" | "quick" => Ok(Self::Simplified),
            "guided" | "full" => Ok(Self::Guided),
            other => Err(AppError::invalid_input(format!(
                "Unknown onboarding flow '{other}' (expected simplified or guided)"
            ))
            .with_resource_id("onboarding_flow")),
        }
    }
}

impl fmt::Display for OnboardingFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simplified => write!(f, "simplified"),
            Self::Guided => write!(f, "guided"),
        }
    }
}

/// One wizard screen
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStep {
    /// Introduction
    Welcome,
    /// Height, weight, age and gender
    Biometrics,
    /// Fitness goal
    Goal,
    /// Workouts per week, fitness level and weekly target (guided only)
    Activity,
    /// Credit goal selection (guided only)
    CreditGoals,
    /// Review computed goals
    Summary,
}

/// Stateful onboarding wizard
#[derive(Debug, Clone)]
pub struct OnboardingWizard {
    flow: OnboardingFlow,
    position: usize,
    draft: ProfileDraft,
    goal: Option<FitnessGoal>,
    workouts_per_week: u8,
    fitness_level: Option<FitnessLevel>,
    weekly_goal_kg: Option<f64>,
    credit_goals: CreditGoalSelection,
    calculator: GoalCalculator,
}

impl OnboardingWizard {
    /// Wizard using the process-wide calculator configuration
    #[must_use]
    pub fn new(flow: OnboardingFlow) -> Self {
        Self::with_calculator(flow, GoalCalculator::default())
    }

    /// Wizard using `calculator`
    #[must_use]
    pub fn with_calculator(flow: OnboardingFlow, calculator: GoalCalculator) -> Self {
        let workouts_per_week = default_workouts(calculator.config());
        Self {
            flow,
            position: 0,
            draft: ProfileDraft::default(),
            goal: None,
            workouts_per_week,
            fitness_level: None,
            weekly_goal_kg: None,
            credit_goals: CreditGoalSelection::new(),
            calculator,
        }
    }

    /// Flow in use
    #[must_use]
    pub const fn flow(&self) -> OnboardingFlow {
        self.flow
    }

    /// Step currently shown
    #[must_use]
    pub fn current_step(&self) -> OnboardingStep {
        let steps = self.flow.steps();
        steps
            .get(self.position)
            .or_else(|| steps.last())
            .copied()
            .unwrap_or(OnboardingStep::Summary)
    }

    /// Completion fraction in `0.0..=1.0`
    #[must_use]
    pub fn progress(&self) -> f64 {
        let last = self.flow.steps().len().saturating_sub(1);
        if last == 0 {
            return 1.0;
        }
        self.position as f64 / last as f64
    }

    /// Profile entered so far
    #[must_use]
    pub const fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    /// Chosen goal
    #[must_use]
    pub const fn goal(&self) -> Option<FitnessGoal> {
        self.goal
    }

    /// Selected credit goals
    #[must_use]
    pub const fn credit_goals(&self) -> &CreditGoalSelection {
        &self.credit_goals
    }

    /// Set height in centimeters
    pub fn set_height_cm(&mut self, height_cm: f64) -> &mut Self {
        self.draft.height_cm = Some(height_cm);
        self
    }

    /// Set weight in kilograms
    pub fn set_weight_kg(&mut self, weight_kg: f64) -> &mut Self {
        self.draft.weight_kg = Some(weight_kg);
        self
    }

    /// Set age in years
    pub fn set_age(&mut self, age: u32) -> &mut Self {
        self.draft.age = Some(age);
        self
    }

    /// Set gender
    pub fn set_gender(&mut self, gender: Gender) -> &mut Self {
        self.draft.gender = Some(gender);
        self
    }

    /// Set the fitness goal
    pub fn set_goal(&mut self, goal: FitnessGoal) -> &mut Self {
        self.goal = Some(goal);
        self
    }

    /// Set workouts per week (guided flow)
    pub fn set_workouts_per_week(&mut self, workouts: u8) -> &mut Self {
        self.workouts_per_week = workouts;
        self
    }

    /// Set fitness level (guided flow)
    pub fn set_fitness_level(&mut self, level: FitnessLevel) -> &mut Self {
        self.fitness_level = Some(level);
        self
    }

    /// Set the weekly weight change target in kg; `None` uses the default
    pub fn set_weekly_goal_kg(&mut self, weekly_goal_kg: Option<f64>) -> &mut Self {
        self.weekly_goal_kg = weekly_goal_kg;
        self
    }

    /// Toggle a credit goal (guided flow)
    pub fn toggle_credit_goal(&mut self, goal: &CreditGoal) -> SelectionChange {
        self.credit_goals.toggle(goal)
    }

    /// Add a credit goal unless it is already selected (guided flow)
    pub fn select_credit_goal(&mut self, goal: &CreditGoal) -> SelectionChange {
        self.credit_goals.select(goal)
    }

    /// Formula variant implied by the flow and activity inputs
    #[must_use]
    pub fn calculation_path(&self) -> CalculationPath {
        match self.flow {
            OnboardingFlow::Simplified => CalculationPath::Simplified,
            OnboardingFlow::Guided => CalculationPath::Guided(GuidedActivity {
                workouts_per_week: self.workouts_per_week,
                fitness_level: self.fitness_level.unwrap_or_default(),
                weekly_goal_kg: self.weekly_goal_kg,
            }),
        }
    }

    /// Check the inputs of the current step
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` for an unanswered question,
    /// `InvalidProfile` for implausible biometrics and `ValueOutOfRange` for
    /// activity inputs outside their bounds
    pub fn validate_step(&self) -> AppResult<()> {
        self.validate(self.current_step())
    }

    fn validate(&self, step: OnboardingStep) -> AppResult<()> {
        match step {
            OnboardingStep::Welcome | OnboardingStep::CreditGoals | OnboardingStep::Summary => {
                Ok(())
            }
            OnboardingStep::Biometrics => {
                if let Some(field) = self.draft.missing_fields().first() {
                    return Err(AppError::missing_field(field));
                }
                let Some(profile) = self.draft.complete() else {
                    return Err(AppError::missing_field("profile"));
                };
                validate_profile(&profile, &self.calculator.config().bounds)
            }
            OnboardingStep::Goal => self
                .goal
                .map(|_| ())
                .ok_or_else(|| AppError::missing_field("goal")),
            OnboardingStep::Activity => {
                if self.fitness_level.is_none() {
                    return Err(AppError::missing_field("fitness_level"));
                }
                self.calculator.validate_path(&self.calculation_path())
            }
        }
    }

    /// Advance to the next step
    ///
    /// # Errors
    ///
    /// Returns the validation error of the current step, or `InvalidState`
    /// on the summary step
    pub fn next(&mut self) -> AppResult<OnboardingStep> {
        let current = self.current_step();
        if current == OnboardingStep::Summary {
            return Err(AppError::invalid_state(
                "Onboarding is on the summary step; finish it instead",
            ));
        }
        self.validate(current)?;
        self.position += 1;
        let step = self.current_step();
        debug!(from = ?current, to = ?step, flow = %self.flow, "Onboarding advanced");
        Ok(step)
    }

    /// Go back one step; stays put on the first step
    pub fn back(&mut self) -> OnboardingStep {
        self.position = self.position.saturating_sub(1);
        self.current_step()
    }

    /// Goals for the inputs entered so far
    ///
    /// Missing biometrics give the fallback goals and a missing goal previews
    /// `maintain`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidProfile` or `ValueOutOfRange` for invalid inputs
    pub fn preview_goals(&self) -> AppResult<GoalSet> {
        self.calculator.compute(
            &self.draft,
            self.goal.unwrap_or(FitnessGoal::Maintain),
            &self.calculation_path(),
        )
    }

    /// Compute goals and save the completed onboarding
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` unless on the summary step, any validation
    /// error of an earlier step, or the repository's storage error
    pub fn finish<S: KeyValueStore>(
        &self,
        repository: &ProfileRepository<S>,
    ) -> AppResult<OnboardingRecord> {
        if self.current_step() != OnboardingStep::Summary {
            return Err(AppError::invalid_state(format!(
                "Cannot finish onboarding from the {:?} step",
                self.current_step()
            )));
        }
        for step in self.flow.steps() {
            self.validate(*step)?;
        }

        let (Some(profile), Some(goal)) = (self.draft.complete(), self.goal) else {
            return Err(AppError::invalid_state("Onboarding inputs are incomplete"));
        };
        let calculation = self.calculation_path();
        let goals = self.calculator.compute(&self.draft, goal, &calculation)?;

        let record = OnboardingRecord::new(
            profile,
            goal,
            calculation,
            goals,
            self.credit_goals.ids(),
        );
        repository.save(&record)?;

        info!(
            record_id = %record.id,
            flow = %self.flow,
            %goal,
            calories = goals.daily_calories,
            "Onboarding completed"
        );
        Ok(record)
    }
}

fn default_workouts(config: &GoalCalculatorConfig) -> u8 {
    u8::try_from(config.targets.simplified_weekly_workouts)
        .unwrap_or(config.activity.max_workouts_per_week)
        .min(config.activity.max_workouts_per_week)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wizard(flow: OnboardingFlow) -> OnboardingWizard {
        OnboardingWizard::with_calculator(flow, GoalCalculator::new(GoalCalculatorConfig::default()))
    }

    #[test]
    fn test_progress_spans_zero_to_one() {
        let mut wizard = wizard(OnboardingFlow::Simplified);
        assert!(wizard.progress().abs() < f64::EPSILON);
        wizard.next().unwrap();
        wizard
            .set_height_cm(180.0)
            .set_weight_kg(80.0)
            .set_age(30)
            .set_gender(Gender::Male);
        wizard.next().unwrap();
        wizard.set_goal(FitnessGoal::Maintain);
        assert_eq!(wizard.next().unwrap(), OnboardingStep::Summary);
        assert!((wizard.progress() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_back_stays_on_first_step() {
        let mut wizard = wizard(OnboardingFlow::Guided);
        assert_eq!(wizard.back(), OnboardingStep::Welcome);
    }

    #[test]
    fn test_flow_parsing() {
        assert_eq!("Guided".parse::<OnboardingFlow>().unwrap(), OnboardingFlow::Guided);
        assert!("wizard".parse::<OnboardingFlow>().is_err());
    }
}
