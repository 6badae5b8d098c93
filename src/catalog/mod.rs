// ABOUTME: Embedded catalog of foods, credit goals, rewards and workout programs
// ABOUTME: Parses the bundled JSON fixture once and validates ids and values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult, ErrorCode};
use crate::models::{CreditGoal, FoodItem, Reward, WorkoutProgram};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Bundled catalog data (single source of truth)
const EMBEDDED_CATALOG_JSON: &str = include_str!("catalog.json");

/// Static reference data used by the client modules
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    /// Food database entries
    #[serde(default)]
    pub foods: Vec<FoodItem>,
    /// Selectable credit goals
    #[serde(default)]
    pub credit_goals: Vec<CreditGoal>,
    /// Redeemable rewards
    #[serde(default)]
    pub rewards: Vec<Reward>,
    /// Workout programs
    #[serde(default)]
    pub programs: Vec<WorkoutProgram>,
}

impl Catalog {
    /// Parse the catalog bundled with the binary
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled JSON is malformed or fails validation
    pub fn load_embedded() -> AppResult<Self> {
        Self::from_json_str(EMBEDDED_CATALOG_JSON)
    }

    /// Parse and validate a catalog document
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` for malformed JSON and `InvalidFormat`
    /// for duplicate ids or non-positive values
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        debug!(
            foods = catalog.foods.len(),
            credit_goals = catalog.credit_goals.len(),
            rewards = catalog.rewards.len(),
            programs = catalog.programs.len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    /// Credit goal by id
    #[must_use]
    pub fn credit_goal(&self, id: &str) -> Option<&CreditGoal> {
        self.credit_goals.iter().find(|goal| goal.id == id)
    }

    /// Reward by id
    #[must_use]
    pub fn reward(&self, id: &str) -> Option<&Reward> {
        self.rewards.iter().find(|reward| reward.id == id)
    }

    /// Workout program by id
    #[must_use]
    pub fn program(&self, id: &str) -> Option<&WorkoutProgram> {
        self.programs.iter().find(|program| program.id == id)
    }

    fn validate(&self) -> AppResult<()> {
        ensure_unique("food", self.foods.iter().map(|food| food.id.as_str()))?;
        ensure_unique(
            "credit goal",
            self.credit_goals.iter().map(|goal| goal.id.as_str()),
        )?;
        ensure_unique("reward", self.rewards.iter().map(|reward| reward.id.as_str()))?;
        ensure_unique(
            "program",
            self.programs.iter().map(|program| program.id.as_str()),
        )?;

        if let Some(food) = self.foods.iter().find(|food| {
            [food.calories, food.protein_g, food.carbs_g, food.fats_g]
                .iter()
                .any(|value| !value.is_finite() || *value < 0.0)
        }) {
            return Err(invalid_entry("food", &food.id, "nutrition values must be >= 0"));
        }
        if let Some(goal) = self
            .credit_goals
            .iter()
            .find(|goal| !goal.target.is_finite() || goal.target <= 0.0)
        {
            return Err(invalid_entry("credit goal", &goal.id, "target must be > 0"));
        }
        if let Some(program) = self
            .programs
            .iter()
            .find(|program| program.exercises.iter().any(|exercise| exercise.sets == 0))
        {
            return Err(invalid_entry("program", &program.id, "every exercise needs sets"));
        }
        Ok(())
    }
}

fn ensure_unique<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> AppResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if id.trim().is_empty() {
            return Err(invalid_entry(kind, id, "id must not be empty"));
        }
        if !seen.insert(id) {
            return Err(invalid_entry(kind, id, "duplicate id"));
        }
    }
    Ok(())
}

fn invalid_entry(kind: &str, id: &str, reason: &str) -> AppError {
    AppError::new(
        ErrorCode::InvalidFormat,
        format!("Invalid {kind} '{id}': {reason}"),
    )
    .with_resource_id(id)
}
