// ABOUTME: Daily goal set produced by the goal calculator
// ABOUTME: GoalSet with camelCase wire names and the documented fallback defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Daily nutrition and activity targets
///
/// Values are rounded display approximations. A `GoalSet` is recomputed
/// rather than edited when the profile changes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GoalSet {
    /// Daily calorie target (kcal)
    pub daily_calories: u32,
    /// Daily protein target (g)
    pub daily_protein: u32,
    /// Daily carbohydrate target (g)
    pub daily_carbs: u32,
    /// Daily fat target (g)
    pub daily_fats: u32,
    /// Daily step target
    pub daily_steps: u32,
    /// Nightly sleep target (hours)
    pub daily_sleep_hours: u32,
    /// Workouts per week
    pub weekly_workouts: u32,
}

impl GoalSet {
    /// Kilocalories contributed by the protein and fat targets
    #[must_use]
    pub const fn protein_and_fat_kcal(&self) -> u32 {
        self.daily_protein * 4 + self.daily_fats * 9
    }
}
