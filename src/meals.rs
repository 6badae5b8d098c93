// ABOUTME: Meal builder and daily food log
// ABOUTME: Accumulates food servings into meals and compares intake with daily goals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use crate::models::{FoodItem, GoalSet, MacroTotals, MealType};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One food in a meal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealEntry {
    /// Food logged
    pub food: FoodItem,
    /// Number of servings (may be fractional)
    pub servings: f64,
}

impl MealEntry {
    /// Macros for this entry
    #[must_use]
    pub fn totals(&self) -> MacroTotals {
        self.food.macros_for(self.servings)
    }
}

/// Completed meal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Meal {
    /// Breakfast, lunch, dinner or snack
    pub meal_type: MealType,
    /// Logged foods, never empty
    pub entries: Vec<MealEntry>,
}

impl Meal {
    /// Summed macros
    #[must_use]
    pub fn totals(&self) -> MacroTotals {
        self.entries.iter().map(MealEntry::totals).sum()
    }
}

/// Incrementally assembles a [`Meal`]
#[derive(Debug, Clone)]
pub struct MealBuilder {
    meal_type: MealType,
    entries: Vec<MealEntry>,
}

impl MealBuilder {
    /// Empty builder for `meal_type`
    #[must_use]
    pub const fn new(meal_type: MealType) -> Self {
        Self {
            meal_type,
            entries: Vec::new(),
        }
    }

    /// Add `servings` of `food`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` unless `servings` is finite and positive
    pub fn add(&mut self, food: FoodItem, servings: f64) -> AppResult<&mut Self> {
        if !servings.is_finite() || servings <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "Servings must be a positive number, got {servings}"
            ))
            .with_resource_id("servings"));
        }
        self.entries.push(MealEntry { food, servings });
        Ok(self)
    }

    /// Remove and return the entry at `index`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when `index` is out of range
    pub fn remove(&mut self, index: usize) -> AppResult<MealEntry> {
        if index >= self.entries.len() {
            return Err(AppError::not_found(format!("Meal entry {index}")));
        }
        Ok(self.entries.remove(index))
    }

    /// Entries added so far
    #[must_use]
    pub fn entries(&self) -> &[MealEntry] {
        &self.entries
    }

    /// Running totals
    #[must_use]
    pub fn totals(&self) -> MacroTotals {
        self.entries.iter().map(MealEntry::totals).sum()
    }

    /// Finish the meal
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when no food was added
    pub fn build(self) -> AppResult<Meal> {
        if self.entries.is_empty() {
            return Err(AppError::invalid_input("A meal needs at least one food"));
        }
        Ok(Meal {
            meal_type: self.meal_type,
            entries: self.entries,
        })
    }
}

/// Meals logged for one day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyLog {
    /// Day the meals belong to
    pub date: NaiveDate,
    /// Logged meals in order
    pub meals: Vec<Meal>,
}

impl DailyLog {
    /// Empty log for `date`
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self {
            date,
            meals: Vec::new(),
        }
    }

    /// Append a meal
    pub fn log(&mut self, meal: Meal) {
        debug!(date = %self.date, meal_type = ?meal.meal_type, "Logged meal");
        self.meals.push(meal);
    }

    /// Meals of one type
    pub fn meals_of(&self, meal_type: MealType) -> impl Iterator<Item = &Meal> {
        self.meals
            .iter()
            .filter(move |meal| meal.meal_type == meal_type)
    }

    /// Everything eaten so far
    #[must_use]
    pub fn consumed(&self) -> MacroTotals {
        self.meals.iter().map(Meal::totals).sum()
    }

    /// What is left of `goals`; never negative
    #[must_use]
    pub fn remaining(&self, goals: &GoalSet) -> MacroTotals {
        let consumed = self.consumed();
        MacroTotals {
            calories: (f64::from(goals.daily_calories) - consumed.calories).max(0.0),
            protein_g: (f64::from(goals.daily_protein) - consumed.protein_g).max(0.0),
            carbs_g: (f64::from(goals.daily_carbs) - consumed.carbs_g).max(0.0),
            fats_g: (f64::from(goals.daily_fats) - consumed.fats_g).max(0.0),
        }
    }
}
