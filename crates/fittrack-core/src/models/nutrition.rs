// ABOUTME: Food and meal models for the food log
// ABOUTME: FoodCategory, FoodItem, MealType and MacroTotals definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Food database category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FoodCategory {
    /// Meat, fish, eggs, dairy protein
    Protein,
    /// Grains, bread, rice, pasta
    Grains,
    /// Fresh fruit
    Fruit,
    /// Vegetables and legumes
    Vegetables,
    /// Milk, yogurt, cheese
    Dairy,
    /// Oils, nuts, seeds
    Fats,
    /// Bars, shakes and other snacks
    Snacks,
    /// Drinks
    Beverages,
}

impl FoodCategory {
    /// Parse category from string
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "protein" => Some(Self::Protein),
            "grains" => Some(Self::Grains),
            "fruit" => Some(Self::Fruit),
            "vegetables" => Some(Self::Vegetables),
            "dairy" => Some(Self::Dairy),
            "fats" => Some(Self::Fats),
            "snacks" => Some(Self::Snacks),
            "beverages" => Some(Self::Beverages),
            _ => None,
        }
    }
}

/// Food database entry; macro values are per serving
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodItem {
    /// Stable identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Category
    pub category: FoodCategory,
    /// Serving description (e.g. "100 g", "1 medium")
    pub serving: String,
    /// Calories per serving
    pub calories: f64,
    /// Protein per serving (grams)
    pub protein_g: f64,
    /// Carbohydrates per serving (grams)
    pub carbs_g: f64,
    /// Fat per serving (grams)
    pub fats_g: f64,
}

impl FoodItem {
    /// Macros for the given number of servings
    #[must_use]
    pub fn macros_for(&self, servings: f64) -> MacroTotals {
        MacroTotals {
            calories: self.calories * servings,
            protein_g: self.protein_g * servings,
            carbs_g: self.carbs_g * servings,
            fats_g: self.fats_g * servings,
        }
    }
}

/// Type of meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
}

impl MealType {
    /// Parse meal type from string, defaulting to a snack
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Self::Breakfast,
            "lunch" => Self::Lunch,
            "dinner" => Self::Dinner,
            _ => Self::Snack,
        }
    }
}

/// Summed calories and macronutrients
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct MacroTotals {
    /// Calories (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein_g: f64,
    /// Carbohydrates (g)
    pub carbs_g: f64,
    /// Fat (g)
    pub fats_g: f64,
}

impl Add for MacroTotals {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            calories: self.calories + rhs.calories,
            protein_g: self.protein_g + rhs.protein_g,
            carbs_g: self.carbs_g + rhs.carbs_g,
            fats_g: self.fats_g + rhs.fats_g,
        }
    }
}

impl AddAssign for MacroTotals {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for MacroTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}
