// ABOUTME: Food database search over the embedded catalog
// ABOUTME: Case-insensitive name search with optional category filter and id lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use crate::models::{FoodCategory, FoodItem};
use tracing::debug;

/// Searchable food list
#[derive(Debug, Clone, Default)]
pub struct FoodDatabase {
    foods: Vec<FoodItem>,
}

impl FoodDatabase {
    /// Database over `foods`
    #[must_use]
    pub const fn new(foods: Vec<FoodItem>) -> Self {
        Self { foods }
    }

    /// Number of foods
    #[must_use]
    pub fn len(&self) -> usize {
        self.foods.len()
    }

    /// Whether the database has no foods
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    /// Foods whose name contains `query` (case-insensitive), sorted by name
    ///
    /// A blank query matches everything, so the category filter alone can be
    /// used to browse.
    #[must_use]
    pub fn search(&self, query: &str, category: Option<FoodCategory>) -> Vec<&FoodItem> {
        let needle = query.trim().to_lowercase();
        let mut results: Vec<&FoodItem> = self
            .foods
            .iter()
            .filter(|food| category.is_none_or(|wanted| food.category == wanted))
            .filter(|food| needle.is_empty() || food.name.to_lowercase().contains(&needle))
            .collect();
        results.sort_by_cached_key(|food| food.name.to_lowercase());

        debug!(query, ?category, results = results.len(), "Food search");
        results
    }

    /// Food by id
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when no food has this id
    pub fn get(&self, id: &str) -> AppResult<&FoodItem> {
        self.foods
            .iter()
            .find(|food| food.id == id)
            .ok_or_else(|| AppError::not_found(format!("Food {id}")).with_resource_id(id))
    }
}

impl From<Vec<FoodItem>> for FoodDatabase {
    fn from(foods: Vec<FoodItem>) -> Self {
        Self::new(foods)
    }
}
