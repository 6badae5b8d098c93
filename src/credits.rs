// ABOUTME: Credit goal selection, daily scoring and the reward ledger
// ABOUTME: Users pick up to five daily goals; each goal met earns one credit to spend on rewards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Credits and rewards
//!
//! A day is scored once: every selected goal whose progress reached its
//! target earns one credit. Credits accumulate in the [`CreditLedger`] and
//! are spent on catalog rewards.

use crate::constants::credits::MAX_SELECTED_GOALS;
use crate::errors::{AppError, AppResult};
use crate::models::{CreditGoal, Reward};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::hash::BuildHasher;
use tracing::{debug, info};

/// Result of [`CreditGoalSelection::toggle`]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SelectionChange {
    /// Goal was added
    Added,
    /// Goal was already selected and has been removed
    Removed,
    /// Selection is full; nothing changed
    LimitReached,
    /// Goal was already selected; nothing changed
    AlreadySelected,
}

/// Up to five selected credit goals, in selection order
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CreditGoalSelection {
    selected: Vec<CreditGoal>,
}

impl CreditGoalSelection {
    /// Empty selection
    #[must_use]
    pub const fn new() -> Self {
        Self {
            selected: Vec::new(),
        }
    }

    /// Selection built by toggling each goal in turn; extra goals are ignored
    #[must_use]
    pub fn from_goals<'a>(goals: impl IntoIterator<Item = &'a CreditGoal>) -> Self {
        let mut selection = Self::new();
        for goal in goals {
            selection.select(goal);
        }
        selection
    }

    /// Add `goal` if absent and there is room; never removes
    pub fn select(&mut self, goal: &CreditGoal) -> SelectionChange {
        if self.is_selected(&goal.id) {
            return SelectionChange::AlreadySelected;
        }
        self.toggle(goal)
    }

    /// Add `goal` if absent and there is room, remove it if present
    pub fn toggle(&mut self, goal: &CreditGoal) -> SelectionChange {
        if let Some(index) = self.selected.iter().position(|g| g.id == goal.id) {
            self.selected.remove(index);
            return SelectionChange::Removed;
        }
        if self.is_full() {
            debug!(goal = %goal.id, "Credit goal selection full");
            return SelectionChange::LimitReached;
        }
        self.selected.push(goal.clone());
        SelectionChange::Added
    }

    /// Whether the goal with `id` is selected
    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|goal| goal.id == id)
    }

    /// Whether no more goals can be added
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.selected.len() >= MAX_SELECTED_GOALS
    }

    /// Selected goals
    #[must_use]
    pub fn goals(&self) -> &[CreditGoal] {
        &self.selected
    }

    /// Selected goal ids
    #[must_use]
    pub fn ids(&self) -> Vec<String> {
        self.selected.iter().map(|goal| goal.id.clone()).collect()
    }

    /// Number of selected goals
    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Whether nothing is selected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

/// Credits earned for a day: selected goals whose `progress` reached the target
///
/// `progress` maps goal id to the value reached; missing ids count as zero.
#[must_use]
pub fn score_day<S: BuildHasher>(
    selection: &CreditGoalSelection,
    progress: &HashMap<String, f64, S>,
) -> u32 {
    let earned = selection
        .goals()
        .iter()
        .filter(|goal| {
            progress
                .get(&goal.id)
                .is_some_and(|value| *value >= goal.target)
        })
        .count();
    u32::try_from(earned).unwrap_or(u32::MAX)
}

/// A spent reward
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Redemption {
    /// Reward id
    pub reward_id: String,
    /// Credits spent
    pub cost: u32,
    /// When the reward was redeemed
    pub redeemed_at: DateTime<Utc>,
}

/// Credit balance with award and redemption history
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreditLedger {
    balance: u32,
    awarded_days: BTreeSet<NaiveDate>,
    redemptions: Vec<Redemption>,
}

impl CreditLedger {
    /// Empty ledger
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current balance
    #[must_use]
    pub const fn balance(&self) -> u32 {
        self.balance
    }

    /// Whether `date` has already been scored
    #[must_use]
    pub fn is_awarded(&self, date: NaiveDate) -> bool {
        self.awarded_days.contains(&date)
    }

    /// Redemptions, oldest first
    #[must_use]
    pub fn redemptions(&self) -> &[Redemption] {
        &self.redemptions
    }

    /// Credit `credits` for `date`; returns the new balance
    ///
    /// # Errors
    ///
    /// Returns `ResourceAlreadyExists` when `date` was already awarded
    pub fn award(&mut self, date: NaiveDate, credits: u32) -> AppResult<u32> {
        if !self.awarded_days.insert(date) {
            return Err(AppError::already_exists(format!("Credits for {date}")));
        }
        self.balance = self.balance.saturating_add(credits);
        info!(%date, credits, balance = self.balance, "Awarded credits");
        Ok(self.balance)
    }

    /// Spend credits on `reward`; returns the new balance
    ///
    /// # Errors
    ///
    /// Returns `InsufficientCredits` when the balance does not cover the cost
    pub fn redeem(&mut self, reward: &Reward) -> AppResult<u32> {
        if reward.cost > self.balance {
            return Err(
                AppError::insufficient_credits(self.balance, reward.cost)
                    .with_resource_id(&reward.id),
            );
        }
        self.balance -= reward.cost;
        self.redemptions.push(Redemption {
            reward_id: reward.id.clone(),
            cost: reward.cost,
            redeemed_at: Utc::now(),
        });
        info!(reward = %reward.id, cost = reward.cost, balance = self.balance, "Redeemed reward");
        Ok(self.balance)
    }
}
