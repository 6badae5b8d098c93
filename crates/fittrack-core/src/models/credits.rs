// ABOUTME: Credit goal and reward catalog models
// ABOUTME: Daily targets that award credits and the rewards credits can be spent on
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Selectable daily target whose completion awards one credit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreditGoal {
    /// Stable identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Value to reach for the day
    pub target: f64,
    /// Unit of `target` (steps, kcal, glasses…)
    pub unit: String,
    /// Color tag used by the presentation layer
    pub color: String,
}

/// Item that can be redeemed with credits
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reward {
    /// Stable identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Cost in credits
    pub cost: u32,
}
