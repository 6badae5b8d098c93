// ABOUTME: Core data models shared by the calculator and the client modules
// ABOUTME: Re-exports profile, goal, nutrition, credit and workout types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Credit goals and rewards
pub mod credits;
/// Daily goal set
pub mod goals;
/// Food and meal models
pub mod nutrition;
/// Biometric profile models
pub mod profile;
/// Workout program models
pub mod workout;

pub use credits::{CreditGoal, Reward};
pub use goals::GoalSet;
pub use nutrition::{FoodCategory, FoodItem, MacroTotals, MealType};
pub use profile::{FitnessGoal, FitnessLevel, Gender, ProfileDraft, UserProfile};
pub use workout::{ExerciseTemplate, WorkoutProgram};
