// ABOUTME: Workout program models for strength session planning
// ABOUTME: WorkoutProgram and ExerciseTemplate carrying the last logged performance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// One exercise inside a program
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExerciseTemplate {
    /// Exercise name
    pub name: String,
    /// Working sets
    pub sets: u32,
    /// Last logged performance, e.g. `"60kg/10"`, `"135lb/8"`, `"BW/12"`
    pub last_performance: String,
}

/// Named list of exercises
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkoutProgram {
    /// Stable identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Exercises in session order
    pub exercises: Vec<ExerciseTemplate>,
}
