// ABOUTME: Workout session planning from a program and today's body battery
// ABOUTME: Maps each exercise's last performance through the weight suggestion heuristic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::intelligence::config::TrainingLoadConfig;
use crate::intelligence::weight_suggestion::suggest_weight_with;
use crate::intelligence::{ReadinessBand, WeightSuggestion};
use crate::models::WorkoutProgram;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One exercise with its suggested next set
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlannedExercise {
    /// Exercise name
    pub name: String,
    /// Working sets
    pub sets: u32,
    /// Last logged performance
    pub last_performance: String,
    /// Suggested next set
    pub suggestion: WeightSuggestion,
}

/// Today's session for a program
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionPlan {
    /// Program id
    pub program_id: String,
    /// Program name
    pub program_name: String,
    /// Body battery the plan was made for
    pub body_battery: u8,
    /// Readiness band shared by every exercise
    pub band: ReadinessBand,
    /// Exercises in program order
    pub exercises: Vec<PlannedExercise>,
}

impl SessionPlan {
    /// Exercises whose last performance could not be read
    pub fn unrecognized(&self) -> impl Iterator<Item = &PlannedExercise> {
        self.exercises
            .iter()
            .filter(|exercise| !exercise.suggestion.is_recognized())
    }
}

/// Plan a session with the default training load configuration
#[must_use]
pub fn plan_session(program: &WorkoutProgram, body_battery: u8) -> SessionPlan {
    plan_session_with(program, body_battery, &TrainingLoadConfig::default())
}

/// Plan a session with an explicit configuration
#[must_use]
pub fn plan_session_with(
    program: &WorkoutProgram,
    body_battery: u8,
    config: &TrainingLoadConfig,
) -> SessionPlan {
    let exercises: Vec<PlannedExercise> = program
        .exercises
        .iter()
        .map(|exercise| PlannedExercise {
            name: exercise.name.clone(),
            sets: exercise.sets,
            last_performance: exercise.last_performance.clone(),
            suggestion: suggest_weight_with(&exercise.last_performance, body_battery, config),
        })
        .collect();

    let band = ReadinessBand::from_body_battery(body_battery, config);
    debug!(
        program = %program.id,
        body_battery,
        %band,
        exercises = exercises.len(),
        "Planned session"
    );

    SessionPlan {
        program_id: program.id.clone(),
        program_name: program.name.clone(),
        body_battery,
        band,
        exercises,
    }
}
