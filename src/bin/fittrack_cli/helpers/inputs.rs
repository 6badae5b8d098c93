// ABOUTME: Maps CLI profile arguments onto a pre-filled onboarding wizard
// ABOUTME: Shared by the goals and profile create commands so both apply the same defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fittrack::onboarding::{OnboardingFlow, OnboardingWizard};

use crate::ProfileArgs;

/// Wizard pre-filled with every argument that was given
///
/// `--flow` wins over `default_flow`. Guided-only inputs are ignored for the
/// simplified flow.
pub fn wizard(args: &ProfileArgs, default_flow: OnboardingFlow) -> OnboardingWizard {
    let flow = args.flow.unwrap_or(default_flow);
    let mut wizard = OnboardingWizard::new(flow);
    if let Some(height) = args.height {
        wizard.set_height_cm(height);
    }
    if let Some(weight) = args.weight {
        wizard.set_weight_kg(weight);
    }
    if let Some(age) = args.age {
        wizard.set_age(age);
    }
    if let Some(gender) = args.gender {
        wizard.set_gender(gender);
    }
    wizard.set_goal(args.goal);

    if flow == OnboardingFlow::Guided {
        if let Some(workouts) = args.workouts {
            wizard.set_workouts_per_week(workouts);
        }
        wizard
            .set_fitness_level(args.level.unwrap_or_default())
            .set_weekly_goal_kg(args.weekly_kg);
    }
    wizard
}
