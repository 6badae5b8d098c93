// ABOUTME: Goals command - daily targets for a profile without storing anything
// ABOUTME: Optionally prints BMR, TDEE and the goal adjustment behind the numbers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use fittrack::config::AppConfig;
use fittrack::intelligence::GoalCalculator;

use crate::helpers::display::{display_breakdown, display_goals, print_json};
use crate::helpers::inputs::wizard;
use crate::ProfileArgs;

pub fn run(config: &AppConfig, args: &ProfileArgs, breakdown: bool, json: bool) -> Result<()> {
    let wizard = wizard(args, config.onboarding_flow);
    let path = wizard.calculation_path();
    let calculator = GoalCalculator::default();
    calculator.validate_path(&path)?;

    let result = calculator.compute_breakdown(wizard.draft(), args.goal, &path)?;

    if json {
        if breakdown {
            print_json(&result)?;
        } else {
            print_json(&result.goals)?;
        }
        return Ok(());
    }

    println!("Flow: {}  Goal: {}\n", wizard.flow(), args.goal);
    display_goals(&result.goals);
    if breakdown {
        display_breakdown(&result);
    }
    Ok(())
}
