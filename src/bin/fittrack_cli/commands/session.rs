// ABOUTME: Session command - plans a program's exercises for today's body battery
// ABOUTME: Lists available programs when no program id is given
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{anyhow, Result};
use fittrack::catalog::Catalog;
use fittrack::workouts::plan_session;

use crate::helpers::display::print_json;

pub fn run(program_id: Option<&str>, battery: u8, json: bool) -> Result<()> {
    let catalog = Catalog::load_embedded()?;

    let Some(program_id) = program_id else {
        if json {
            return print_json(&catalog.programs);
        }
        println!("Programs");
        for program in &catalog.programs {
            println!(
                "   {:<14} {} ({} exercises)",
                program.id,
                program.name,
                program.exercises.len()
            );
        }
        return Ok(());
    };

    let program = catalog
        .program(program_id)
        .ok_or_else(|| anyhow!("Unknown program '{program_id}'"))?;
    let plan = plan_session(program, battery);

    if json {
        return print_json(&plan);
    }

    println!("{} | battery {} ({})", plan.program_name, plan.body_battery, plan.band);
    println!("{}", "=".repeat(60));
    for exercise in &plan.exercises {
        println!(
            "   {:<22} {} x {:<12} last {}",
            exercise.name, exercise.sets, exercise.suggestion.suggestion, exercise.last_performance
        );
    }
    for exercise in plan.unrecognized() {
        println!("\n{}: {}", exercise.name, exercise.suggestion.message);
    }
    Ok(())
}
