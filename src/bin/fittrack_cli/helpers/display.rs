// ABOUTME: Output formatting helpers for fittrack-cli
// ABOUTME: Text tables for goals, suggestions and sessions plus a JSON printer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use fittrack::intelligence::GoalBreakdown;
use fittrack::models::GoalSet;
use serde::Serialize;

/// Pretty-print `value` as JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a goal set
pub fn display_goals(goals: &GoalSet) {
    println!("Daily goals");
    println!("{}", "=".repeat(40));
    println!("   Calories:  {:>6} kcal", goals.daily_calories);
    println!("   Protein:   {:>6} g", goals.daily_protein);
    println!("   Carbs:     {:>6} g", goals.daily_carbs);
    println!("   Fats:      {:>6} g", goals.daily_fats);
    println!("   Steps:     {:>6}", goals.daily_steps);
    println!("   Sleep:     {:>6} h", goals.daily_sleep_hours);
    println!("   Workouts:  {:>6} / week", goals.weekly_workouts);
}

/// Print the intermediate values behind a goal set
pub fn display_breakdown(breakdown: &GoalBreakdown) {
    if breakdown.used_fallback {
        println!("\nProfile incomplete: showing default goals");
        return;
    }
    println!("\nCalculation");
    println!("{}", "=".repeat(40));
    if let Some(bmr) = breakdown.bmr {
        println!("   BMR:         {bmr:>8.1} kcal");
    }
    if let Some(multiplier) = breakdown.activity_multiplier {
        println!("   Activity:    {multiplier:>8.2} x");
    }
    if let Some(tdee) = breakdown.tdee {
        println!("   TDEE:        {tdee:>8.1} kcal");
    }
    if let Some(adjustment) = breakdown.calorie_adjustment {
        println!("   Adjustment:  {adjustment:>+8.1} kcal");
    }
    if let Some(factor) = breakdown.protein_g_per_kg {
        println!("   Protein:     {factor:>8.1} g/kg");
    }
}
