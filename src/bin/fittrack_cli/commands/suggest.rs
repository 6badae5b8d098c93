// ABOUTME: Suggest command - next set from the last logged one and body battery
// ABOUTME: Prints the suggestion with its readiness band and coaching message
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use fittrack::intelligence::suggest_weight;

use crate::helpers::display::print_json;

pub fn run(last_performance: &str, battery: u8, json: bool) -> Result<()> {
    let suggestion = suggest_weight(last_performance, battery);

    if json {
        return print_json(&suggestion);
    }

    println!("Last:       {last_performance}");
    println!("Battery:    {battery} ({})", suggestion.band);
    println!("Suggestion: {}", suggestion.suggestion);
    println!("\n{}", suggestion.message);
    Ok(())
}
