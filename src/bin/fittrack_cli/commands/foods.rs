// ABOUTME: Foods command - searches the embedded food database
// ABOUTME: Case-insensitive name filter with an optional category restriction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use fittrack::catalog::Catalog;
use fittrack::food::FoodDatabase;
use fittrack::models::FoodCategory;

use crate::helpers::display::print_json;

pub fn run(query: &str, category: Option<FoodCategory>, json: bool) -> Result<()> {
    let catalog = Catalog::load_embedded()?;
    let database = FoodDatabase::new(catalog.foods);
    let matches = database.search(query, category);

    if json {
        return print_json(&matches);
    }

    if matches.is_empty() {
        println!("No foods match '{query}'");
        return Ok(());
    }

    println!(
        "{:<24} {:<14} {:>7} {:>7} {:>7} {:>7}",
        "Food", "Serving", "kcal", "P (g)", "C (g)", "F (g)"
    );
    println!("{}", "-".repeat(72));
    for food in &matches {
        println!(
            "{:<24} {:<14} {:>7.0} {:>7.1} {:>7.1} {:>7.1}",
            food.name, food.serving, food.calories, food.protein_g, food.carbs_g, food.fats_g
        );
    }
    println!("\n{} of {} foods", matches.len(), database.len());
    Ok(())
}
