// ABOUTME: Integration tests for the food catalog, food search and meal logging
// ABOUTME: Serving scaling, search filters, meal building and remaining daily macros
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::NaiveDate;
use common::{catalog, init_test_logging};
use fittrack::catalog::Catalog;
use fittrack::errors::ErrorCode;
use fittrack::food::FoodDatabase;
use fittrack::meals::{DailyLog, MealBuilder};
use fittrack::models::{FoodCategory, GoalSet, MealType};

fn database() -> FoodDatabase {
    FoodDatabase::new(catalog().foods)
}

fn approx(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_embedded_catalog_contents() {
    let catalog = catalog();
    assert!(catalog.foods.len() >= 30);
    assert_eq!(catalog.credit_goals.len(), 8);
    assert!(catalog.credit_goal("water").is_some());
    assert_eq!(catalog.reward("cheat_meal").unwrap().cost, 10);
    assert_eq!(catalog.program("full_body_a").unwrap().exercises.len(), 4);
    assert!(catalog.program("missing").is_none());
}

#[test]
fn test_catalog_rejects_duplicate_ids() {
    let json = r#"{
        "rewards": [
            { "id": "spa", "name": "Spa", "cost": 5 },
            { "id": "spa", "name": "Spa again", "cost": 6 }
        ]
    }"#;
    let error = Catalog::from_json_str(json).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidFormat);
    assert_eq!(error.resource_id.as_deref(), Some("spa"));
}

#[test]
fn test_catalog_rejects_negative_nutrition() {
    let json = r#"{
        "foods": [
            { "id": "odd", "name": "Odd", "category": "snacks", "serving": "1",
              "calories": -10, "protein_g": 0, "carbs_g": 0, "fats_g": 0 }
        ]
    }"#;
    assert!(Catalog::from_json_str(json).is_err());
}

#[test]
fn test_catalog_rejects_malformed_json() {
    let error = Catalog::from_json_str("{ not json").unwrap_err();
    assert_eq!(error.code, ErrorCode::SerializationError);
}

#[test]
fn test_search_is_case_insensitive() {
    let database = database();
    let lower = database.search("chicken", None);
    let upper = database.search("CHICKEN", None);
    assert_eq!(lower.len(), 1);
    assert_eq!(lower, upper);
    assert_eq!(lower[0].id, "chicken_breast");
}

#[test]
fn test_search_filters_by_category_and_sorts() {
    let database = database();
    let fruit = database.search("", Some(FoodCategory::Fruit));
    let names: Vec<&str> = fruit.iter().map(|food| food.name.as_str()).collect();
    assert_eq!(names, vec!["Apple", "Banana", "Blueberries"]);

    let cheese = database.search("cheese", Some(FoodCategory::Dairy));
    assert_eq!(cheese.len(), 2);
    assert!(database.search("cheese", Some(FoodCategory::Fruit)).is_empty());
}

#[test]
fn test_blank_query_lists_everything() {
    let database = database();
    assert_eq!(database.search("  ", None).len(), database.len());
}

#[test]
fn test_get_unknown_food() {
    let error = database().get("dragon_fruit").unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
}

#[test]
fn test_servings_scale_linearly() {
    let database = database();
    let oats = database.get("rolled_oats").unwrap();
    let totals = oats.macros_for(1.5);
    approx(totals.calories, 225.0);
    approx(totals.protein_g, 7.5);
    approx(totals.carbs_g, 40.5);
    approx(totals.fats_g, 3.75);
}

#[test]
fn test_meal_totals_sum_entries() {
    init_test_logging();
    let database = database();
    let mut builder = MealBuilder::new(MealType::Breakfast);
    builder
        .add(database.get("rolled_oats").unwrap().clone(), 2.0)
        .unwrap()
        .add(database.get("banana").unwrap().clone(), 1.0)
        .unwrap();

    let meal = builder.build().unwrap();
    let totals = meal.totals();
    approx(totals.calories, 405.0);
    approx(totals.protein_g, 11.3);
    approx(totals.carbs_g, 81.0);
}

#[test]
fn test_meal_builder_validation() {
    let database = database();
    let egg = database.get("egg").unwrap().clone();

    let mut builder = MealBuilder::new(MealType::Snack);
    for servings in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let error = builder.add(egg.clone(), servings).unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput);
    }
    assert!(builder.entries().is_empty());

    builder.add(egg, 2.0).unwrap();
    assert_eq!(builder.remove(3).unwrap_err().code, ErrorCode::ResourceNotFound);
    let removed = builder.remove(0).unwrap();
    approx(removed.servings, 2.0);

    let error = builder.build().unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[test]
fn test_daily_log_remaining_never_negative() {
    let database = database();
    let mut log = DailyLog::new(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());

    let mut lunch = MealBuilder::new(MealType::Lunch);
    lunch
        .add(database.get("chicken_breast").unwrap().clone(), 2.0)
        .unwrap()
        .add(database.get("white_rice").unwrap().clone(), 1.0)
        .unwrap();
    log.log(lunch.build().unwrap());

    let mut snack = MealBuilder::new(MealType::Snack);
    snack
        .add(database.get("olive_oil").unwrap().clone(), 10.0)
        .unwrap();
    log.log(snack.build().unwrap());

    assert_eq!(log.meals_of(MealType::Lunch).count(), 1);
    assert_eq!(log.meals_of(MealType::Dinner).count(), 0);

    let goals = GoalSet {
        daily_calories: 2000,
        daily_protein: 150,
        daily_carbs: 200,
        daily_fats: 60,
        daily_steps: 10_000,
        daily_sleep_hours: 8,
        weekly_workouts: 3,
    };
    let consumed = log.consumed();
    approx(consumed.protein_g, 66.3);

    let remaining = log.remaining(&goals);
    approx(remaining.protein_g, 150.0 - 66.3);
    approx(remaining.carbs_g, 155.0);
    approx(remaining.fats_g, 0.0);
}
