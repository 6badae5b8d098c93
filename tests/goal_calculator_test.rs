// ABOUTME: Integration tests for daily goal calculation
// ABOUTME: Covers both onboarding paths, fallbacks, invariants and input validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{default_calculator, init_test_logging, reference_draft, reference_profile};
use fittrack::errors::ErrorCode;
use fittrack::intelligence::config::goals::BmrConfig;
use fittrack::intelligence::goal_calculator::{calculate_mifflin_st_jeor, split_macros};
use fittrack::intelligence::{CalculationPath, GuidedActivity};
use fittrack::models::{FitnessGoal, FitnessLevel, Gender, GoalSet, ProfileDraft, UserProfile};

const ALL_GOALS: [FitnessGoal; 3] = [
    FitnessGoal::LoseWeight,
    FitnessGoal::GainMuscle,
    FitnessGoal::Maintain,
];

fn guided(workouts_per_week: u8, fitness_level: FitnessLevel) -> CalculationPath {
    CalculationPath::Guided(GuidedActivity {
        workouts_per_week,
        fitness_level,
        weekly_goal_kg: None,
    })
}

fn assert_macros_fit(goals: &GoalSet) {
    // Carbs absorb the rounding of each macro
    let macro_kcal = goals.daily_protein * 4 + goals.daily_carbs * 4 + goals.daily_fats * 9;
    assert!(
        macro_kcal.abs_diff(goals.daily_calories) <= 9,
        "macros {macro_kcal} kcal vs target {} kcal",
        goals.daily_calories
    );
    assert!(goals.protein_and_fat_kcal() <= goals.daily_calories);
}

#[test]
fn test_mifflin_st_jeor_reference_values() {
    let bmr_config = BmrConfig::default();
    let male = calculate_mifflin_st_jeor(&reference_profile(), &bmr_config);
    assert!((male - 1642.5).abs() < 1e-9);

    let female = UserProfile::new(170.0, 70.0, 25, Gender::Female);
    let bmr = calculate_mifflin_st_jeor(&female, &bmr_config);
    assert!((bmr - 1476.5).abs() < 1e-9);
}

#[test]
fn test_simplified_maintain_reference() {
    init_test_logging();
    let goals = default_calculator()
        .compute(&reference_draft(), FitnessGoal::Maintain, &CalculationPath::Simplified)
        .unwrap();

    assert_eq!(goals.daily_calories, 2300);
    assert_eq!(goals.daily_protein, 112);
    assert_eq!(goals.daily_fats, 64);
    assert_eq!(goals.daily_carbs, 319);
    assert_eq!(goals.daily_steps, 10_000);
    assert_eq!(goals.daily_sleep_hours, 8);
    assert_eq!(goals.weekly_workouts, 3);
}

#[test]
fn test_simplified_lose_weight_applies_deficit() {
    let goals = default_calculator()
        .compute(&reference_draft(), FitnessGoal::LoseWeight, &CalculationPath::Simplified)
        .unwrap();

    assert_eq!(goals.daily_calories, 1800);
    assert_eq!(goals.daily_protein, 112);
    assert_eq!(goals.daily_fats, 50);
    assert_eq!(goals.daily_carbs, 226);
}

#[test]
fn test_muscle_gain_uses_higher_protein_on_both_paths() {
    let calculator = default_calculator();
    let draft = reference_draft();

    let simplified = calculator
        .compute(&draft, FitnessGoal::GainMuscle, &CalculationPath::Simplified)
        .unwrap();
    assert_eq!(simplified.daily_calories, 2800);
    assert_eq!(simplified.daily_protein, 154);

    let guided_goals = calculator
        .compute(&draft, FitnessGoal::GainMuscle, &guided(3, FitnessLevel::Beginner))
        .unwrap();
    assert_eq!(guided_goals.daily_protein, 154);
}

#[test]
fn test_guided_path_uses_activity_inputs() {
    let calculator = default_calculator();
    let breakdown = calculator
        .compute_breakdown(
            &reference_draft(),
            FitnessGoal::Maintain,
            &guided(2, FitnessLevel::Intermediate),
        )
        .unwrap();

    assert!(!breakdown.used_fallback);
    assert!((breakdown.activity_multiplier.unwrap() - 1.4).abs() < 1e-9);
    assert!((breakdown.protein_g_per_kg.unwrap() - 1.8).abs() < 1e-9);
    assert_eq!(breakdown.goals.daily_protein, 126);
    assert!(breakdown.goals.daily_calories.abs_diff(2300) <= 1);
    assert_eq!(breakdown.goals.daily_steps, 10_000);
    assert_eq!(breakdown.goals.weekly_workouts, 2);
}

#[test]
fn test_guided_step_tiers_follow_fitness_level() {
    let calculator = default_calculator();
    let draft = reference_draft();
    let steps = |level| {
        calculator
            .compute(&draft, FitnessGoal::Maintain, &guided(3, level))
            .unwrap()
            .daily_steps
    };

    assert_eq!(steps(FitnessLevel::Beginner), 8_000);
    assert_eq!(steps(FitnessLevel::Intermediate), 10_000);
    assert_eq!(steps(FitnessLevel::Advanced), 12_000);
}

#[test]
fn test_guided_weekly_goal_sets_adjustment() {
    let calculator = default_calculator();
    let path = CalculationPath::Guided(GuidedActivity {
        workouts_per_week: 4,
        fitness_level: FitnessLevel::Intermediate,
        weekly_goal_kg: Some(0.5),
    });
    let breakdown = calculator
        .compute_breakdown(&reference_draft(), FitnessGoal::LoseWeight, &path)
        .unwrap();

    // 0.5 kg/week * 7700 kcal/kg / 7 days
    assert!((breakdown.calorie_adjustment.unwrap() + 550.0).abs() < 1e-6);
    assert!((breakdown.tdee.unwrap() - 2628.0).abs() < 1e-6);
    assert_eq!(breakdown.goals.daily_calories, 2078);
}

#[test]
fn test_goal_ordering_for_every_profile() {
    let calculator = default_calculator();
    let profiles = [
        UserProfile::new(150.0, 45.0, 16, Gender::Female),
        UserProfile::new(170.0, 70.0, 25, Gender::Male),
        UserProfile::new(185.0, 110.0, 60, Gender::Other),
        UserProfile::new(200.0, 150.0, 40, Gender::Male),
    ];
    let paths = [
        CalculationPath::Simplified,
        guided(0, FitnessLevel::Beginner),
        guided(7, FitnessLevel::Advanced),
    ];

    for profile in profiles {
        let draft: ProfileDraft = profile.into();
        for path in &paths {
            let calories = |goal| calculator.compute(&draft, goal, path).unwrap().daily_calories;
            let lose = calories(FitnessGoal::LoseWeight);
            let maintain = calories(FitnessGoal::Maintain);
            let gain = calories(FitnessGoal::GainMuscle);
            assert!(lose < maintain, "{profile:?} {path:?}");
            assert!(maintain < gain, "{profile:?} {path:?}");
        }
    }
}

#[test]
fn test_macros_fit_calorie_target() {
    let calculator = default_calculator();
    let draft = reference_draft();
    for goal in ALL_GOALS {
        for path in [CalculationPath::Simplified, guided(5, FitnessLevel::Advanced)] {
            assert_macros_fit(&calculator.compute(&draft, goal, &path).unwrap());
        }
    }
}

#[test]
fn test_protein_capped_for_tiny_calorie_budget() {
    let (protein, carbs, fats) = split_macros(1000, 400.0, 0.25);
    assert_eq!(fats, 28);
    assert_eq!(protein, 187);
    assert_eq!(carbs, 0);
}

#[test]
fn test_calories_increase_with_weight() {
    let calculator = default_calculator();
    let mut previous = 0;
    for weight in [50.0, 60.0, 70.0, 80.0, 90.0] {
        let draft: ProfileDraft = UserProfile::new(175.0, weight, 30, Gender::Male).into();
        let calories = calculator
            .compute(&draft, FitnessGoal::Maintain, &CalculationPath::Simplified)
            .unwrap()
            .daily_calories;
        assert!(calories > previous);
        previous = calories;
    }
}

#[test]
fn test_compute_is_deterministic() {
    let calculator = default_calculator();
    let draft = reference_draft();
    let path = guided(4, FitnessLevel::Intermediate);
    let first = calculator.compute(&draft, FitnessGoal::LoseWeight, &path).unwrap();
    for _ in 0..10 {
        assert_eq!(
            calculator.compute(&draft, FitnessGoal::LoseWeight, &path).unwrap(),
            first
        );
    }
}

#[test]
fn test_incomplete_profile_returns_fallback() {
    let calculator = default_calculator();
    let draft = ProfileDraft {
        height_cm: Some(170.0),
        weight_kg: None,
        age: Some(25),
        gender: Some(Gender::Male),
    };

    let breakdown = calculator
        .compute_breakdown(&draft, FitnessGoal::LoseWeight, &CalculationPath::Simplified)
        .unwrap();
    assert!(breakdown.used_fallback);
    assert!(breakdown.bmr.is_none());

    let goals = breakdown.goals;
    assert_eq!(goals.daily_calories, 2000);
    assert_eq!(goals.daily_protein, 100);
    assert_eq!(goals.daily_fats, 56);
    assert_eq!(goals.daily_carbs, 274);
    assert_eq!(goals.daily_steps, 8000);
    assert_eq!(goals.daily_sleep_hours, 8);
}

#[test]
fn test_fallback_does_not_depend_on_goal() {
    let calculator = default_calculator();
    let empty = ProfileDraft::default();
    let lose = calculator
        .compute(&empty, FitnessGoal::LoseWeight, &CalculationPath::Simplified)
        .unwrap();
    let gain = calculator
        .compute(&empty, FitnessGoal::GainMuscle, &CalculationPath::Simplified)
        .unwrap();
    assert_eq!(lose, gain);
}

#[test]
fn test_invalid_biometrics_are_rejected() {
    let calculator = default_calculator();
    let cases = [
        (UserProfile::new(0.0, 70.0, 25, Gender::Male), "height_cm"),
        (UserProfile::new(-170.0, 70.0, 25, Gender::Male), "height_cm"),
        (UserProfile::new(300.0, 70.0, 25, Gender::Male), "height_cm"),
        (UserProfile::new(170.0, 0.0, 25, Gender::Male), "weight_kg"),
        (UserProfile::new(170.0, f64::NAN, 25, Gender::Male), "weight_kg"),
        (UserProfile::new(170.0, 70.0, 0, Gender::Male), "age"),
        (UserProfile::new(170.0, 70.0, 150, Gender::Male), "age"),
    ];

    for (profile, field) in cases {
        let error = calculator
            .compute(&profile.into(), FitnessGoal::Maintain, &CalculationPath::Simplified)
            .unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidProfile, "{profile:?}");
        assert_eq!(error.resource_id.as_deref(), Some(field));
    }
}

#[test]
fn test_guided_inputs_out_of_range() {
    let calculator = default_calculator();
    let draft = reference_draft();

    let error = calculator
        .compute(&draft, FitnessGoal::Maintain, &guided(8, FitnessLevel::Beginner))
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);

    let too_fast = CalculationPath::Guided(GuidedActivity {
        workouts_per_week: 3,
        fitness_level: FitnessLevel::Beginner,
        weekly_goal_kg: Some(2.0),
    });
    let error = calculator
        .compute(&draft, FitnessGoal::LoseWeight, &too_fast)
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    assert_eq!(error.resource_id.as_deref(), Some("weekly_goal_kg"));
}

#[test]
fn test_low_bmr_profile_follows_formula() {
    let calculator = default_calculator();
    let draft: ProfileDraft = UserProfile::new(155.0, 50.0, 65, Gender::Female).into();

    let breakdown = calculator
        .compute_breakdown(&draft, FitnessGoal::Maintain, &CalculationPath::Simplified)
        .unwrap();
    // 500 + 968.75 - 325 - 161
    assert!((breakdown.bmr.unwrap() - 982.75).abs() < 1e-9);
    assert_eq!(breakdown.goals.daily_calories, 1376);
    assert_eq!(breakdown.goals.daily_protein, 80);
    assert_eq!(breakdown.goals.daily_fats, 38);
    assert_eq!(breakdown.goals.daily_carbs, 179);

    let lose = calculator
        .compute_breakdown(&draft, FitnessGoal::LoseWeight, &CalculationPath::Simplified)
        .unwrap();
    assert!((lose.calorie_adjustment.unwrap() + 500.0).abs() < f64::EPSILON);
    assert_eq!(lose.goals.daily_calories, 876);
    assert_eq!(lose.goals.daily_protein, 80);
    assert_eq!(lose.goals.daily_fats, 24);
    assert_eq!(lose.goals.daily_carbs, 85);
}

#[test]
fn test_guided_deficit_uses_weekly_goal_for_small_profile() {
    let calculator = default_calculator();
    let draft: ProfileDraft = UserProfile::new(150.0, 40.0, 70, Gender::Female).into();
    let path = |weekly_goal_kg| {
        CalculationPath::Guided(GuidedActivity {
            workouts_per_week: 0,
            fitness_level: FitnessLevel::Beginner,
            weekly_goal_kg: Some(weekly_goal_kg),
        })
    };

    // BMR 826.5, TDEE 991.8, deficit 0.5 x 7700 / 7
    let lose = calculator
        .compute_breakdown(&draft, FitnessGoal::LoseWeight, &path(0.5))
        .unwrap();
    assert!((lose.calorie_adjustment.unwrap() + 550.0).abs() < 1e-9);
    assert_eq!(lose.goals.daily_calories, 442);

    // A 1100 kcal deficit stops at zero calories
    let floor = calculator
        .compute_breakdown(&draft, FitnessGoal::LoseWeight, &path(1.0))
        .unwrap();
    assert!((floor.calorie_adjustment.unwrap() + floor.tdee.unwrap()).abs() < 1e-9);
    assert_eq!(floor.goals.daily_calories, 0);
    assert_eq!(floor.goals.daily_protein, 0);
    assert_eq!(floor.goals.daily_carbs, 0);
    assert_eq!(floor.goals.daily_fats, 0);
}

#[test]
fn test_non_positive_bmr_is_rejected() {
    let calculator = default_calculator();
    let draft: ProfileDraft = UserProfile::new(50.0, 5.0, 120, Gender::Female).into();
    let error = calculator
        .compute(&draft, FitnessGoal::Maintain, &CalculationPath::Simplified)
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidProfile);
    assert_eq!(error.resource_id.as_deref(), Some("bmr"));
}
