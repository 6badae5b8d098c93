// ABOUTME: Criterion benchmarks for goal calculation and weight suggestions
// ABOUTME: Measures both calculation paths, profile batches and set parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the client calculators.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fittrack::intelligence::config::GoalCalculatorConfig;
use fittrack::intelligence::{suggest_weight, CalculationPath, GoalCalculator, GuidedActivity};
use fittrack::models::{FitnessGoal, FitnessLevel, Gender, ProfileDraft, UserProfile};

/// Deterministic spread of plausible profiles
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn generate_profiles(count: usize) -> Vec<ProfileDraft> {
    (0..count)
        .map(|index| {
            let gender = match index % 3 {
                0 => Gender::Male,
                1 => Gender::Female,
                _ => Gender::Other,
            };
            let height = 150.0 + ((index * 7) % 50) as f64;
            let weight = 45.0 + ((index * 13) % 80) as f64;
            let age = 18 + ((index * 11) % 60) as u32;
            UserProfile::new(height, weight, age, gender).into()
        })
        .collect()
}

fn guided_path() -> CalculationPath {
    CalculationPath::Guided(GuidedActivity {
        workouts_per_week: 4,
        fitness_level: FitnessLevel::Intermediate,
        weekly_goal_kg: Some(0.5),
    })
}

fn bench_single_profile(c: &mut Criterion) {
    let mut group = c.benchmark_group("goal_calculation");
    let calculator = GoalCalculator::new(GoalCalculatorConfig::default());
    let draft: ProfileDraft = UserProfile::new(170.0, 70.0, 25, Gender::Male).into();

    group.bench_function("simplified", |b| {
        b.iter(|| {
            calculator.compute(
                black_box(&draft),
                black_box(FitnessGoal::LoseWeight),
                black_box(&CalculationPath::Simplified),
            )
        });
    });

    let path = guided_path();
    group.bench_function("guided_breakdown", |b| {
        b.iter(|| {
            calculator.compute_breakdown(
                black_box(&draft),
                black_box(FitnessGoal::GainMuscle),
                black_box(&path),
            )
        });
    });

    group.bench_function("fallback", |b| {
        let empty = ProfileDraft::default();
        b.iter(|| {
            calculator.compute(
                black_box(&empty),
                black_box(FitnessGoal::Maintain),
                black_box(&CalculationPath::Simplified),
            )
        });
    });

    group.finish();
}

#[allow(clippy::cast_possible_truncation)]
fn bench_profile_batches(c: &mut Criterion) {
    let mut group = c.benchmark_group("goal_batches");
    let calculator = GoalCalculator::new(GoalCalculatorConfig::default());
    let path = guided_path();

    for count in [10_usize, 100, 1000] {
        let profiles = generate_profiles(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("compute", count),
            &profiles,
            |b, profiles| {
                b.iter(|| {
                    profiles
                        .iter()
                        .filter_map(|draft| {
                            calculator
                                .compute(draft, FitnessGoal::Maintain, black_box(&path))
                                .ok()
                        })
                        .map(|goals| u64::from(goals.daily_calories))
                        .sum::<u64>()
                });
            },
        );
    }

    group.finish();
}

fn bench_weight_suggestion(c: &mut Criterion) {
    let mut group = c.benchmark_group("weight_suggestion");
    for input in ["60kg/10", "135lbs/8-10", "BW/12", "not a set"] {
        group.bench_with_input(BenchmarkId::new("suggest", input), &input, |b, input| {
            b.iter(|| suggest_weight(black_box(input), black_box(85)));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_single_profile,
    bench_profile_batches,
    bench_weight_suggestion,
);
criterion_main!(benches);
