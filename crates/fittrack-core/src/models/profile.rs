// ABOUTME: Biometric profile models captured during onboarding
// ABOUTME: Gender, FitnessGoal, FitnessLevel, UserProfile and the partially filled ProfileDraft
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gender used to select the BMR constant
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
    /// Other or undisclosed; uses the female constant
    Other,
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            other => Err(AppError::invalid_input(format!(
                "Unknown gender '{other}' (expected male, female or other)"
            ))
            .with_resource_id("gender")),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Fitness goal chosen during onboarding
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    /// Caloric deficit
    LoseWeight,
    /// Caloric surplus with higher protein
    GainMuscle,
    /// Caloric balance
    Maintain,
}

impl FromStr for FitnessGoal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "lose_weight" | "lose" => Ok(Self::LoseWeight),
            "gain_muscle" | "gain" => Ok(Self::GainMuscle),
            "maintain" => Ok(Self::Maintain),
            other => Err(AppError::invalid_input(format!(
                "Unknown goal '{other}' (expected lose_weight, gain_muscle or maintain)"
            ))
            .with_resource_id("goal")),
        }
    }
}

impl fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LoseWeight => write!(f, "lose_weight"),
            Self::GainMuscle => write!(f, "gain_muscle"),
            Self::Maintain => write!(f, "maintain"),
        }
    }
}

/// Self-reported fitness level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum FitnessLevel {
    /// New to regular training
    #[default]
    Beginner,
    /// Trains regularly
    Intermediate,
    /// Trains hard most days
    Advanced,
}

impl FromStr for FitnessLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(AppError::invalid_input(format!(
                "Unknown fitness level '{other}' (expected beginner, intermediate or advanced)"
            ))
            .with_resource_id("fitness_level")),
        }
    }
}

/// Complete biometric profile
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// Height in centimeters
    pub height_cm: f64,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Age in years
    pub age: u32,
    /// Gender for the BMR constant
    pub gender: Gender,
}

impl UserProfile {
    /// Build a profile
    #[must_use]
    pub const fn new(height_cm: f64, weight_kg: f64, age: u32, gender: Gender) -> Self {
        Self {
            height_cm,
            weight_kg,
            age,
            gender,
        }
    }
}

/// Partially filled profile as entered on the onboarding form
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct ProfileDraft {
    /// Height in centimeters
    pub height_cm: Option<f64>,
    /// Body weight in kilograms
    pub weight_kg: Option<f64>,
    /// Age in years
    pub age: Option<u32>,
    /// Gender
    pub gender: Option<Gender>,
}

impl ProfileDraft {
    /// Names of the fields still missing, in form order
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.height_cm.is_none() {
            missing.push("height_cm");
        }
        if self.weight_kg.is_none() {
            missing.push("weight_kg");
        }
        if self.age.is_none() {
            missing.push("age");
        }
        if self.gender.is_none() {
            missing.push("gender");
        }
        missing
    }

    /// The complete profile, if every field has been supplied
    #[must_use]
    pub fn complete(&self) -> Option<UserProfile> {
        Some(UserProfile {
            height_cm: self.height_cm?,
            weight_kg: self.weight_kg?,
            age: self.age?,
            gender: self.gender?,
        })
    }
}

impl From<UserProfile> for ProfileDraft {
    fn from(profile: UserProfile) -> Self {
        Self {
            height_cm: Some(profile.height_cm),
            weight_kg: Some(profile.weight_kg),
            age: Some(profile.age),
            gender: Some(profile.gender),
        }
    }
}
