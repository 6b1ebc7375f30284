// ABOUTME: Data structures for nutrition assessment requests and results
// ABOUTME: Wire-compatible serde models with localized field aliases for existing callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrimetrics Contributors

//! Request and response models for the nutrition assessment pipeline
//!
//! Canonical wire names are camelCase. The Portuguese aliases (`peso`, `altura`,
//! `idade`, `sexo`, `atividade`, `objetivo`) are accepted on input for
//! compatibility with the mobile clients that predate this service.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Biological sex, selects the BMR formula branch
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// Male (higher BMR constant)
    #[serde(alias = "M", alias = "masculino")]
    Male,
    /// Female (lower BMR constant)
    #[serde(alias = "F", alias = "feminino")]
    Female,
}

/// Physical activity level, selects the TDEE multiplier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub enum ActivityLevel {
    /// Little or no exercise
    #[serde(alias = "sedentarismo", alias = "sedentario")]
    Sedentary,
    /// Light exercise 1-3 days/week
    #[serde(alias = "leve")]
    Light,
    /// Moderate exercise 3-5 days/week
    #[serde(alias = "moderada", alias = "moderado")]
    Moderate,
    /// Intense exercise 6-7 days/week
    #[serde(alias = "alta", alias = "alto")]
    Intense,
    /// Hard training twice a day
    #[serde(alias = "muito_alta")]
    VeryIntense,
}

impl ActivityLevel {
    /// All levels in ascending order of energy expenditure
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::Light,
        Self::Moderate,
        Self::Intense,
        Self::VeryIntense,
    ];
}

/// Nutrition goal, selects the calorie adjustment policy and macro split
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Goal {
    /// Caloric deficit for weight loss
    #[serde(alias = "perda_peso")]
    LoseWeight,
    /// Caloric surplus for muscle gain
    #[serde(alias = "ganho_massa")]
    GainMuscle,
    /// Caloric balance (default when the caller omits the goal)
    #[default]
    #[serde(alias = "manutencao")]
    Maintain,
    /// Balanced plan without a body-composition target
    #[serde(alias = "saude_geral")]
    GeneralHealth,
}

impl Goal {
    /// All goals, used for table-coverage validation and tests
    pub const ALL: [Self; 4] = [
        Self::LoseWeight,
        Self::GainMuscle,
        Self::Maintain,
        Self::GeneralHealth,
    ];
}

/// BMI category bands (WHO classification)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum BmiClassification {
    /// BMI below 18.5
    Underweight,
    /// BMI 18.5 to 24.9
    Normal,
    /// BMI 25 to 29.9
    Overweight,
    /// BMI 30 to 34.9
    ObeseI,
    /// BMI 35 to 39.9
    ObeseII,
    /// BMI 40 and above
    ObeseIII,
}

impl fmt::Display for BmiClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Underweight => "underweight",
            Self::Normal => "normal",
            Self::Overweight => "overweight",
            Self::ObeseI => "obeseI",
            Self::ObeseII => "obeseII",
            Self::ObeseIII => "obeseIII",
        };
        write!(f, "{label}")
    }
}

/// Raw user input for a nutrition assessment
///
/// Validated by the calculation pipeline before use; see the range rules on
/// each field. An assessment is computed on demand from a snapshot of these
/// values and carries no identity of its own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NutritionInput {
    /// Body weight in kilograms, must be > 0 and <= 300
    #[serde(alias = "peso", alias = "peso_kg")]
    pub weight_kg: f64,
    /// Height in centimeters, must be > 0 and <= 250
    #[serde(alias = "altura", alias = "altura_cm")]
    pub height_cm: f64,
    /// Age in whole years, must be > 0 and <= 120
    #[serde(alias = "idade")]
    pub age_years: u32,
    /// Biological sex for the BMR formula
    #[serde(alias = "sexo")]
    pub sex: Sex,
    /// Activity level for the TDEE multiplier
    #[serde(alias = "atividade", alias = "atividade_fisica")]
    pub activity_level: ActivityLevel,
    /// Nutrition goal, defaults to maintenance when omitted
    #[serde(default, alias = "objetivo")]
    pub goal: Goal,
}

/// One macronutrient line of the daily plan
///
/// Invariant: `kcal == grams * energy_density` exactly, where the density is
/// 4 kcal/g for protein and carbs and 9 kcal/g for fat.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Macronutrient {
    /// Daily grams, rounded to the nearest gram
    pub grams: i32,
    /// Calories contributed, recomputed from rounded grams
    pub kcal: i32,
    /// Share of target calories this macro was allocated from
    pub percent: u8,
}

/// Macronutrient breakdown of the daily calorie target
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroBreakdown {
    pub protein: Macronutrient,
    pub carbs: Macronutrient,
    pub fat: Macronutrient,
}

/// Complete nutrition assessment result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NutritionAssessment {
    /// Body-mass index, rounded to one decimal
    pub bmi: f64,
    /// BMI category band
    pub bmi_classification: BmiClassification,
    /// Basal metabolic rate in kcal/day, rounded
    pub bmr: i32,
    /// Daily calorie target in kcal/day, always derived from BMR
    pub target_daily_calories: i32,
    /// Macro split of the calorie target
    pub macros: MacroBreakdown,
}
