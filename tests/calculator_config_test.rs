// ABOUTME: Integration tests for calculation configuration variants
// ABOUTME: Verifies formula selection, adjustment policy knobs and config validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrimetrics Contributors

#![doc = "Nutrition configuration variant tests"]

use nutrimetrics::config::nutrition::{
    ActivityFactorsConfig, BmrConfig, BmrFormula, CalorieAdjustmentConfig, MacroDistribution,
    MacroSplitConfig, NutritionConfig,
};
use nutrimetrics::intelligence::nutrition_calculator::compute_assessment;
use nutrimetrics::models::{ActivityLevel, Goal, NutritionInput, Sex};

fn reference_input() -> NutritionInput {
    NutritionInput {
        weight_kg: 70.0,
        height_cm: 175.0,
        age_years: 30,
        sex: Sex::Male,
        activity_level: ActivityLevel::Moderate,
        goal: Goal::Maintain,
    }
}

#[test]
fn test_harris_benedict_differs_from_mifflin() {
    let mifflin = compute_assessment(&reference_input(), &NutritionConfig::default()).unwrap();

    let config = NutritionConfig {
        bmr: BmrConfig {
            formula: BmrFormula::HarrisBenedict,
            ..BmrConfig::default()
        },
        ..NutritionConfig::default()
    };
    let harris = compute_assessment(&reference_input(), &config).unwrap();

    assert_eq!(mifflin.bmr, 1649);
    assert_eq!(harris.bmr, 1702);
    assert!(harris.target_daily_calories > mifflin.target_daily_calories);
    // BMI does not depend on the BMR formula
    assert_eq!(mifflin.bmi, harris.bmi);
}

#[test]
fn test_custom_deficit_policy() {
    let config = NutritionConfig {
        calorie_adjustment: CalorieAdjustmentConfig {
            weight_loss_deficit_kcal: 300.0,
            ..CalorieAdjustmentConfig::default()
        },
        ..NutritionConfig::default()
    };
    let input = NutritionInput {
        goal: Goal::LoseWeight,
        ..reference_input()
    };

    let assessment = compute_assessment(&input, &config).unwrap();
    // Maintenance 2555.5625, custom 300 kcal deficit
    assert_eq!(assessment.target_daily_calories, 2256);
}

#[test]
fn test_custom_macro_table_flows_through() {
    let config = NutritionConfig {
        macro_split: MacroSplitConfig {
            maintain: MacroDistribution::new(30, 45, 25),
            ..MacroSplitConfig::default()
        },
        ..NutritionConfig::default()
    };

    let macros = compute_assessment(&reference_input(), &config)
        .unwrap()
        .macros;
    assert_eq!(macros.protein.percent, 30);
    assert_eq!(macros.carbs.percent, 45);
    assert_eq!(macros.fat.percent, 25);
    assert_eq!(macros.fat.kcal, macros.fat.grams * 9);
}

#[test]
fn test_config_validation_rejects_bad_tables() {
    let config = NutritionConfig {
        macro_split: MacroSplitConfig {
            gain_muscle: MacroDistribution {
                protein_pct: 25,
                carbs_pct: 50,
                fat_pct: 30,
            },
            ..MacroSplitConfig::default()
        },
        ..NutritionConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_config_validation_rejects_non_increasing_factors() {
    let config = NutritionConfig {
        activity_factors: ActivityFactorsConfig {
            very_intense: 1.0,
            ..ActivityFactorsConfig::default()
        },
        ..NutritionConfig::default()
    };
    assert!(config.validate().is_err());
}
