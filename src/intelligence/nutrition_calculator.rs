// ABOUTME: Nutrition calculation pipeline: validation, BMI, BMR, TDEE and macro allocation
// ABOUTME: Pure functions over validated input; all constants come from NutritionConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrimetrics Contributors

//! Nutrition Calculator Module
//!
//! Implements the assessment pipeline as a strictly linear sequence of pure
//! stages: validate input, compute BMI, compute BMR, scale to maintenance
//! calories, apply the goal adjustment, allocate macros and classify the BMI.
//! No stage loops back and nothing is cached between calls, so identical
//! input always produces identical output.
//!
//! Intermediate values carry full `f64` precision; rounding happens only at
//! the boundary that produces a caller-facing field. This deliberately differs
//! from legacy implementations that rounded BMR before scaling.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting
//!   energy expenditure. *American Journal of Clinical Nutrition*, 51(2).
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - Harris, J.A., & Benedict, F.G. (1918). A biometric study of human basal
//!   metabolism. *PNAS*, 4(12), 370-373.
//!   <https://doi.org/10.1073/pnas.4.12.370>

use crate::config::nutrition::{
    BmrConfig, BmrFormula, CalorieAdjustmentConfig, MacroSplitConfig, NutritionConfig,
};
use crate::errors::{AppError, AppResult};
use crate::models::{
    BmiClassification, Goal, MacroBreakdown, Macronutrient, NutritionAssessment, NutritionInput,
    Sex,
};

/// Energy density of protein in kcal per gram
pub const PROTEIN_KCAL_PER_G: i32 = 4;
/// Energy density of carbohydrates in kcal per gram
pub const CARBS_KCAL_PER_G: i32 = 4;
/// Energy density of fat in kcal per gram
pub const FAT_KCAL_PER_G: i32 = 9;

/// Upper bound for body weight in kilograms
pub const MAX_WEIGHT_KG: f64 = 300.0;
/// Upper bound for height in centimeters
pub const MAX_HEIGHT_CM: f64 = 250.0;
/// Upper bound for age in years
pub const MAX_AGE_YEARS: u32 = 120;

/// Validate raw input against the documented ranges
///
/// Bounds are inclusive at the top: 300 kg, 250 cm and 120 years are all
/// accepted. Errors name the offending field using its wire name so they can
/// be surfaced verbatim to the caller.
///
/// # Errors
///
/// Returns a `ValueOutOfRange` error for the first field that is not finite,
/// not positive, or above its upper bound.
pub fn validate_input(input: &NutritionInput) -> AppResult<()> {
    if !input.weight_kg.is_finite() || input.weight_kg <= 0.0 || input.weight_kg > MAX_WEIGHT_KG {
        return Err(AppError::value_out_of_range(
            "weightKg",
            format!("must be greater than 0 and at most {MAX_WEIGHT_KG} kg"),
        ));
    }
    if !input.height_cm.is_finite() || input.height_cm <= 0.0 || input.height_cm > MAX_HEIGHT_CM {
        return Err(AppError::value_out_of_range(
            "heightCm",
            format!("must be greater than 0 and at most {MAX_HEIGHT_CM} cm"),
        ));
    }
    if input.age_years == 0 || input.age_years > MAX_AGE_YEARS {
        return Err(AppError::value_out_of_range(
            "ageYears",
            format!("must be greater than 0 and at most {MAX_AGE_YEARS} years"),
        ));
    }
    Ok(())
}

/// Calculate body-mass index, rounded to one decimal place
///
/// Formula: BMI = `weight_kg` / (`height_cm` / 100)^2
///
/// Total over validated input: the validator guarantees a nonzero height.
#[must_use]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    round_to_one_decimal(weight_kg / (height_m * height_m))
}

/// Map a BMI value to its WHO category band
///
/// Total over the real numbers; classification uses the rounded, caller-facing
/// BMI so the reported band always matches the reported number.
#[must_use]
pub fn classify_bmi(bmi: f64) -> BmiClassification {
    if bmi < 18.5 {
        BmiClassification::Underweight
    } else if bmi < 25.0 {
        BmiClassification::Normal
    } else if bmi < 30.0 {
        BmiClassification::Overweight
    } else if bmi < 35.0 {
        BmiClassification::ObeseI
    } else if bmi < 40.0 {
        BmiClassification::ObeseII
    } else {
        BmiClassification::ObeseIII
    }
}

/// Calculate Basal Metabolic Rate in kcal/day, unrounded
///
/// The formula family is a configuration choice. Mifflin-St Jeor (default):
///
/// - male: `10*weight_kg + 6.25*height_cm - 5*age + 5`
/// - female: `10*weight_kg + 6.25*height_cm - 5*age - 161`
///
/// Harris-Benedict (1918) uses its original coefficient set and yields
/// figures that differ by up to several hundred kcal/day for the same inputs.
#[must_use]
pub fn calculate_bmr(input: &NutritionInput, config: &BmrConfig) -> f64 {
    let age = f64::from(input.age_years);
    match config.formula {
        BmrFormula::MifflinStJeor => {
            let sex_constant = match input.sex {
                Sex::Male => config.msj_male_constant,
                Sex::Female => config.msj_female_constant,
            };
            config.msj_weight_coef * input.weight_kg
                + config.msj_height_coef * input.height_cm
                + config.msj_age_coef * age
                + sex_constant
        }
        BmrFormula::HarrisBenedict => {
            let [base, weight_coef, height_coef, age_coef] = match input.sex {
                Sex::Male => config.hb_male,
                Sex::Female => config.hb_female,
            };
            base + weight_coef * input.weight_kg + height_coef * input.height_cm + age_coef * age
        }
    }
}

/// Scale BMR to maintenance calories (TDEE), unrounded
///
/// Formula: TDEE = BMR x activity factor
#[must_use]
pub fn maintenance_calories(bmr: f64, input: &NutritionInput, config: &NutritionConfig) -> f64 {
    bmr * config.activity_factors.factor_for(input.activity_level)
}

/// Apply the goal adjustment to maintenance calories, unrounded
///
/// Weight loss subtracts the configured deficit, unless maintenance is below
/// the low-maintenance threshold, in which case the proportional factor is
/// applied instead. Muscle gain adds the configured surplus. Maintenance and
/// general health leave the figure unchanged.
#[must_use]
pub fn target_calories(maintenance: f64, goal: Goal, config: &CalorieAdjustmentConfig) -> f64 {
    match goal {
        Goal::LoseWeight => {
            if maintenance < config.low_maintenance_threshold_kcal {
                maintenance * config.low_maintenance_factor
            } else {
                maintenance - config.weight_loss_deficit_kcal
            }
        }
        Goal::GainMuscle => maintenance + config.muscle_gain_surplus_kcal,
        Goal::Maintain | Goal::GeneralHealth => maintenance,
    }
}

/// Split the rounded calorie target into macronutrient grams
///
/// Grams: `percent * target / density`, rounded to the nearest gram for each
/// macro independently. Per-macro kcal is then recomputed from the rounded
/// grams, never re-derived from the percentage, so `kcal == grams * density`
/// holds exactly after rounding.
#[must_use]
pub fn allocate_macros(
    target_daily_calories: i32,
    goal: Goal,
    config: &MacroSplitConfig,
) -> MacroBreakdown {
    let (protein_pct, carbs_pct, fat_pct) = config.distribution_for(goal).as_tuple();

    MacroBreakdown {
        protein: macro_line(target_daily_calories, protein_pct, PROTEIN_KCAL_PER_G),
        carbs: macro_line(target_daily_calories, carbs_pct, CARBS_KCAL_PER_G),
        fat: macro_line(target_daily_calories, fat_pct, FAT_KCAL_PER_G),
    }
}

fn macro_line(target: i32, percent: u8, kcal_per_g: i32) -> Macronutrient {
    let grams_raw = f64::from(target) * f64::from(percent) / 100.0 / f64::from(kcal_per_g);
    let grams = round_kcal(grams_raw);
    Macronutrient {
        grams,
        kcal: grams * kcal_per_g,
        percent,
    }
}

/// Compute a complete nutrition assessment
///
/// This is the main entry point combining validation, BMI, BMR, TDEE and
/// macronutrient allocation. Stateless and side-effect free; callers that
/// want history are responsible for timestamping and storing snapshots.
///
/// # Errors
///
/// Returns a `ValueOutOfRange` error naming the first invalid input field.
pub fn compute_assessment(
    input: &NutritionInput,
    config: &NutritionConfig,
) -> AppResult<NutritionAssessment> {
    validate_input(input)?;

    let bmi = calculate_bmi(input.weight_kg, input.height_cm);
    let bmi_classification = classify_bmi(bmi);

    let bmr = calculate_bmr(input, &config.bmr);
    let maintenance = maintenance_calories(bmr, input, config);
    let target = round_kcal(target_calories(maintenance, input.goal, &config.calorie_adjustment));

    let macros = allocate_macros(target, input.goal, &config.macro_split);

    Ok(NutritionAssessment {
        bmi,
        bmi_classification,
        bmr: round_kcal(bmr),
        target_daily_calories: target,
        macros,
    })
}

/// Round half-up to one decimal place
fn round_to_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[allow(clippy::cast_possible_truncation)] // values are bounded by validated input ranges
fn round_kcal(value: f64) -> i32 {
    value.round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActivityLevel;

    fn male_input() -> NutritionInput {
        NutritionInput {
            weight_kg: 70.0,
            height_cm: 175.0,
            age_years: 30,
            sex: Sex::Male,
            activity_level: ActivityLevel::Moderate,
            goal: Goal::Maintain,
        }
    }

    fn female_input() -> NutritionInput {
        NutritionInput {
            weight_kg: 60.0,
            height_cm: 160.0,
            age_years: 25,
            sex: Sex::Female,
            activity_level: ActivityLevel::Sedentary,
            goal: Goal::LoseWeight,
        }
    }

    #[test]
    fn test_bmi_male_scenario() {
        assert_eq!(calculate_bmi(70.0, 175.0), 22.9);
    }

    #[test]
    fn test_bmi_unit_consistent_scaling() {
        // Doubling weight and scaling height by sqrt(2) leaves BMI unchanged
        let base = calculate_bmi(70.0, 175.0);
        let scaled = calculate_bmi(140.0, 175.0 * std::f64::consts::SQRT_2);
        assert!((base - scaled).abs() <= 0.1);
    }

    #[test]
    fn test_classification_bands() {
        assert_eq!(classify_bmi(17.0), BmiClassification::Underweight);
        assert_eq!(classify_bmi(18.5), BmiClassification::Normal);
        assert_eq!(classify_bmi(24.9), BmiClassification::Normal);
        assert_eq!(classify_bmi(25.0), BmiClassification::Overweight);
        assert_eq!(classify_bmi(29.9), BmiClassification::Overweight);
        assert_eq!(classify_bmi(30.0), BmiClassification::ObeseI);
        assert_eq!(classify_bmi(35.0), BmiClassification::ObeseII);
        assert_eq!(classify_bmi(40.0), BmiClassification::ObeseIII);
    }

    #[test]
    fn test_mifflin_st_jeor_male() {
        let bmr = calculate_bmr(&male_input(), &BmrConfig::default());
        // 10*70 + 6.25*175 - 5*30 + 5
        assert!((bmr - 1648.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_mifflin_st_jeor_female() {
        let bmr = calculate_bmr(&female_input(), &BmrConfig::default());
        // 10*60 + 6.25*160 - 5*25 - 161
        assert!((bmr - 1314.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_harris_benedict_variant() {
        let config = BmrConfig {
            formula: BmrFormula::HarrisBenedict,
            ..BmrConfig::default()
        };
        let bmr = calculate_bmr(&male_input(), &config);
        // 66.5 + 13.75*70 + 5.003*175 - 6.75*30
        assert!((bmr - 1702.025).abs() < 1e-9);
    }

    #[test]
    fn test_full_assessment_male_maintenance() {
        let assessment =
            compute_assessment(&male_input(), &NutritionConfig::default()).unwrap();

        assert_eq!(assessment.bmi, 22.9);
        assert_eq!(assessment.bmi_classification, BmiClassification::Normal);
        assert_eq!(assessment.bmr, 1649);
        // Full precision carried through: 1648.75 * 1.55 = 2555.5625
        assert_eq!(assessment.target_daily_calories, 2556);

        // Maintenance split 20/50/30
        assert_eq!(assessment.macros.protein.grams, 128);
        assert_eq!(assessment.macros.protein.kcal, 512);
        assert_eq!(assessment.macros.carbs.grams, 320);
        assert_eq!(assessment.macros.carbs.kcal, 1280);
        assert_eq!(assessment.macros.fat.grams, 85);
        assert_eq!(assessment.macros.fat.kcal, 765);
    }

    #[test]
    fn test_full_assessment_female_weight_loss_low_maintenance() {
        let assessment =
            compute_assessment(&female_input(), &NutritionConfig::default()).unwrap();

        assert_eq!(assessment.bmr, 1314);
        // 1314 * 1.2 = 1576.8 < 2000, so the proportional cut applies:
        // 1576.8 * 0.85 = 1340.28
        assert_eq!(assessment.target_daily_calories, 1340);
        assert_eq!(assessment.macros.protein.percent, 30);
    }

    #[test]
    fn test_weight_loss_deficit_above_threshold() {
        let input = NutritionInput {
            goal: Goal::LoseWeight,
            ..male_input()
        };
        let assessment = compute_assessment(&input, &NutritionConfig::default()).unwrap();
        // Maintenance 2555.5625 >= 2000, flat 500 kcal deficit
        assert_eq!(assessment.target_daily_calories, 2056);
    }

    #[test]
    fn test_muscle_gain_surplus() {
        let input = NutritionInput {
            goal: Goal::GainMuscle,
            ..male_input()
        };
        let assessment = compute_assessment(&input, &NutritionConfig::default()).unwrap();
        assert_eq!(assessment.target_daily_calories, 2556 + 300);
    }

    #[test]
    fn test_general_health_matches_maintenance_calories() {
        let maintain = compute_assessment(&male_input(), &NutritionConfig::default()).unwrap();
        let general = compute_assessment(
            &NutritionInput {
                goal: Goal::GeneralHealth,
                ..male_input()
            },
            &NutritionConfig::default(),
        )
        .unwrap();
        assert_eq!(
            maintain.target_daily_calories,
            general.target_daily_calories
        );
    }

    #[test]
    fn test_macro_percents_sum_to_100_for_every_goal() {
        let config = NutritionConfig::default();
        for goal in Goal::ALL {
            let input = NutritionInput {
                goal,
                ..male_input()
            };
            let macros = compute_assessment(&input, &config).unwrap().macros;
            let sum = u16::from(macros.protein.percent)
                + u16::from(macros.carbs.percent)
                + u16::from(macros.fat.percent);
            assert_eq!(sum, 100, "{goal:?}");
        }
    }

    #[test]
    fn test_macro_kcal_exactly_grams_times_density() {
        let config = NutritionConfig::default();
        for goal in Goal::ALL {
            let input = NutritionInput {
                goal,
                ..female_input()
            };
            let macros = compute_assessment(&input, &config).unwrap().macros;
            assert_eq!(macros.protein.kcal, macros.protein.grams * PROTEIN_KCAL_PER_G);
            assert_eq!(macros.carbs.kcal, macros.carbs.grams * CARBS_KCAL_PER_G);
            assert_eq!(macros.fat.kcal, macros.fat.grams * FAT_KCAL_PER_G);
        }
    }

    #[test]
    fn test_target_monotonic_in_activity_for_maintenance() {
        let config = NutritionConfig::default();
        let mut previous = 0;
        for level in ActivityLevel::ALL {
            let input = NutritionInput {
                activity_level: level,
                goal: Goal::Maintain,
                ..male_input()
            };
            let target = compute_assessment(&input, &config)
                .unwrap()
                .target_daily_calories;
            assert!(target > previous, "{level:?} should raise the target");
            previous = target;
        }
    }

    #[test]
    fn test_idempotence() {
        let config = NutritionConfig::default();
        let first = compute_assessment(&male_input(), &config).unwrap();
        let second = compute_assessment(&male_input(), &config).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_upper_bounds_inclusive() {
        let input = NutritionInput {
            weight_kg: 300.0,
            height_cm: 250.0,
            age_years: 120,
            ..male_input()
        };
        assert!(compute_assessment(&input, &NutritionConfig::default()).is_ok());
    }

    #[test]
    fn test_weight_above_bound_rejected() {
        let input = NutritionInput {
            weight_kg: 301.0,
            ..male_input()
        };
        let err = compute_assessment(&input, &NutritionConfig::default()).unwrap_err();
        assert!(err.message.contains("weightKg"));
        assert_eq!(err.context.field.as_deref(), Some("weightKg"));
    }

    #[test]
    fn test_zero_height_rejected() {
        let input = NutritionInput {
            height_cm: 0.0,
            ..male_input()
        };
        let err = compute_assessment(&input, &NutritionConfig::default()).unwrap_err();
        assert!(err.message.contains("heightCm"));
    }

    #[test]
    fn test_nan_weight_rejected() {
        let input = NutritionInput {
            weight_kg: f64::NAN,
            ..male_input()
        };
        assert!(validate_input(&input).is_err());
    }

    #[test]
    fn test_zero_age_rejected() {
        let input = NutritionInput {
            age_years: 0,
            ..male_input()
        };
        let err = validate_input(&input).unwrap_err();
        assert!(err.message.contains("ageYears"));
    }
}
