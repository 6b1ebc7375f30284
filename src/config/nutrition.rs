// ABOUTME: Nutrition calculation configuration: BMR formulas, activity factors and macro tables
// ABOUTME: Single source of truth for every constant the assessment pipeline consumes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrimetrics Contributors

//! Nutrition Calculation Configuration
//!
//! Consolidates the constants that were previously duplicated across call
//! sites into one validated structure. Variant behavior (BMR formula family,
//! weight-loss deficit policy) is an explicit configuration choice here, not
//! a separate code path.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - BMR (variant): Harris & Benedict (1918) DOI: 10.1073/pnas.4.12.370
//! - Activity factors: `McArdle` et al. (2010) - Exercise Physiology

use crate::errors::{AppError, AppResult};
use crate::models::{ActivityLevel, Goal};
use serde::{Deserialize, Serialize};

/// Nutrition calculation configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) calculation settings
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Goal-dependent calorie adjustment policy
    pub calorie_adjustment: CalorieAdjustmentConfig,
    /// Goal-dependent macronutrient percentage tables
    pub macro_split: MacroSplitConfig,
}

impl NutritionConfig {
    /// Validate every sub-configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when a factor is non-positive or a macro table
    /// does not sum to exactly 100.
    pub fn validate(&self) -> AppResult<()> {
        self.activity_factors.validate()?;
        self.calorie_adjustment.validate()?;
        self.macro_split.validate()?;
        Ok(())
    }
}

/// BMR formula family selection
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum BmrFormula {
    /// Mifflin-St Jeor (1990), the canonical default
    #[default]
    MifflinStJeor,
    /// Harris-Benedict (1918 original coefficients)
    ///
    /// Differs from Mifflin-St Jeor by up to several hundred kcal/day for the
    /// same inputs; deployments that pick it must document the choice to
    /// their callers.
    HarrisBenedict,
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for
/// resting energy expenditure. American Journal of Clinical Nutrition, 51(2).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Which formula family to apply
    pub formula: BmrFormula,
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
    /// Harris-Benedict male coefficients: base, weight, height, age
    pub hb_male: [f64; 4],
    /// Harris-Benedict female coefficients: base, weight, height, age
    pub hb_female: [f64; 4],
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            formula: BmrFormula::MifflinStJeor,
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
            hb_male: [66.5, 13.75, 5.003, -6.75],
            hb_female: [655.1, 9.563, 1.850, -4.676],
        }
    }
}

/// Activity factor multipliers for TDEE calculation
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Light exercise (1-3 days/week): 1.375
    pub light: f64,
    /// Moderate exercise (3-5 days/week): 1.55
    pub moderate: f64,
    /// Intense exercise (6-7 days/week): 1.725
    pub intense: f64,
    /// Hard training twice a day: 1.9
    pub very_intense: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            intense: 1.725,
            very_intense: 1.9,
        }
    }
}

impl ActivityFactorsConfig {
    /// Look up the multiplier for an activity level
    #[must_use]
    pub const fn factor_for(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::Light => self.light,
            ActivityLevel::Moderate => self.moderate,
            ActivityLevel::Intense => self.intense,
            ActivityLevel::VeryIntense => self.very_intense,
        }
    }

    /// Validate that factors are positive and strictly increasing
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when a factor is non-positive or the sequence
    /// is not strictly increasing with activity.
    pub fn validate(&self) -> AppResult<()> {
        let factors = [
            self.sedentary,
            self.light,
            self.moderate,
            self.intense,
            self.very_intense,
        ];

        for pair in factors.windows(2) {
            if pair[0] <= 0.0 || pair[0] >= pair[1] {
                return Err(AppError::config_invalid(
                    "activity factors must be positive and strictly increasing",
                ));
            }
        }

        Ok(())
    }
}

/// Goal-dependent calorie adjustment policy
///
/// Weight loss subtracts a fixed deficit, except when maintenance calories
/// fall below the low-maintenance threshold: a proportional reduction is used
/// instead so small maintenance figures are not pushed to unsafe targets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieAdjustmentConfig {
    /// Weight-loss deficit in kcal/day: 500
    pub weight_loss_deficit_kcal: f64,
    /// Maintenance threshold below which the proportional cut applies: 2000
    pub low_maintenance_threshold_kcal: f64,
    /// Proportional factor applied below the threshold: 0.85
    pub low_maintenance_factor: f64,
    /// Muscle-gain surplus in kcal/day: 300
    pub muscle_gain_surplus_kcal: f64,
}

impl Default for CalorieAdjustmentConfig {
    fn default() -> Self {
        Self {
            weight_loss_deficit_kcal: 500.0,
            low_maintenance_threshold_kcal: 2000.0,
            low_maintenance_factor: 0.85,
            muscle_gain_surplus_kcal: 300.0,
        }
    }
}

impl CalorieAdjustmentConfig {
    /// Validate adjustment bounds
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when the proportional factor is outside (0, 1]
    /// or an adjustment is negative.
    pub fn validate(&self) -> AppResult<()> {
        if self.low_maintenance_factor <= 0.0 || self.low_maintenance_factor > 1.0 {
            return Err(AppError::config_invalid(
                "low maintenance factor must be within (0, 1]",
            ));
        }
        if self.weight_loss_deficit_kcal < 0.0 || self.muscle_gain_surplus_kcal < 0.0 {
            return Err(AppError::config_invalid(
                "calorie adjustments must be non-negative",
            ));
        }
        Ok(())
    }
}

/// Macro distribution for a single goal (protein%, carbs%, fat%)
///
/// All percentages must sum to 100.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MacroDistribution {
    /// Protein percentage (0-100)
    pub protein_pct: u8,
    /// Carbohydrate percentage (0-100)
    pub carbs_pct: u8,
    /// Fat percentage (0-100)
    pub fat_pct: u8,
}

impl MacroDistribution {
    /// Create a new macro distribution
    ///
    /// # Panics
    ///
    /// Panics in debug mode if percentages don't sum to 100
    #[must_use]
    pub const fn new(protein_pct: u8, carbs_pct: u8, fat_pct: u8) -> Self {
        debug_assert!(
            protein_pct
                .saturating_add(carbs_pct)
                .saturating_add(fat_pct)
                == 100,
            "Macro percentages must sum to 100"
        );
        Self {
            protein_pct,
            carbs_pct,
            fat_pct,
        }
    }

    /// Get as a tuple (protein, carbs, fat)
    #[must_use]
    pub const fn as_tuple(&self) -> (u8, u8, u8) {
        (self.protein_pct, self.carbs_pct, self.fat_pct)
    }
}

/// Goal-dependent macronutrient percentage tables
///
/// Defaults are the consolidated canonical tables: higher protein and fat for
/// weight loss, carb-forward for muscle gain, balanced for maintenance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroSplitConfig {
    /// Weight loss: 30% protein / 35% carbs / 35% fat
    pub lose_weight: MacroDistribution,
    /// Muscle gain: 25% protein / 50% carbs / 25% fat
    pub gain_muscle: MacroDistribution,
    /// Maintenance: 20% protein / 50% carbs / 30% fat
    pub maintain: MacroDistribution,
    /// General health: same balanced split as maintenance
    pub general_health: MacroDistribution,
}

impl Default for MacroSplitConfig {
    fn default() -> Self {
        Self {
            lose_weight: MacroDistribution::new(30, 35, 35),
            gain_muscle: MacroDistribution::new(25, 50, 25),
            maintain: MacroDistribution::new(20, 50, 30),
            general_health: MacroDistribution::new(20, 50, 30),
        }
    }
}

impl MacroSplitConfig {
    /// Get the macro distribution for a goal
    #[must_use]
    pub const fn distribution_for(&self, goal: Goal) -> MacroDistribution {
        match goal {
            Goal::LoseWeight => self.lose_weight,
            Goal::GainMuscle => self.gain_muscle,
            Goal::Maintain => self.maintain,
            Goal::GeneralHealth => self.general_health,
        }
    }

    /// Validate that every goal's percentages sum to exactly 100
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` naming the first goal whose table does not sum
    /// to 100.
    pub fn validate(&self) -> AppResult<()> {
        let tables = [
            ("lose_weight", &self.lose_weight),
            ("gain_muscle", &self.gain_muscle),
            ("maintain", &self.maintain),
            ("general_health", &self.general_health),
        ];

        for (name, table) in tables {
            let sum = table
                .protein_pct
                .saturating_add(table.carbs_pct)
                .saturating_add(table.fat_pct);
            if sum != 100 {
                return Err(AppError::config_invalid(format!(
                    "{name} macro percentages must sum to 100, got {sum}"
                )));
            }
        }

        Ok(())
    }
}
