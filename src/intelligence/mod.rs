// ABOUTME: Nutrition intelligence module root housing the assessment calculation pipeline
// ABOUTME: Re-exports the calculator entry point and its stage functions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrimetrics Contributors

//! Nutrition intelligence
//!
//! The calculation pipeline that turns validated body measurements into a
//! complete daily nutrition assessment.

/// BMI, BMR, TDEE and macronutrient calculation pipeline
pub mod nutrition_calculator;

pub use nutrition_calculator::compute_assessment;
