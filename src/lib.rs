// ABOUTME: Main library entry point for the Nutrimetrics nutrition assessment platform
// ABOUTME: Provides the calculation engine and REST API for BMI, BMR, TDEE and macro planning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrimetrics Contributors

#![deny(unsafe_code)]

//! # Nutrimetrics
//!
//! A nutrition assessment service that converts body measurements and goals into
//! a complete daily nutrition plan: body-mass index (BMI), basal metabolic rate
//! (BMR), total daily energy expenditure (TDEE) and a macronutrient breakdown.
//!
//! ## Features
//!
//! - **Evidence-based formulas**: Mifflin-St Jeor BMR (default) with an optional
//!   Harris-Benedict variant, McArdle activity factors
//! - **Goal-aware planning**: weight loss, muscle gain, maintenance and general
//!   health each select their own calorie adjustment and macro split
//! - **Pure calculation core**: no I/O, no ambient state, same input always
//!   produces the same output
//! - **REST API**: a single `POST /api/nutrition/assessment` endpoint with
//!   permissive CORS for web clients
//!
//! ## Example Usage
//!
//! ```rust
//! use nutrimetrics::config::nutrition::NutritionConfig;
//! use nutrimetrics::intelligence::nutrition_calculator::compute_assessment;
//! use nutrimetrics::models::{ActivityLevel, Goal, NutritionInput, Sex};
//!
//! let input = NutritionInput {
//!     weight_kg: 70.0,
//!     height_cm: 175.0,
//!     age_years: 30,
//!     sex: Sex::Male,
//!     activity_level: ActivityLevel::Moderate,
//!     goal: Goal::Maintain,
//! };
//!
//! let assessment = compute_assessment(&input, &NutritionConfig::default())?;
//! assert_eq!(assessment.bmi, 22.9);
//! # Ok::<(), nutrimetrics::errors::AppError>(())
//! ```

// ── Public API ──────────────────────────────────────────────────────────
// These modules are used by the server binary (src/bin/) and integration
// tests (tests/). They must remain `pub` so external consumers can access them.

/// Configuration management: calculation constants and server environment
pub mod config;

/// Unified error handling with `HTTP` status mapping
pub mod errors;

/// Nutrition intelligence: the assessment calculation pipeline
pub mod intelligence;

/// Structured logging configuration
pub mod logging;

/// `HTTP` middleware: CORS and request ID correlation
pub mod middleware;

/// Request and response data structures
pub mod models;

/// `HTTP` route handlers
pub mod routes;
