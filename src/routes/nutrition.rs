// ABOUTME: Nutrition assessment route handler exposing the calculation pipeline over HTTP
// ABOUTME: POST /api/nutrition/assessment with the wire-compatible request/response contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrimetrics Contributors

//! Nutrition assessment endpoint
//!
//! - `POST /api/nutrition/assessment` with a JSON [`NutritionInput`] body
//! - 200 with a [`NutritionAssessment`] on success
//! - 400 with `{ "error": string }` naming the first invalid field
//! - 500 with `{ "error": string }` on unexpected internal failure

use crate::config::nutrition::NutritionConfig;
use crate::errors::AppError;
use crate::intelligence::nutrition_calculator;
use crate::models::{NutritionAssessment, NutritionInput};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use std::sync::Arc;
use tracing::{debug, info};

/// Nutrition routes implementation
pub struct NutritionRoutes;

impl NutritionRoutes {
    /// Create the assessment routes with the calculation configuration
    #[must_use]
    pub fn routes(config: Arc<NutritionConfig>) -> Router {
        Router::new()
            .route("/api/nutrition/assessment", post(assessment_handler))
            .with_state(config)
    }
}

/// Compute a nutrition assessment from the request body
///
/// Body deserialization failures (malformed JSON, missing fields, wrong
/// types, unknown enum values) surface as 400 responses whose message names
/// the offending field where serde can identify it; range violations are
/// caught by the pipeline's own validator.
async fn assessment_handler(
    State(config): State<Arc<NutritionConfig>>,
    body: Result<Json<NutritionInput>, JsonRejection>,
) -> Result<Json<NutritionAssessment>, AppError> {
    let Json(input) = body.map_err(|rejection| {
        debug!("assessment request body rejected: {rejection}");
        AppError::invalid_format(rejection.body_text())
    })?;

    let assessment = nutrition_calculator::compute_assessment(&input, &config)?;

    info!(
        bmi = assessment.bmi,
        bmr = assessment.bmr,
        target_kcal = assessment.target_daily_calories,
        goal = ?input.goal,
        "nutrition assessment computed"
    );

    Ok(Json(assessment))
}
