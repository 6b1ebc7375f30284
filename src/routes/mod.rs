// ABOUTME: HTTP route configuration and router assembly for the assessment API
// ABOUTME: Centralizes route creation so the server binary and tests share one router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrimetrics Contributors

//! # HTTP Route Setup Module
//!
//! Centralizes route creation and middleware layering. The server binary and
//! the integration tests both build the router through [`router`] so they
//! exercise identical middleware stacks.

/// Health and readiness endpoints
pub mod health;

/// Nutrition assessment endpoint
pub mod nutrition;

pub use health::HealthRoutes;
pub use nutrition::NutritionRoutes;

use crate::config::environment::ServerConfig;
use crate::config::nutrition::NutritionConfig;
use crate::middleware::{request_id_middleware, setup_cors};
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Assemble the complete application router with middleware
#[must_use]
pub fn router(nutrition_config: Arc<NutritionConfig>, server_config: &ServerConfig) -> Router {
    Router::new()
        .merge(HealthRoutes::routes())
        .merge(NutritionRoutes::routes(nutrition_config))
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(setup_cors(server_config))
}
