// ABOUTME: Configuration module root for calculation constants and server environment
// ABOUTME: Splits domain configuration (nutrition) from deployment configuration (environment)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrimetrics Contributors

//! Configuration management

/// Server deployment configuration loaded from environment variables
pub mod environment;

/// Nutrition calculation configuration: formulas, factors and macro tables
pub mod nutrition;

pub use environment::ServerConfig;
pub use nutrition::NutritionConfig;
