// ABOUTME: Logging configuration and structured logging setup for observability
// ABOUTME: Configures log levels and output formats from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrimetrics Contributors

//! Production-ready logging configuration with structured output

use anyhow::Result;
use std::env;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (trace, debug, info, warn, error), also accepts
    /// full `EnvFilter` directives
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Service name for structured logging
    pub service_name: String,
    /// Environment (development, staging, production)
    pub environment: String,
}

/// Log output format options
#[derive(Debug, Clone)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            service_name: env!("CARGO_PKG_NAME").into(),
            environment: "development".into(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG")
            .or_else(|_| env::var("LOG_LEVEL"))
            .unwrap_or_else(|_| "info".into());

        let format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("compact") => LogFormat::Compact,
            _ => LogFormat::Pretty,
        };

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());

        Self {
            level,
            format,
            service_name: env!("CARGO_PKG_NAME").into(),
            environment,
        }
    }

    /// Initialize the global tracing subscriber from this configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a subscriber is already installed or the level
    /// filter cannot be parsed.
    pub fn init(&self) -> Result<()> {
        let filter = EnvFilter::try_new(&self.level)
            .or_else(|_| EnvFilter::try_new("info"))
            .map_err(|e| anyhow::anyhow!("failed to build log filter: {e}"))?;

        let registry = tracing_subscriber::registry().with(filter);

        match self.format {
            LogFormat::Json => registry
                .with(fmt::layer().json().with_current_span(true))
                .try_init()
                .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?,
            LogFormat::Pretty => registry
                .with(fmt::layer())
                .try_init()
                .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?,
            LogFormat::Compact => registry
                .with(fmt::layer().compact())
                .try_init()
                .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?,
        }

        tracing::info!(
            service = %self.service_name,
            environment = %self.environment,
            level = %self.level,
            "logging initialized"
        );

        Ok(())
    }
}

/// Initialize logging from environment variables
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert!(matches!(config.format, LogFormat::Pretty));
    }
}
