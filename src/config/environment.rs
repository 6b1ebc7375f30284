// ABOUTME: Environment-based server configuration for port, logging and CORS settings
// ABOUTME: Reads deployment settings from environment variables with sensible defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrimetrics Contributors

//! Server deployment configuration
//!
//! All deployment-level settings come from environment variables so the same
//! binary runs unchanged in development and production.
//!
//! | Variable | Default | Purpose |
//! |---|---|---|
//! | `HTTP_PORT` | `8081` | HTTP listener port |
//! | `LOG_LEVEL` | `info` | Log verbosity |
//! | `CORS_ALLOWED_ORIGINS` | `*` | Comma-separated origin allowlist |

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;

/// Default HTTP port when `HTTP_PORT` is not set
pub const DEFAULT_HTTP_PORT: u16 = 8081;

/// Log verbosity level
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl FromStr for LogLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            other => Err(AppError::config(format!("unknown log level: {other}"))),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        };
        write!(f, "{level}")
    }
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated origin allowlist; "*" or empty allows any origin
    pub allowed_origins: String,
}

/// Server configuration loaded from the environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP API port
    pub http_port: u16,
    /// Log level
    pub log_level: LogLevel,
    /// CORS settings
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when `HTTP_PORT` or `LOG_LEVEL` contain values
    /// that cannot be parsed.
    pub fn from_env() -> AppResult<Self> {
        let http_port = match env::var("HTTP_PORT") {
            Ok(port) => port
                .parse::<u16>()
                .map_err(|e| AppError::config(format!("invalid HTTP_PORT: {e}")))?,
            Err(_) => DEFAULT_HTTP_PORT,
        };

        let log_level = match env::var("LOG_LEVEL") {
            Ok(level) => level.parse()?,
            Err(_) => LogLevel::default(),
        };

        let allowed_origins = env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| "*".into());

        Ok(Self {
            http_port,
            log_level,
            cors: CorsConfig { allowed_origins },
        })
    }

    /// One-line configuration summary for startup logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "http_port={} log_level={} cors_origins={}",
            self.http_port, self.log_level, self.cors.allowed_origins
        )
    }
}
