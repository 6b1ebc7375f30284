// ABOUTME: Server binary for the Nutrimetrics nutrition assessment API
// ABOUTME: Loads environment configuration, initializes logging and serves the axum router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrimetrics Contributors

//! # Nutrimetrics API Server Binary
//!
//! Starts the HTTP server exposing the nutrition assessment endpoint along
//! with health probes, structured logging and permissive CORS for web
//! clients.

use anyhow::Result;
use clap::Parser;
use nutrimetrics::config::environment::ServerConfig;
use nutrimetrics::config::nutrition::NutritionConfig;
use nutrimetrics::{logging, routes};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "nutrimetrics-server")]
#[command(about = "Nutrimetrics API - nutrition assessment service")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;

    // Override port if specified
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    // Initialize production logging
    logging::init_from_env()?;

    info!("Starting Nutrimetrics API");
    info!("{}", config.summary());

    // Calculation constants are compiled-in defaults; validate them up front
    // so a bad build fails at startup, not per request
    let nutrition_config = Arc::new(NutritionConfig::default());
    nutrition_config.validate()?;

    let app = routes::router(nutrition_config, &config);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("HTTP server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        return;
    }
    info!("shutdown signal received");
}
