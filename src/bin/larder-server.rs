// ABOUTME: HTTP server binary for the Larder recipe resolution service
// ABOUTME: Loads environment configuration, opens the local store, and serves the axum router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Contributors

//! # Larder Server Binary
//!
//! Serves ingredient search, recipe detail, suggestions, and account favorites.

use anyhow::{Context, Result};
use clap::Parser;
use larder_server::{
    config::ServerConfig, database, logging, resources::ServerResources, routes::build_router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "larder-server")]
#[command(about = "Larder - ingredient driven recipe search with tiered fallback")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url {
        config.database_url = database_url;
    }

    logging::init_from_env()?;
    info!("Starting Larder server");
    info!("{}", config.summary());

    let pool = database::open(&config.database_url)
        .await
        .with_context(|| format!("Failed to open database {}", config.database_url))?;
    info!(database_url = %config.database_url, "Database ready");

    let port = config.http_port;
    let resources = Arc::new(ServerResources::from_config(config, pool));
    let app = build_router(resources);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    display_available_endpoints(port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Larder server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
    }
    info!("Shutdown signal received");
}

#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(port: u16) {
    info!("=== Available API Endpoints ===");
    info!("   Health:            GET  http://0.0.0.0:{port}/health");
    info!("   Search:            POST http://0.0.0.0:{port}/api/search-by-ingredients");
    info!("   Recipe Detail:     GET  http://0.0.0.0:{port}/api/recipe/{{id}}");
    info!("   Suggestions:       GET  http://0.0.0.0:{port}/api/suggest-ingredients?q=");
    info!("   Favorites:         GET  http://0.0.0.0:{port}/api/favorites");
    info!("   Add Favorite:      POST http://0.0.0.0:{port}/api/favorites/add");
    info!("   Remove Favorite:   POST http://0.0.0.0:{port}/api/favorites/remove");
    info!("   Favorite Details:  GET  http://0.0.0.0:{port}/api/favorites/recipes");
}
