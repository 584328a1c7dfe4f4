// ABOUTME: Main library entry point for the Larder recipe resolution service
// ABOUTME: Resolves ingredient searches and recipe details across provider, local, and mock tiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Contributors

#![deny(unsafe_code)]

//! # Larder
//!
//! Ingredient-driven recipe search with a tiered fallback pipeline. A query
//! always produces results: the external provider is tried first, then the
//! local recipe store, then a fixed mock catalog.
//!
//! ## Architecture
//!
//! - **Ingredients**: normalization of raw ingredient input into tokens
//! - **Tiers**: provider, local index, and mock catalog resolution stages
//! - **Resolvers**: ordered search and detail fallback over the tiers
//! - **Suggestions**: prefix-first ingredient completion
//! - **Favorites**: device-scoped and account-scoped favorite lists
//! - **Routes**: the axum HTTP surface
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use larder_server::config::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Larder configured on port {}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Bearer token verification and the authenticated user extractor
pub mod auth;

/// Environment configuration
pub mod config;

/// Application constants
pub mod constants;

/// Local recipe store and favorites schema
pub mod database;

/// Unified error handling
pub mod errors;

/// Anonymous and account favorites backends
pub mod favorites;

/// Ingredient normalization
pub mod ingredients;

/// Structured logging setup
pub mod logging;

/// HTTP middleware layers
pub mod middleware;

/// Canonical recipe models
pub mod models;

/// Search and detail fallback resolvers
pub mod resolvers;

/// Shared server resources
pub mod resources;

/// HTTP routes
pub mod routes;

/// Ingredient suggestions
pub mod suggestions;

/// Resolution tiers
pub mod tiers;
