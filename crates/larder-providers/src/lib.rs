// ABOUTME: External recipe provider implementations and the provider abstraction
// ABOUTME: Shared HTTP client, failure classification, TTL cache, and the Edamam client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Contributors

//! Recipe provider implementations.
//!
//! The provider tier is the first stop of the search pipeline and the second of
//! the detail pipeline. Its public contract never raises: every failure is
//! classified, logged, and reported as "no result" so resolvers can fall through.

/// Per-key TTL cache for provider responses
pub mod cache;
/// Core provider trait
pub mod core;
/// Edamam Recipe Search API client
pub mod edamam;
/// Provider failure classification
pub mod errors;
/// HTTP client construction with bounded timeouts
pub mod http_client;

pub use core::RecipeProvider;
pub use edamam::{EdamamClient, EdamamConfig};
pub use errors::ProviderError;
