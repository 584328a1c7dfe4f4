// ABOUTME: Core recipe provider trait consumed by the search and detail resolvers
// ABOUTME: Implementations convert every failure into an explicit "no result" signal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Contributors

use async_trait::async_trait;
use larder_core::models::{Recipe, SearchHit};

/// External recipe source queried before any local fallback
///
/// `None` means "fall through to the next tier": the provider was not
/// configured, failed, timed out, or simply had nothing to return.
#[async_trait]
pub trait RecipeProvider: Send + Sync {
    /// Provider name for logs
    fn name(&self) -> &'static str;

    /// Search by normalized ingredient tokens
    ///
    /// A returned vector is never empty.
    async fn search_by_ingredients(&self, tokens: &[String]) -> Option<Vec<SearchHit>>;

    /// Fetch one recipe by the provider's own identifier
    async fn fetch_by_id(&self, id: &str) -> Option<Recipe>;
}
