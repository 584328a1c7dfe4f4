// ABOUTME: Resolution tier strategies tried in order by the search and detail resolvers
// ABOUTME: Each tier swallows its own failures and answers with an Option: None means fall through
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Contributors

//! # Resolution Tiers
//!
//! A tier is one fallback stage of the pipeline: the external provider, the
//! local recipe index, and the static mock catalog. Resolvers hold an ordered
//! list of tiers and stop at the first one that yields something.

/// Local recipe index tier
pub mod local_index;
/// Static mock catalog tier
pub mod mock_catalog;
/// External provider tier
pub mod provider;

pub use local_index::{rank_local, LocalIndexSearch};
pub use mock_catalog::MockCatalog;
pub use provider::ProviderTier;

use crate::models::{Recipe, RecipeId, RecipeSource, SearchHit};
use async_trait::async_trait;

/// Tier able to answer ingredient searches
#[async_trait]
pub trait SearchTier: Send + Sync {
    /// Source tag of records this tier produces
    fn source(&self) -> RecipeSource;

    /// Search by normalized tokens; `None` or an empty list means fall through
    async fn search(&self, tokens: &[String]) -> Option<Vec<SearchHit>>;
}

/// Tier able to fetch a single recipe
#[async_trait]
pub trait DetailTier: Send + Sync {
    /// Source tag of records this tier produces
    fn source(&self) -> RecipeSource;

    /// Whether this tier should be asked for `id` at all
    fn accepts(&self, id: &RecipeId) -> bool {
        id.may_belong_to(self.source())
    }

    /// Fetch by the tier-native identifier value
    async fn fetch(&self, id: &str) -> Option<Recipe>;
}
