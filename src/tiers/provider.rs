// ABOUTME: Adapts an external RecipeProvider to the search and detail tier interfaces
// ABOUTME: The provider already converts failures into None, so this layer only routes calls
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Contributors

use super::{DetailTier, SearchTier};
use crate::models::{Recipe, RecipeSource, SearchHit};
use async_trait::async_trait;
use larder_providers::RecipeProvider;
use std::sync::Arc;
use tracing::debug;

/// External provider as a resolution tier
#[derive(Clone)]
pub struct ProviderTier {
    provider: Arc<dyn RecipeProvider>,
}

impl ProviderTier {
    /// Wrap a provider client
    #[must_use]
    pub fn new(provider: Arc<dyn RecipeProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl SearchTier for ProviderTier {
    fn source(&self) -> RecipeSource {
        RecipeSource::Provider
    }

    async fn search(&self, tokens: &[String]) -> Option<Vec<SearchHit>> {
        debug!(provider = self.provider.name(), "Querying provider tier");
        self.provider.search_by_ingredients(tokens).await
    }
}

#[async_trait]
impl DetailTier for ProviderTier {
    fn source(&self) -> RecipeSource {
        RecipeSource::Provider
    }

    async fn fetch(&self, id: &str) -> Option<Recipe> {
        debug!(provider = self.provider.name(), recipe_id = %id, "Fetching from provider tier");
        self.provider.fetch_by_id(id).await
    }
}
