// ABOUTME: Detail resolver trying local store, provider, then mock catalog for one recipe id
// ABOUTME: Only exhaustion of every accepting tier is an error; batch lookups drop individual misses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Contributors

use crate::errors::{AppError, AppResult};
use crate::models::{Recipe, RecipeId};
use crate::tiers::{DetailTier, LocalIndexSearch, MockCatalog, ProviderTier};
use futures_util::future::join_all;
use std::sync::Arc;
use tracing::{debug, info};

/// Ordered detail tiers
#[derive(Clone)]
pub struct DetailResolver {
    tiers: Vec<Arc<dyn DetailTier>>,
}

impl DetailResolver {
    /// Resolver over an explicit tier order
    #[must_use]
    pub fn new(tiers: Vec<Arc<dyn DetailTier>>) -> Self {
        Self { tiers }
    }

    /// Local store, then provider, then mock catalog; absent tiers are skipped
    #[must_use]
    pub fn standard(local: Option<LocalIndexSearch>, provider: Option<ProviderTier>) -> Self {
        let mut tiers: Vec<Arc<dyn DetailTier>> = Vec::with_capacity(3);
        if let Some(local) = local {
            tiers.push(Arc::new(local));
        }
        if let Some(provider) = provider {
            tiers.push(Arc::new(provider));
        }
        tiers.push(Arc::new(MockCatalog));
        Self { tiers }
    }

    /// Resolve a client-supplied id (optionally `local:`/`provider:`/`mock:` tagged)
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank id and `ResourceNotFound` when no tier has it
    pub async fn resolve(&self, raw_id: &str) -> AppResult<Recipe> {
        let id = RecipeId::parse(raw_id)?;
        self.resolve_id(&id).await
    }

    /// Resolve an already parsed id
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when no accepting tier has the recipe
    pub async fn resolve_id(&self, id: &RecipeId) -> AppResult<Recipe> {
        for tier in &self.tiers {
            let source = tier.source();
            if !tier.accepts(id) {
                debug!(tier = %source, recipe_id = %id, "Tier does not accept id shape, skipping");
                continue;
            }
            match tier.fetch(&id.value).await {
                Some(recipe) if recipe.validate().is_ok() => {
                    info!(tier = %source, recipe_id = %id, "Recipe detail resolved");
                    return Ok(recipe);
                }
                _ => debug!(
                    tier = %source,
                    recipe_id = %id,
                    "Tier has no such recipe, falling through"
                ),
            }
        }
        Err(AppError::not_found(format!("Recipe {}", id.tagged())))
    }

    /// Resolve many ids concurrently, dropping failures and keeping input order
    pub async fn resolve_many(&self, ids: &[String]) -> Vec<Recipe> {
        let results = join_all(ids.iter().map(|id| self.resolve(id))).await;
        results
            .into_iter()
            .zip(ids)
            .filter_map(|(result, id)| match result {
                Ok(recipe) => Some(recipe),
                Err(e) => {
                    debug!(recipe_id = %id, error = %e, "Dropping unresolvable recipe from batch");
                    None
                }
            })
            .collect()
    }
}
