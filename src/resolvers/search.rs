// ABOUTME: Search resolver trying provider, local index, then mock catalog in strict order
// ABOUTME: Rejects empty token sets; surfaces at most one tier's hits per query
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Contributors

use crate::errors::{AppError, AppResult};
use crate::ingredients::non_empty;
use crate::models::SearchHit;
use crate::tiers::{LocalIndexSearch, MockCatalog, ProviderTier, SearchTier};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Ordered search tiers
#[derive(Clone)]
pub struct SearchResolver {
    tiers: Vec<Arc<dyn SearchTier>>,
}

impl SearchResolver {
    /// Resolver over an explicit tier order
    #[must_use]
    pub fn new(tiers: Vec<Arc<dyn SearchTier>>) -> Self {
        Self { tiers }
    }

    /// Provider, then local index, then mock catalog; absent tiers are skipped
    #[must_use]
    pub fn standard(provider: Option<ProviderTier>, local: Option<LocalIndexSearch>) -> Self {
        let mut tiers: Vec<Arc<dyn SearchTier>> = Vec::with_capacity(3);
        if let Some(provider) = provider {
            tiers.push(Arc::new(provider));
        }
        if let Some(local) = local {
            tiers.push(Arc::new(local));
        }
        tiers.push(Arc::new(MockCatalog));
        Self { tiers }
    }

    /// Resolve normalized tokens to the first non-empty tier result
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an empty token set, and an internal error if
    /// every tier (mock catalog included) came back empty
    pub async fn resolve(&self, tokens: &[String]) -> AppResult<Vec<SearchHit>> {
        let tokens = non_empty(tokens.to_vec())?;

        for tier in &self.tiers {
            let source = tier.source();
            match tier.search(&tokens).await {
                Some(hits) if !hits.is_empty() => {
                    info!(
                        tier = %source,
                        hits = hits.len(),
                        tokens = tokens.len(),
                        "Search resolved"
                    );
                    return Ok(hits);
                }
                _ => debug!(tier = %source, "Tier returned nothing, falling through"),
            }
        }

        warn!(tokens = ?tokens, "Every search tier returned nothing");
        Err(AppError::internal("No recipe source returned results"))
    }
}
