// ABOUTME: Scored intersection search over the local recipe store
// ABOUTME: Ranks by used count desc, coverage score desc, prep time asc; store errors fall through
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Contributors

use super::{DetailTier, SearchTier};
use crate::database::recipes::is_local_key;
use crate::database::LocalRecipeStore;
use crate::ingredients::normalize;
use crate::models::{Recipe, RecipeId, RecipeSource, SearchHit};
use async_trait::async_trait;
use std::cmp::Ordering;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Candidate with its computed ranking keys
struct Scored {
    hit: SearchHit,
    score: f64,
}

/// Rank local candidates against query tokens
///
/// For each recipe: `used = |recipe tokens ∩ tokens|`, `total = |recipe tokens|`,
/// `missed = total - used`, `score = used / total` (0 when `total` is 0).
/// Recipes with `used == 0` are dropped. Order is `used` descending, then
/// `score` descending, then `ready_in_minutes` ascending with unknown prep
/// times after known ones. Remaining ties keep candidate order.
#[must_use]
pub fn rank_local(candidates: Vec<Recipe>, tokens: &[String], limit: usize) -> Vec<SearchHit> {
    let query: HashSet<&str> = tokens.iter().map(String::as_str).collect();

    let mut scored: Vec<Scored> = candidates
        .into_iter()
        .filter_map(|recipe| {
            let recipe_tokens = normalize(recipe.ingredients.iter().map(String::as_str));
            let total = recipe_tokens.len();
            let used = recipe_tokens
                .iter()
                .filter(|t| query.contains(t.as_str()))
                .count();
            if used == 0 {
                return None;
            }
            let score = if total == 0 {
                0.0
            } else {
                used as f64 / total as f64
            };
            Some(Scored {
                hit: SearchHit::new(recipe, used, total - used),
                score,
            })
        })
        .collect();

    scored.sort_by(compare_scored);
    scored.truncate(limit);
    scored.into_iter().map(|s| s.hit).collect()
}

fn compare_scored(a: &Scored, b: &Scored) -> Ordering {
    b.hit
        .used_ingredient_count
        .cmp(&a.hit.used_ingredient_count)
        .then_with(|| b.score.total_cmp(&a.score))
        .then_with(|| {
            match (a.hit.recipe.ready_in_minutes, b.hit.recipe.ready_in_minutes) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        })
}

/// Local recipe store as a resolution tier
#[derive(Clone)]
pub struct LocalIndexSearch {
    store: LocalRecipeStore,
    limit: usize,
}

impl LocalIndexSearch {
    /// Search `store`, returning at most `limit` hits
    #[must_use]
    pub const fn new(store: LocalRecipeStore, limit: usize) -> Self {
        Self { store, limit }
    }

    /// Ranked hits for `tokens`; empty when the store is empty or nothing intersects
    pub async fn search_ranked(&self, tokens: &[String]) -> Vec<SearchHit> {
        match self.store.all().await {
            Ok(candidates) => rank_local(candidates, tokens, self.limit),
            Err(e) => {
                warn!(tier = "local", error = %e, "Local index search failed, falling through");
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl SearchTier for LocalIndexSearch {
    fn source(&self) -> RecipeSource {
        RecipeSource::Local
    }

    async fn search(&self, tokens: &[String]) -> Option<Vec<SearchHit>> {
        let hits = self.search_ranked(tokens).await;
        debug!(tier = "local", hits = hits.len(), "Local index searched");
        Some(hits).filter(|h| !h.is_empty())
    }
}

#[async_trait]
impl DetailTier for LocalIndexSearch {
    fn source(&self) -> RecipeSource {
        RecipeSource::Local
    }

    /// Untagged ids are only tried when they have the store's key shape
    fn accepts(&self, id: &RecipeId) -> bool {
        match id.source {
            Some(source) => source == RecipeSource::Local,
            None => is_local_key(&id.value),
        }
    }

    async fn fetch(&self, id: &str) -> Option<Recipe> {
        match self.store.get(id).await {
            Ok(found) => found,
            Err(e) => {
                warn!(
                    tier = "local",
                    recipe_id = %id,
                    error = %e,
                    "Local lookup failed, falling through"
                );
                None
            }
        }
    }
}
