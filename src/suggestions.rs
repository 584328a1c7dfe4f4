// ABOUTME: Ingredient suggestion index for incremental search input
// ABOUTME: Prefix matches rank first; the static list answers when the store has no match
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Contributors

use crate::constants::limits::SUGGESTION_LIMIT;
use crate::database::LocalRecipeStore;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Vocabulary used when the local store has no matching ingredient
pub const STATIC_VOCABULARY: &[&str] = &[
    "tomato",
    "onion",
    "garlic",
    "egg",
    "rice",
    "potato",
    "milk",
    "butter",
    "cheese",
    "chicken",
    "paneer",
    "flour",
    "sugar",
    "salt",
    "pepper",
    "carrot",
    "cabbage",
    "spinach",
    "beans",
    "moong dal",
    "chana",
    "lentils",
    "yogurt",
    "olive oil",
    "oil",
    "ginger",
    "lemon",
    "coriander",
    "cumin",
    "turmeric",
    "green chili",
    "bell pepper",
    "corn",
    "mushroom",
    "broccoli",
    "bread",
];

/// Rank `vocabulary` against `query`
///
/// Case-insensitive. Every prefix match precedes every contains-only match,
/// each group keeps vocabulary order, duplicates are dropped, and at most
/// `limit` entries are returned. A blank query yields nothing.
pub fn rank_suggestions<'a, I>(query: &str, vocabulary: I, limit: usize) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut seen = HashSet::new();
    let mut prefix = Vec::new();
    let mut contains = Vec::new();
    for candidate in vocabulary {
        let lowered = candidate.trim().to_lowercase();
        if lowered.is_empty() || !seen.insert(lowered.clone()) {
            continue;
        }
        if lowered.starts_with(&needle) {
            prefix.push(lowered);
        } else if lowered.contains(&needle) {
            contains.push(lowered);
        }
    }

    prefix.into_iter().chain(contains).take(limit).collect()
}

/// Suggestion source: store-derived vocabulary when available
#[derive(Clone, Default)]
pub struct SuggestionIndex {
    store: Option<LocalRecipeStore>,
}

impl SuggestionIndex {
    /// Index over the static vocabulary only
    #[must_use]
    pub const fn static_only() -> Self {
        Self { store: None }
    }

    /// Index preferring the store's distinct ingredients
    #[must_use]
    pub const fn with_store(store: LocalRecipeStore) -> Self {
        Self { store: Some(store) }
    }

    /// Up to ten suggestions for `query`
    ///
    /// The store's vocabulary is ranked first; when it yields no match for
    /// this query, the static vocabulary is ranked instead.
    pub async fn suggest(&self, query: &str) -> Vec<String> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        if let Some(store) = &self.store {
            match store.distinct_ingredients().await {
                Ok(vocabulary) => {
                    let suggestions = rank_suggestions(
                        query,
                        vocabulary.iter().map(String::as_str),
                        SUGGESTION_LIMIT,
                    );
                    if !suggestions.is_empty() {
                        debug!(vocabulary = vocabulary.len(), "Suggesting from local store");
                        return suggestions;
                    }
                    debug!("No local store match, using static vocabulary");
                }
                Err(e) => {
                    warn!(error = %e, "Ingredient vocabulary query failed, using static list");
                }
            }
        }

        rank_suggestions(query, STATIC_VOCABULARY.iter().copied(), SUGGESTION_LIMIT)
    }
}
