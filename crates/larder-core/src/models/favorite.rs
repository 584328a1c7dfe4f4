// ABOUTME: Frozen favorite snapshot taken from a recipe at favorite-time
// ABOUTME: Later changes to the source recipe never touch a stored snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Contributors

use super::recipe::Recipe;
use serde::{Deserialize, Serialize};

/// Favorite list entry: `{id, title, image}` copied from the recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    /// Recipe identifier value
    pub id: String,
    /// Recipe title at favorite-time
    pub title: String,
    /// Recipe image at favorite-time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl FavoriteEntry {
    /// Take a snapshot of a recipe
    #[must_use]
    pub fn snapshot(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id.value.clone(),
            title: recipe.title.clone(),
            image: recipe.image.clone(),
        }
    }
}
