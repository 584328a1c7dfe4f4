// ABOUTME: Favorites contract shared by the anonymous device list and the account-scoped list
// ABOUTME: Callers pick a scope once; business logic only ever sees the FavoritesStore trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Contributors

//! # Favorites
//!
//! Two backends share one contract:
//! - [`DeviceFavorites`]: anonymous, one JSON document per device storage location
//! - [`AccountFavorites`]: authenticated, rows keyed by user id in SQLite
//!
//! Entries are frozen `{id, title, image}` snapshots. Ids are unique within a
//! list after every operation. The two scopes are never merged.

/// Account-scoped backend
pub mod account;
/// Device-scoped backend
pub mod device;

pub use account::AccountFavorites;
pub use device::DeviceFavorites;

use crate::errors::AppResult;
use crate::models::{FavoriteEntry, Recipe};
use async_trait::async_trait;
use serde::Serialize;
use sqlx::SqlitePool;
use std::path::PathBuf;

/// Result of toggling a recipe's favorite state
#[derive(Debug, Clone, Serialize)]
pub struct FavoriteToggle {
    /// Whether the recipe is a favorite after the toggle
    pub favorited: bool,
    /// Full list after the toggle
    pub favorites: Vec<FavoriteEntry>,
}

/// Favorites list for one identity scope
#[async_trait]
pub trait FavoritesStore: Send + Sync {
    /// Current entries in insertion order
    async fn list(&self) -> AppResult<Vec<FavoriteEntry>>;

    /// Append a snapshot of `recipe` unless its id is already present
    ///
    /// Returns the resulting list. A recipe with a blank id or title is
    /// rejected with `InvalidInput`.
    async fn add(&self, recipe: &Recipe) -> AppResult<Vec<FavoriteEntry>>;

    /// Remove any entry with `id`; a missing id leaves the list unchanged
    async fn remove(&self, id: &str) -> AppResult<Vec<FavoriteEntry>>;

    /// Whether an entry with `id` exists
    async fn contains(&self, id: &str) -> AppResult<bool> {
        Ok(self.list().await?.iter().any(|entry| entry.id == id))
    }

    /// Add when absent, remove when present
    async fn toggle(&self, recipe: &Recipe) -> AppResult<FavoriteToggle> {
        if self.contains(&recipe.id.value).await? {
            let favorites = self.remove(&recipe.id.value).await?;
            Ok(FavoriteToggle {
                favorited: false,
                favorites,
            })
        } else {
            let favorites = self.add(recipe).await?;
            Ok(FavoriteToggle {
                favorited: true,
                favorites,
            })
        }
    }
}

/// Identity scope a favorites list belongs to
#[derive(Debug, Clone)]
pub enum FavoritesScope {
    /// Anonymous list stored in a document at this path
    Device(PathBuf),
    /// Authenticated user's list
    Account {
        /// Database holding the favorites table
        pool: SqlitePool,
        /// Verified user identity
        user_id: String,
    },
}

/// Backend for `scope`
#[must_use]
pub fn favorites_for(scope: FavoritesScope) -> Box<dyn FavoritesStore> {
    match scope {
        FavoritesScope::Device(path) => Box::new(DeviceFavorites::new(path)),
        FavoritesScope::Account { pool, user_id } => Box::new(AccountFavorites::new(pool, user_id)),
    }
}
