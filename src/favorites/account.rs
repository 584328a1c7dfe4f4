// ABOUTME: Authenticated favorites persisted in the SQLite favorites table, keyed by user id
// ABOUTME: A unique (user_id, recipe_id) constraint keeps ids unique; lists follow insertion order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Contributors

use super::FavoritesStore;
use crate::errors::{AppError, AppResult};
use crate::models::{FavoriteEntry, Recipe};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Row, SqlitePool};
use tracing::debug;

/// Favorites of one authenticated user
#[derive(Clone)]
pub struct AccountFavorites {
    pool: SqlitePool,
    user_id: String,
}

impl AccountFavorites {
    /// Favorites of `user_id`
    pub fn new(pool: SqlitePool, user_id: impl Into<String>) -> Self {
        Self {
            pool,
            user_id: user_id.into(),
        }
    }
}

#[async_trait]
impl FavoritesStore for AccountFavorites {
    async fn list(&self) -> AppResult<Vec<FavoriteEntry>> {
        let rows = sqlx::query(
            r"
            SELECT recipe_id, title, image
            FROM favorites
            WHERE user_id = $1
            ORDER BY id
            ",
        )
        .bind(&self.user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list favorites: {e}")))?;

        Ok(rows
            .iter()
            .map(|row| FavoriteEntry {
                id: row.get("recipe_id"),
                title: row.get("title"),
                image: row.get("image"),
            })
            .collect())
    }

    async fn add(&self, recipe: &Recipe) -> AppResult<Vec<FavoriteEntry>> {
        recipe.validate()?;
        let entry = FavoriteEntry::snapshot(recipe);

        let result = sqlx::query(
            r"
            INSERT OR IGNORE INTO favorites (user_id, recipe_id, title, image, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(&self.user_id)
        .bind(&entry.id)
        .bind(&entry.title)
        .bind(&entry.image)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to add favorite: {e}")))?;

        debug!(
            user_id = %self.user_id,
            recipe_id = %entry.id,
            inserted = result.rows_affected() > 0,
            "Favorite add processed"
        );
        self.list().await
    }

    async fn remove(&self, id: &str) -> AppResult<Vec<FavoriteEntry>> {
        sqlx::query("DELETE FROM favorites WHERE user_id = $1 AND recipe_id = $2")
            .bind(&self.user_id)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to remove favorite: {e}")))?;

        self.list().await
    }

    async fn contains(&self, id: &str) -> AppResult<bool> {
        let row = sqlx::query("SELECT 1 FROM favorites WHERE user_id = $1 AND recipe_id = $2")
            .bind(&self.user_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to check favorite: {e}")))?;

        Ok(row.is_some())
    }
}
