// ABOUTME: Local recipe store backed by the SQLite recipes table
// ABOUTME: Mints UUID primary keys, maps rows to canonical recipes, and lists distinct ingredients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Contributors

use crate::errors::{AppError, AppResult};
use crate::models::{Recipe, RecipeId, RecipeSource};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use uuid::Uuid;

const SELECT_COLUMNS: &str = "SELECT id, title, image, ingredients, instructions, calories, \
     source_url, ready_in_minutes FROM recipes";

/// Recipe to be added to the local store (the store assigns the id)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecipe {
    /// Display title
    pub title: String,
    /// Image URL
    #[serde(default)]
    pub image: Option<String>,
    /// Ingredient entries, matched as tokens by the local index
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Preparation text
    #[serde(default)]
    pub instructions: Option<String>,
    /// Calorie count
    #[serde(default)]
    pub calories: Option<i64>,
    /// Link to the original recipe page
    #[serde(default)]
    pub source_url: Option<String>,
    /// Preparation time in minutes
    #[serde(default)]
    pub ready_in_minutes: Option<u32>,
}

/// Whether `value` has the shape of a local primary key (hyphenated UUID)
#[must_use]
pub fn is_local_key(value: &str) -> bool {
    value.len() == 36 && Uuid::parse_str(value).is_ok()
}

/// Local recipe collection
#[derive(Clone)]
pub struct LocalRecipeStore {
    pool: SqlitePool,
}

impl LocalRecipeStore {
    /// Create a store over an already migrated pool
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a recipe and return it with its new local id
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank title, or a database error
    pub async fn insert(&self, recipe: &NewRecipe) -> AppResult<Recipe> {
        let title = recipe.title.trim();
        if title.is_empty() {
            return Err(AppError::invalid_input("Recipe title cannot be empty"));
        }

        let id = Uuid::new_v4().to_string();
        let ingredients_json = serde_json::to_string(&recipe.ingredients)?;

        sqlx::query(
            r"
            INSERT INTO recipes (
                id, title, image, ingredients, instructions, calories,
                source_url, ready_in_minutes, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ",
        )
        .bind(&id)
        .bind(title)
        .bind(&recipe.image)
        .bind(&ingredients_json)
        .bind(&recipe.instructions)
        .bind(recipe.calories)
        .bind(&recipe.source_url)
        .bind(recipe.ready_in_minutes.map(i64::from))
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to insert recipe: {e}")))?;

        Ok(with_instruction_fallback(Recipe {
            id: RecipeId::new(RecipeSource::Local, id),
            title: title.to_owned(),
            image: recipe.image.clone(),
            ingredients: recipe.ingredients.clone(),
            instructions: recipe.instructions.clone(),
            calories: recipe.calories,
            source_url: recipe.source_url.clone(),
            ready_in_minutes: recipe.ready_in_minutes,
        }))
    }

    /// Get a recipe by its local id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is malformed
    pub async fn get(&self, id: &str) -> AppResult<Option<Recipe>> {
        let row = sqlx::query(&format!("{SELECT_COLUMNS} WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to get recipe: {e}")))?;

        row.map(|r| row_to_recipe(&r)).transpose()
    }

    /// Every stored recipe in insertion order
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is malformed
    pub async fn all(&self) -> AppResult<Vec<Recipe>> {
        let rows = sqlx::query(&format!("{SELECT_COLUMNS} ORDER BY created_at, rowid"))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to list recipes: {e}")))?;

        rows.iter().map(row_to_recipe).collect()
    }

    /// Distinct ingredient entries across the store, lowercased and trimmed
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn distinct_ingredients(&self) -> AppResult<Vec<String>> {
        let rows = sqlx::query(
            r"
            SELECT DISTINCT lower(trim(j.value)) AS ingredient
            FROM recipes, json_each(recipes.ingredients) AS j
            WHERE trim(j.value) <> ''
            ORDER BY ingredient
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list ingredients: {e}")))?;

        Ok(rows.iter().map(|r| r.get("ingredient")).collect())
    }

    /// Number of stored recipes
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn count(&self) -> AppResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM recipes")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to count recipes: {e}")))?;
        Ok(row.get("total"))
    }
}

/// Fill absent instructions with the ingredient lines
fn with_instruction_fallback(mut recipe: Recipe) -> Recipe {
    let blank = recipe
        .instructions
        .as_deref()
        .map_or(true, |text| text.trim().is_empty());
    if blank {
        recipe.instructions = if recipe.ingredients.is_empty() {
            None
        } else {
            Some(recipe.ingredients.join("\n"))
        };
    }
    recipe
}

fn row_to_recipe(row: &SqliteRow) -> AppResult<Recipe> {
    let id: String = row.get("id");
    let ingredients_json: String = row.get("ingredients");
    let ready_in_minutes: Option<i64> = row.get("ready_in_minutes");

    let ingredients: Vec<String> = serde_json::from_str(&ingredients_json)?;

    Ok(with_instruction_fallback(Recipe {
        id: RecipeId::new(RecipeSource::Local, id),
        title: row.get("title"),
        image: row.get("image"),
        ingredients,
        instructions: row.get("instructions"),
        calories: row.get("calories"),
        source_url: row.get("source_url"),
        ready_in_minutes: ready_in_minutes.and_then(|m| u32::try_from(m).ok()),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_key_shape() {
        assert!(is_local_key("550e8400-e29b-41d4-a716-446655440000"));
        assert!(!is_local_key("550e8400e29b41d4a716446655440000"));
        assert!(!is_local_key("900001"));
        assert!(!is_local_key("http://www.edamam.com/ontologies/edamam.owl#recipe_abc"));
    }

    #[test]
    fn test_instruction_fallback_uses_ingredient_lines() {
        let mut recipe = Recipe::new(RecipeId::new(RecipeSource::Local, "x"), "Toast");
        recipe.ingredients = vec!["bread".to_owned(), "butter".to_owned()];
        recipe.instructions = Some("  ".to_owned());

        let recipe = with_instruction_fallback(recipe);
        assert_eq!(recipe.instructions.as_deref(), Some("bread\nbutter"));
    }
}
