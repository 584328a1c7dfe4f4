// ABOUTME: Authenticated favorites routes over the account-scoped favorites store
// ABOUTME: Mutations return the full resulting list; detail listing resolves entries concurrently
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Contributors

use super::json_body;
use crate::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::favorites::{favorites_for, FavoritesScope, FavoritesStore};
use crate::models::Recipe;
use crate::resources::ServerResources;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

/// Body of POST /api/favorites/add
#[derive(Debug, Deserialize)]
pub struct AddFavoriteBody {
    /// Recipe to snapshot
    pub recipe: Recipe,
}

/// Body of POST /api/favorites/remove
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveFavoriteBody {
    /// Id of the entry to drop
    pub recipe_id: String,
}

/// Favorites routes implementation
pub struct FavoritesRoutes;

impl FavoritesRoutes {
    /// Create all favorites routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/favorites", get(Self::handle_list))
            .route("/api/favorites/add", post(Self::handle_add))
            .route("/api/favorites/remove", post(Self::handle_remove))
            .route("/api/favorites/recipes", get(Self::handle_list_recipes))
            .with_state(resources)
    }

    fn store_for(resources: &ServerResources, user: AuthenticatedUser) -> Box<dyn FavoritesStore> {
        favorites_for(FavoritesScope::Account {
            pool: resources.pool.clone(),
            user_id: user.user_id,
        })
    }

    /// Handle GET /api/favorites
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        user: AuthenticatedUser,
    ) -> Result<Response, AppError> {
        let favorites = Self::store_for(&resources, user).list().await?;
        Ok((StatusCode::OK, Json(favorites)).into_response())
    }

    /// Handle POST /api/favorites/add
    async fn handle_add(
        State(resources): State<Arc<ServerResources>>,
        user: AuthenticatedUser,
        payload: Result<Json<AddFavoriteBody>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let body = json_body(payload)?;
        info!(user_id = %user.user_id, recipe_id = %body.recipe.id, "Adding favorite");

        let favorites = Self::store_for(&resources, user).add(&body.recipe).await?;
        Ok((StatusCode::OK, Json(favorites)).into_response())
    }

    /// Handle POST /api/favorites/remove
    async fn handle_remove(
        State(resources): State<Arc<ServerResources>>,
        user: AuthenticatedUser,
        payload: Result<Json<RemoveFavoriteBody>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let body = json_body(payload)?;
        let recipe_id = body.recipe_id.trim();
        if recipe_id.is_empty() {
            return Err(AppError::missing_field("recipeId"));
        }
        info!(user_id = %user.user_id, recipe_id = %recipe_id, "Removing favorite");

        let favorites = Self::store_for(&resources, user).remove(recipe_id).await?;
        Ok((StatusCode::OK, Json(favorites)).into_response())
    }

    /// Handle GET /api/favorites/recipes - full details of every favorite
    async fn handle_list_recipes(
        State(resources): State<Arc<ServerResources>>,
        user: AuthenticatedUser,
    ) -> Result<Response, AppError> {
        let ids: Vec<String> = Self::store_for(&resources, user)
            .list()
            .await?
            .into_iter()
            .map(|entry| entry.id)
            .collect();

        let recipes = resources.detail.resolve_many(&ids).await;
        Ok((StatusCode::OK, Json(recipes)).into_response())
    }
}
