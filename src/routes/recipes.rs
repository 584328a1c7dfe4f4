// ABOUTME: Recipe detail route backed by the local, provider, mock resolver chain
// ABOUTME: Path ids arrive percent-decoded; exhaustion of every tier yields 404
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Contributors

use crate::errors::AppError;
use crate::resources::ServerResources;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;

/// Recipe detail routes implementation
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create the recipe detail route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/recipe/:id", get(Self::handle_get))
            .with_state(resources)
    }

    /// Handle GET /api/recipe/:id
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let recipe = resources.detail.resolve(&id).await?;
        Ok((StatusCode::OK, Json(recipe)).into_response())
    }
}
