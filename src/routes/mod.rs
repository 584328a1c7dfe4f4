// ABOUTME: Route module organization for the Larder HTTP API
// ABOUTME: Assembles domain routers over shared resources with tracing and CORS layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Contributors

//! Route module for the Larder server
//!
//! Each domain module holds route definitions and thin handlers that delegate
//! to the resolvers, the suggestion index, and the favorites stores.

/// Authenticated favorites routes
pub mod favorites;
/// Health check routes
pub mod health;
/// Recipe detail routes
pub mod recipes;
/// Ingredient search routes
pub mod search;
/// Ingredient suggestion routes
pub mod suggestions;

pub use favorites::FavoritesRoutes;
pub use health::HealthRoutes;
pub use recipes::RecipeRoutes;
pub use search::SearchRoutes;
pub use suggestions::SuggestionRoutes;

use crate::errors::{AppError, AppResult};
use crate::middleware::setup_cors;
use crate::resources::ServerResources;
use axum::extract::rejection::JsonRejection;
use axum::{Json, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Full application router
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config.cors_origins);

    Router::new()
        .merge(HealthRoutes::routes())
        .merge(SearchRoutes::routes(Arc::clone(&resources)))
        .merge(RecipeRoutes::routes(Arc::clone(&resources)))
        .merge(SuggestionRoutes::routes(Arc::clone(&resources)))
        .merge(FavoritesRoutes::routes(resources))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Unwrap a JSON body, turning axum's rejection into `InvalidInput`
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::invalid_input(rejection.body_text()))
}
