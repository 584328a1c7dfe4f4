// ABOUTME: Ingredient suggestion route for incremental search input
// ABOUTME: An empty or missing query returns an empty suggestion list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Contributors

use crate::resources::ServerResources;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Query string of the suggestion route
#[derive(Debug, Deserialize)]
pub struct SuggestQuery {
    /// Partial ingredient text
    #[serde(default)]
    pub q: String,
}

/// Suggestion response body
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestResponse {
    /// Ranked ingredient names
    pub suggestions: Vec<String>,
}

/// Suggestion routes implementation
pub struct SuggestionRoutes;

impl SuggestionRoutes {
    /// Create the suggestion route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/suggest-ingredients", get(Self::handle_suggest))
            .with_state(resources)
    }

    /// Handle GET /api/suggest-ingredients?q=
    async fn handle_suggest(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<SuggestQuery>,
    ) -> Json<SuggestResponse> {
        let suggestions = resources.suggestions.suggest(&query.q).await;
        Json(SuggestResponse { suggestions })
    }
}
