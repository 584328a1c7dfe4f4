// ABOUTME: Ingredient search route backed by the provider, local, mock resolver chain
// ABOUTME: Rejects missing, non-array, or empty ingredient lists with 400
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Contributors

use super::json_body;
use crate::errors::{AppError, AppResult};
use crate::ingredients::{normalize, non_empty};
use crate::resources::ServerResources;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Search routes implementation
pub struct SearchRoutes;

impl SearchRoutes {
    /// Create the search route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/search-by-ingredients",
                post(Self::handle_search_by_ingredients),
            )
            .with_state(resources)
    }

    /// Handle POST /api/search-by-ingredients
    async fn handle_search_by_ingredients(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<Value>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let body = json_body(payload)?;
        let tokens = ingredient_tokens(&body)?;
        debug!(tokens = ?tokens, "Searching by ingredients");

        let hits = resources.search.resolve(&tokens).await?;
        Ok((StatusCode::OK, Json(hits)).into_response())
    }
}

/// Normalized tokens from a `{ingredients: [..]}` body
fn ingredient_tokens(body: &Value) -> AppResult<Vec<String>> {
    let raw = body
        .get("ingredients")
        .ok_or_else(|| AppError::missing_field("ingredients"))?;
    let items = raw
        .as_array()
        .ok_or_else(|| AppError::invalid_input("ingredients must be an array of strings"))?;
    if items.is_empty() {
        return Err(AppError::invalid_input("ingredients must not be empty"));
    }

    let entries = items
        .iter()
        .map(|item| {
            item.as_str()
                .ok_or_else(|| AppError::invalid_input("ingredients must be an array of strings"))
        })
        .collect::<AppResult<Vec<&str>>>()?;

    non_empty(normalize(entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;
    use serde_json::json;

    #[test]
    fn test_ingredient_tokens_validation() {
        let code = |body: Value| ingredient_tokens(&body).unwrap_err().code;

        assert_eq!(code(json!({})), ErrorCode::MissingRequiredField);
        assert_eq!(code(json!({"ingredients": "tomato"})), ErrorCode::InvalidInput);
        assert_eq!(code(json!({"ingredients": []})), ErrorCode::InvalidInput);
        assert_eq!(code(json!({"ingredients": [1, 2]})), ErrorCode::InvalidInput);
        assert_eq!(code(json!({"ingredients": [" ", ","]})), ErrorCode::InvalidInput);

        let tokens = ingredient_tokens(&json!({"ingredients": ["Tomato, egg", "EGG"]})).unwrap();
        assert_eq!(tokens, vec!["tomato", "egg"]);
    }
}
