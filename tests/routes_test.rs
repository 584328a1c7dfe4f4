// ABOUTME: Integration tests for the Larder HTTP routes
// ABOUTME: Covers search fallback, detail lookup, suggestions, and authenticated favorites
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use axum::http::StatusCode;
use common::{
    bearer_for, memory_pool, new_recipe, provider_recipe, seed, test_resources, StubProvider,
};
use helpers::axum_test::AxumTestRequest;
use larder_providers::RecipeProvider;
use larder_server::routes::build_router;
use serde_json::{json, Value};
use std::sync::Arc;

async fn app_with(provider: Option<Arc<StubProvider>>) -> (axum::Router, sqlx::SqlitePool) {
    let pool = memory_pool().await;
    let provider = provider.map(|p| p as Arc<dyn RecipeProvider>);
    let router = build_router(test_resources(pool.clone(), provider));
    (router, pool)
}

fn ids(body: &Value) -> Vec<String> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_str().unwrap().to_owned())
        .collect()
}

// ============================================================================
// Search
// ============================================================================

#[tokio::test]
async fn test_search_falls_back_to_mock_catalog() {
    let provider = Arc::new(StubProvider::down());
    let (app, _pool) = app_with(Some(Arc::clone(&provider))).await;

    let response = AxumTestRequest::post("/api/search-by-ingredients")
        .json(&json!({"ingredients": ["Tomato", "egg"]}))
        .send(app)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(ids(&body), vec!["900001", "900002", "900003"]);
    assert_eq!(body[0]["usedIngredientCount"], 2);
    assert_eq!(body[1]["usedIngredientCount"], 0);
    assert_eq!(body[2]["usedIngredientCount"], 0);
    assert_eq!(body[0]["missedIngredientCount"], 0);
    assert_eq!(body[0]["source"], "mock");
    assert_eq!(provider.search_calls(), 1);
}

#[tokio::test]
async fn test_search_prefers_provider_results() {
    let provider = Arc::new(StubProvider::serving(vec![provider_recipe("abc", "Shakshuka")]));
    let (app, pool) = app_with(Some(Arc::clone(&provider))).await;
    seed(&pool, &[new_recipe("Egg Curry", &["egg", "tomato"], Some(20))]).await;

    let body: Value = AxumTestRequest::post("/api/search-by-ingredients")
        .json(&json!({"ingredients": ["tomato, egg"]}))
        .send(app)
        .await
        .json();

    assert_eq!(ids(&body), vec!["abc"]);
    assert_eq!(body[0]["source"], "provider");
}

#[tokio::test]
async fn test_search_uses_local_store_when_provider_is_down() {
    let (app, pool) = app_with(Some(Arc::new(StubProvider::down()))).await;
    let stored = seed(
        &pool,
        &[
            new_recipe("Egg Fried Rice", &["egg", "rice", "onion", "oil"], Some(15)),
            new_recipe("Tomato Egg Drop", &["tomato", "egg"], Some(10)),
            new_recipe("Boiled Egg", &["egg"], Some(8)),
            new_recipe("Plain Rice", &["rice"], None),
        ],
    )
    .await;

    let body: Value = AxumTestRequest::post("/api/search-by-ingredients")
        .json(&json!({"ingredients": ["tomato", "egg"]}))
        .send(app)
        .await
        .json();

    let expected: Vec<String> = [1, 2, 0]
        .iter()
        .map(|&i| stored[i].id.value.clone())
        .collect();
    assert_eq!(ids(&body), expected);
    assert_eq!(body[0]["usedIngredientCount"], 2);
    assert_eq!(body[2]["missedIngredientCount"], 3);
}

#[tokio::test]
async fn test_search_rejects_invalid_ingredient_lists() {
    let (app, _pool) = app_with(None).await;

    for body in [
        json!({}),
        json!({"ingredients": "tomato"}),
        json!({"ingredients": []}),
        json!({"ingredients": ["  ", ","]}),
        json!({"ingredients": [42]}),
    ] {
        let response = AxumTestRequest::post("/api/search-by-ingredients")
            .json(&body)
            .send(app.clone())
            .await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "body: {body}");
        let error: Value = response.json();
        assert!(error["message"].as_str().is_some());
    }

    let response = AxumTestRequest::post("/api/search-by-ingredients")
        .raw_json("{not json")
        .send(app)
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

// ============================================================================
// Recipe detail
// ============================================================================

#[tokio::test]
async fn test_recipe_detail_falls_back_to_mock_record() {
    let provider = Arc::new(StubProvider::down());
    let (app, _pool) = app_with(Some(Arc::clone(&provider))).await;

    let response = AxumTestRequest::get("/api/recipe/900001").send(app).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let recipe: Value = response.json();
    assert_eq!(recipe["id"], "900001");
    assert_eq!(recipe["title"], "Quick Tomato Egg Stir-fry");
    assert_eq!(recipe["calories"], 200);
    assert_eq!(provider.fetch_calls(), 1);
}

#[tokio::test]
async fn test_recipe_detail_not_found() {
    let (app, _pool) = app_with(Some(Arc::new(StubProvider::down()))).await;

    let response = AxumTestRequest::get("/api/recipe/does-not-exist")
        .send(app.clone())
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let error: Value = response.json();
    assert_eq!(error["code"], "RESOURCE_NOT_FOUND");

    let response = AxumTestRequest::get("/api/recipe/%20").send(app).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_recipe_detail_decodes_provider_uri() {
    let uri = "http://www.edamam.com/ontologies/edamam.owl#recipe_abc";
    let provider = Arc::new(StubProvider::serving(vec![provider_recipe(uri, "Shakshuka")]));
    let (app, _pool) = app_with(Some(Arc::clone(&provider))).await;

    let encoded = "http%3A%2F%2Fwww.edamam.com%2Fontologies%2Fedamam.owl%23recipe_abc";
    let response = AxumTestRequest::get(&format!("/api/recipe/{encoded}"))
        .send(app)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let recipe: Value = response.json();
    assert_eq!(recipe["id"], uri);
    assert_eq!(recipe["title"], "Shakshuka");
}

#[tokio::test]
async fn test_local_detail_skips_provider() {
    let provider = Arc::new(StubProvider::down());
    let (app, pool) = app_with(Some(Arc::clone(&provider))).await;
    let stored = seed(&pool, &[new_recipe("Egg Curry", &["egg", "onion"], None)]).await;

    let response = AxumTestRequest::get(&format!("/api/recipe/{}", stored[0].id.value))
        .send(app)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let recipe: Value = response.json();
    assert_eq!(recipe["title"], "Egg Curry");
    assert_eq!(recipe["source"], "local");
    assert_eq!(recipe["instructions"], "egg\nonion");
    assert_eq!(provider.fetch_calls(), 0);
}

#[tokio::test]
async fn test_search_results_resolve_to_same_id() {
    let (app, pool) = app_with(None).await;
    seed(
        &pool,
        &[
            new_recipe("Egg Curry", &["egg", "onion"], Some(25)),
            new_recipe("Onion Pakora", &["onion", "flour"], Some(20)),
        ],
    )
    .await;

    let hits: Value = AxumTestRequest::post("/api/search-by-ingredients")
        .json(&json!({"ingredients": ["onion"]}))
        .send(app.clone())
        .await
        .json();

    for id in ids(&hits) {
        let recipe: Value = AxumTestRequest::get(&format!("/api/recipe/{id}"))
            .send(app.clone())
            .await
            .json();
        assert_eq!(recipe["id"], id.as_str());
    }
}

// ============================================================================
// Suggestions
// ============================================================================

#[tokio::test]
async fn test_suggestions() {
    let (app, pool) = app_with(None).await;

    let body: Value = AxumTestRequest::get("/api/suggest-ingredients?q=")
        .send(app.clone())
        .await
        .json();
    assert_eq!(body, json!({"suggestions": []}));

    let body: Value = AxumTestRequest::get("/api/suggest-ingredients")
        .send(app.clone())
        .await
        .json();
    assert_eq!(body, json!({"suggestions": []}));

    let body: Value = AxumTestRequest::get("/api/suggest-ingredients?q=tom")
        .send(app.clone())
        .await
        .json();
    assert_eq!(body, json!({"suggestions": ["tomato"]}));

    seed(&pool, &[new_recipe("Tamarind Rice", &["Tamarind", "rice"], None)]).await;
    let body: Value = AxumTestRequest::get("/api/suggest-ingredients?q=ta")
        .send(app.clone())
        .await
        .json();
    assert_eq!(body, json!({"suggestions": ["tamarind"]}));

    // No stored ingredient matches, so the static vocabulary answers
    let body: Value = AxumTestRequest::get("/api/suggest-ingredients?q=tom")
        .send(app)
        .await
        .json();
    assert_eq!(body, json!({"suggestions": ["tomato"]}));
}

// ============================================================================
// Favorites
// ============================================================================

#[tokio::test]
async fn test_favorites_require_identity() {
    let (app, _pool) = app_with(None).await;

    let response = AxumTestRequest::get("/api/favorites").send(app.clone()).await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    let response = AxumTestRequest::get("/api/favorites")
        .header("authorization", "Bearer forged.token.value")
        .send(app.clone())
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    let response = AxumTestRequest::post("/api/favorites/remove")
        .json(&json!({"recipeId": "900001"}))
        .send(app)
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_favorites_add_remove_round_trip() {
    let (app, _pool) = app_with(None).await;
    let alice = bearer_for("alice");

    let recipe: Value = AxumTestRequest::get("/api/recipe/900001")
        .send(app.clone())
        .await
        .json();

    for _ in 0..2 {
        let response = AxumTestRequest::post("/api/favorites/add")
            .header("authorization", &alice)
            .json(&json!({"recipe": recipe}))
            .send(app.clone())
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
        let favorites: Value = response.json();
        assert_eq!(
            favorites,
            json!([{
                "id": "900001",
                "title": "Quick Tomato Egg Stir-fry",
                "image": "https://via.placeholder.com/800x500?text=Tomato+Egg"
            }])
        );
    }

    let favorites: Value = AxumTestRequest::post("/api/favorites/remove")
        .header("authorization", &alice)
        .json(&json!({"recipeId": "missing"}))
        .send(app.clone())
        .await
        .json();
    assert_eq!(ids(&favorites), vec!["900001"]);

    let favorites: Value = AxumTestRequest::post("/api/favorites/remove")
        .header("authorization", &alice)
        .json(&json!({"recipeId": "900001"}))
        .send(app.clone())
        .await
        .json();
    assert_eq!(favorites, json!([]));

    let favorites: Value = AxumTestRequest::get("/api/favorites")
        .header("authorization", &alice)
        .send(app)
        .await
        .json();
    assert_eq!(favorites, json!([]));
}

#[tokio::test]
async fn test_favorites_are_scoped_per_user() {
    let (app, _pool) = app_with(None).await;

    AxumTestRequest::post("/api/favorites/add")
        .header("authorization", &bearer_for("alice"))
        .json(&json!({"recipe": {"id": "900002", "source": "mock", "title": "Simple Rice & Veg"}}))
        .send(app.clone())
        .await;

    let favorites: Value = AxumTestRequest::get("/api/favorites")
        .header("authorization", &bearer_for("bob"))
        .send(app.clone())
        .await
        .json();
    assert_eq!(favorites, json!([]));

    let favorites: Value = AxumTestRequest::get("/api/favorites")
        .header("authorization", &bearer_for("alice"))
        .send(app)
        .await
        .json();
    assert_eq!(ids(&favorites), vec!["900002"]);
}

#[tokio::test]
async fn test_favorites_add_rejects_invalid_recipe() {
    let (app, _pool) = app_with(None).await;
    let alice = bearer_for("alice");

    let response = AxumTestRequest::post("/api/favorites/add")
        .header("authorization", &alice)
        .json(&json!({"recipe": {"id": "900001", "title": "  "}}))
        .send(app.clone())
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let response = AxumTestRequest::post("/api/favorites/add")
        .header("authorization", &alice)
        .json(&json!({"recipeId": "900001"}))
        .send(app)
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_favorite_recipes_resolve_details_in_order() {
    let (app, pool) = app_with(Some(Arc::new(StubProvider::down()))).await;
    let stored = seed(&pool, &[new_recipe("Egg Curry", &["egg"], None)]).await;
    let alice = bearer_for("alice");

    for recipe in [
        json!({"id": "900003", "source": "mock", "title": "Garlic Butter Toast"}),
        json!({"id": "gone-from-provider", "title": "Vanished"}),
        json!({"id": stored[0].id.value, "source": "local", "title": "Egg Curry"}),
    ] {
        AxumTestRequest::post("/api/favorites/add")
            .header("authorization", &alice)
            .json(&json!({"recipe": recipe}))
            .send(app.clone())
            .await;
    }

    let recipes: Value = AxumTestRequest::get("/api/favorites/recipes")
        .header("authorization", &alice)
        .send(app)
        .await
        .json();

    assert_eq!(ids(&recipes), vec!["900003".to_owned(), stored[0].id.value.clone()]);
    assert_eq!(recipes[0]["calories"], 150);
}

#[tokio::test]
async fn test_health() {
    let (app, _pool) = app_with(None).await;
    let body: Value = AxumTestRequest::get("/health").send(app).await.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "larder-server");
}
