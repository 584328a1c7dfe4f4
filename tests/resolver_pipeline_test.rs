// ABOUTME: End-to-end tests of the search and detail resolver chains built from server resources
// ABOUTME: Checks the always-some-results guarantee and search-to-detail id round trips
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{memory_pool, new_recipe, provider_recipe, seed, test_resources, StubProvider};
use larder_providers::RecipeProvider;
use larder_server::errors::ErrorCode;
use larder_server::ingredients::normalize;
use larder_server::models::RecipeSource;
use std::sync::Arc;

#[tokio::test]
async fn test_every_non_empty_query_gets_results() {
    let pool = memory_pool().await;
    seed(&pool, &[new_recipe("Egg Curry", &["egg", "onion"], Some(20))]).await;
    let provider: Arc<dyn RecipeProvider> = Arc::new(StubProvider::down());
    let resources = test_resources(pool, Some(provider));

    for raw in [
        "egg",
        "tomato, egg",
        "saffron",
        "bread, garlic, butter, rice",
        "ONION,onion , chili",
    ] {
        let tokens = normalize([raw]);
        let hits = resources.search.resolve(&tokens).await.unwrap();
        assert!(!hits.is_empty(), "no hits for {raw}");
        assert!(
            hits.iter().all(|h| h.used_ingredient_count <= tokens.len()),
            "used count exceeds query for {raw}"
        );
    }
}

#[tokio::test]
async fn test_empty_query_is_invalid_input() {
    let resources = test_resources(memory_pool().await, None);
    let err = resources.search.resolve(&[]).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_mock_scenario_counts_from_literal_membership() {
    let provider: Arc<dyn RecipeProvider> = Arc::new(StubProvider::down());
    let resources = test_resources(memory_pool().await, Some(provider));

    let hits = resources
        .search
        .resolve(&normalize(["tomato", "egg"]))
        .await
        .unwrap();

    let summary: Vec<(&str, usize, usize)> = hits
        .iter()
        .map(|h| {
            (
                h.recipe.id.value.as_str(),
                h.used_ingredient_count,
                h.missed_ingredient_count,
            )
        })
        .collect();
    assert_eq!(
        summary,
        vec![("900001", 2, 0), ("900002", 0, 1), ("900003", 0, 1)]
    );
    assert!(hits.iter().all(|h| h.recipe.source() == Some(RecipeSource::Mock)));
}

#[tokio::test]
async fn test_provider_search_ids_resolve_through_detail() {
    let provider = Arc::new(StubProvider::serving(vec![
        provider_recipe("abc", "Shakshuka"),
        provider_recipe("def", "Tomato Omelette"),
    ]));
    let dyn_provider: Arc<dyn RecipeProvider> = Arc::clone(&provider) as Arc<dyn RecipeProvider>;
    let resources = test_resources(memory_pool().await, Some(dyn_provider));

    let hits = resources.search.resolve(&normalize(["egg"])).await.unwrap();
    for hit in &hits {
        let recipe = resources.detail.resolve_id(&hit.recipe.id).await.unwrap();
        assert_eq!(recipe.id, hit.recipe.id);
    }
    assert_eq!(provider.fetch_calls(), 2);

    let pinned = resources.detail.resolve("provider:900001").await.unwrap_err();
    assert_eq!(pinned.code, ErrorCode::ResourceNotFound);
}
