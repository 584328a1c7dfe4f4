// ABOUTME: Shared fixtures for Larder integration tests
// ABOUTME: In-memory databases, stub providers, seeded recipes, and bearer tokens
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Duration;
use larder_providers::RecipeProvider;
use larder_server::auth::JwtIdentityVerifier;
use larder_server::config::ServerConfig;
use larder_server::database::{self, LocalRecipeStore, NewRecipe};
use larder_server::models::{Recipe, RecipeId, RecipeSource, SearchHit};
use larder_server::resources::ServerResources;
use sqlx::SqlitePool;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub const TEST_JWT_SECRET: &str = "larder_test_secret";

/// Fresh migrated in-memory database
pub async fn memory_pool() -> SqlitePool {
    database::open("sqlite::memory:").await.unwrap()
}

/// Configuration suitable for tests
pub fn test_config() -> ServerConfig {
    ServerConfig {
        jwt_secret: TEST_JWT_SECRET.to_owned(),
        ..ServerConfig::default()
    }
}

/// Resources over `pool` with an optional provider
pub fn test_resources(
    pool: SqlitePool,
    provider: Option<Arc<dyn RecipeProvider>>,
) -> Arc<ServerResources> {
    Arc::new(ServerResources::new(test_config(), pool, provider))
}

/// `Authorization` header value for `user_id`
pub fn bearer_for(user_id: &str) -> String {
    let token = JwtIdentityVerifier::new(TEST_JWT_SECRET)
        .issue(user_id, Duration::hours(1))
        .unwrap();
    format!("Bearer {token}")
}

/// Recipe input for the local store
pub fn new_recipe(title: &str, ingredients: &[&str], ready_in_minutes: Option<u32>) -> NewRecipe {
    NewRecipe {
        title: title.to_owned(),
        image: None,
        ingredients: ingredients.iter().map(|i| (*i).to_owned()).collect(),
        instructions: None,
        calories: None,
        source_url: None,
        ready_in_minutes,
    }
}

/// Insert `recipes` and return the stored records in insertion order
pub async fn seed(pool: &SqlitePool, recipes: &[NewRecipe]) -> Vec<Recipe> {
    let store = LocalRecipeStore::new(pool.clone());
    let mut stored = Vec::with_capacity(recipes.len());
    for recipe in recipes {
        stored.push(store.insert(recipe).await.unwrap());
    }
    stored
}

/// Provider recipe with the given opaque id
pub fn provider_recipe(id: &str, title: &str) -> Recipe {
    let mut recipe = Recipe::new(RecipeId::new(RecipeSource::Provider, id), title);
    recipe.ingredients = vec!["1 tomato".to_owned(), "2 eggs".to_owned()];
    recipe.calories = Some(410);
    recipe
}

/// In-process provider returning fixed data and counting calls
#[derive(Default)]
pub struct StubProvider {
    pub hits: Option<Vec<SearchHit>>,
    pub recipes: Vec<Recipe>,
    pub search_calls: AtomicUsize,
    pub fetch_calls: AtomicUsize,
}

impl StubProvider {
    /// Provider that is down: every call yields nothing
    pub fn down() -> Self {
        Self::default()
    }

    /// Provider serving `recipes` for both search and detail
    pub fn serving(recipes: Vec<Recipe>) -> Self {
        let hits = recipes
            .iter()
            .cloned()
            .map(|recipe| SearchHit::new(recipe, 2, 0))
            .collect();
        Self {
            hits: Some(hits),
            recipes,
            ..Self::default()
        }
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecipeProvider for StubProvider {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn search_by_ingredients(&self, _tokens: &[String]) -> Option<Vec<SearchHit>> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        self.hits.clone().filter(|hits| !hits.is_empty())
    }

    async fn fetch_by_id(&self, id: &str) -> Option<Recipe> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        self.recipes.iter().find(|r| r.id.value == id).cloned()
    }
}
