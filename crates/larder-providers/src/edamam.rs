// ABOUTME: Edamam Recipe Search v2 client for ingredient search and fetch-by-id
// ABOUTME: Maps provider payloads to canonical recipes, caches responses, and swallows failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Contributors

//! Edamam Recipe Search API client
//!
//! Every request carries `type=public`, `app_id`, `app_key` as query parameters
//! and the `Edamam-Account-User` / `Accept: application/json` headers.
//!
//! - Search: `GET /api/recipes/v2?q=<tokens joined by ", ">` → `{hits: [{recipe}]}`
//! - Detail: `GET /api/recipes/v2/<id>` → `{recipe}`, or
//!   `GET /api/recipes/v2/by-uri?uri=<uri>` → `{hits: [{recipe}]}` when the id is a full URI
//!
//! The provider does not report which tokens matched, so every search hit is
//! annotated with `used = |tokens|` and `missed = 0`.

use crate::cache::TtlCache;
use crate::core::RecipeProvider;
use crate::errors::ProviderError;
use crate::http_client::{build_client, HttpClientConfig};
use async_trait::async_trait;
use larder_core::constants::{limits, provider};
use larder_core::models::{Recipe, RecipeId, RecipeSource, SearchHit};
use reqwest::{header::ACCEPT, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashSet;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Longest response body excerpt kept in a status error
const ERROR_BODY_EXCERPT: usize = 200;

/// Edamam client configuration
#[derive(Debug, Clone)]
pub struct EdamamConfig {
    /// Application id (tier disabled when absent)
    pub app_id: Option<String>,
    /// Application key (tier disabled when absent)
    pub app_key: Option<String>,
    /// `Edamam-Account-User` header value
    pub account_user: String,
    /// API base URL without trailing slash
    pub base_url: String,
    /// Per-call timeout in seconds
    pub timeout_secs: u64,
    /// Response cache TTL in seconds, `0` disables the cache
    pub cache_ttl_secs: u64,
}

impl Default for EdamamConfig {
    fn default() -> Self {
        Self {
            app_id: None,
            app_key: None,
            account_user: provider::DEFAULT_ACCOUNT_USER.to_owned(),
            base_url: provider::DEFAULT_BASE_URL.to_owned(),
            timeout_secs: limits::DEFAULT_PROVIDER_TIMEOUT_SECS,
            cache_ttl_secs: limits::DEFAULT_PROVIDER_CACHE_TTL_SECS,
        }
    }
}

impl EdamamConfig {
    /// Credentials pair when both halves are present and non-blank
    fn credentials(&self) -> Result<(&str, &str), ProviderError> {
        match (self.app_id.as_deref(), self.app_key.as_deref()) {
            (Some(id), Some(key)) if !id.trim().is_empty() && !key.trim().is_empty() => {
                Ok((id, key))
            }
            _ => Err(ProviderError::NotConfigured),
        }
    }
}

/// Search and by-uri response body
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    hits: Option<Vec<RecipeHit>>,
}

#[derive(Debug, Deserialize)]
struct RecipeHit {
    recipe: EdamamRecipe,
}

/// Fetch-by-id response body
#[derive(Debug, Deserialize)]
struct DetailResponse {
    #[serde(default)]
    recipe: Option<EdamamRecipe>,
}

/// Provider recipe payload (only the fields the canonical record needs)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EdamamRecipe {
    #[serde(default)]
    uri: Option<String>,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    ingredient_lines: Option<Vec<String>>,
    #[serde(default)]
    instructions: Option<String>,
    #[serde(default)]
    instruction_lines: Option<Vec<String>>,
    #[serde(default)]
    calories: Option<f64>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    total_time: Option<f64>,
}

impl EdamamRecipe {
    /// Convert to a canonical recipe
    ///
    /// `requested_id` keeps the caller's identifier for detail lookups so the
    /// returned recipe always answers to the id it was fetched by. Payloads with
    /// no usable id or title are dropped.
    fn into_recipe(self, requested_id: Option<&str>) -> Option<Recipe> {
        let id = match requested_id {
            Some(id) => id.to_owned(),
            None => recipe_id_from_uri(self.uri.as_deref()?).to_owned(),
        };
        let title = self.label.map(|l| l.trim().to_owned()).unwrap_or_default();
        if id.trim().is_empty() || title.is_empty() {
            return None;
        }

        let ingredients = self.ingredient_lines.unwrap_or_default();
        let instruction_lines = self.instruction_lines.unwrap_or_default();
        let instructions = instruction_fallback(
            self.instructions.as_deref(),
            &instruction_lines,
            &ingredients,
            self.url.as_deref(),
        );

        Some(Recipe {
            id: RecipeId::new(RecipeSource::Provider, id),
            title,
            image: self.image.filter(|i| !i.trim().is_empty()),
            ingredients,
            instructions,
            calories: self.calories.map(|c| c.round() as i64),
            source_url: self.url,
            ready_in_minutes: self
                .total_time
                .filter(|t| *t > 0.0)
                .map(|t| t.round() as u32),
        })
    }
}

/// Extract the opaque recipe id from a provider recipe URI
///
/// `http://www.edamam.com/ontologies/edamam.owl#recipe_<id>` yields `<id>`;
/// any other shape is kept whole.
#[must_use]
pub fn recipe_id_from_uri(uri: &str) -> &str {
    match uri.split_once(provider::RECIPE_URI_MARKER) {
        Some((_, id)) if !id.is_empty() => id,
        _ => uri,
    }
}

/// Instruction text fallback chain
///
/// Provider instructions, then joined ingredient lines, then a pointer to the
/// original page, then nothing.
#[must_use]
pub fn instruction_fallback(
    instructions: Option<&str>,
    instruction_lines: &[String],
    ingredient_lines: &[String],
    source_url: Option<&str>,
) -> Option<String> {
    if let Some(text) = instructions.map(str::trim).filter(|t| !t.is_empty()) {
        return Some(text.to_owned());
    }
    if !instruction_lines.is_empty() {
        return Some(instruction_lines.join("\n"));
    }
    if !ingredient_lines.is_empty() {
        return Some(ingredient_lines.join("\n"));
    }
    source_url
        .filter(|u| !u.trim().is_empty())
        .map(|u| format!("Open original: {u}"))
}

/// Edamam Recipe Search API client
pub struct EdamamClient {
    config: EdamamConfig,
    http_client: reqwest::Client,
    search_cache: TtlCache<Vec<SearchHit>>,
    detail_cache: TtlCache<Recipe>,
}

impl EdamamClient {
    /// Create a new client; requests are bounded by `config.timeout_secs`
    #[must_use]
    pub fn new(mut config: EdamamConfig) -> Self {
        config.base_url = config.base_url.trim_end_matches('/').to_owned();
        let http_client = build_client(HttpClientConfig::with_timeout_secs(config.timeout_secs));
        let ttl = Duration::from_secs(config.cache_ttl_secs);

        Self {
            config,
            http_client,
            search_cache: TtlCache::new(ttl),
            detail_cache: TtlCache::new(ttl),
        }
    }

    /// Whether credentials are present
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.config.credentials().is_ok()
    }

    /// Issue one GET and decode the body; `Ok(None)` on 404
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<Option<T>, ProviderError> {
        let (app_id, app_key) = self.config.credentials()?;

        let mut params: Vec<(&str, &str)> =
            vec![("type", "public"), ("app_id", app_id), ("app_key", app_key)];
        params.extend_from_slice(query);

        let response = self
            .http_client
            .get(url)
            .query(&params)
            .header(provider::ACCOUNT_USER_HEADER, &self.config.account_user)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| ProviderError::from_reqwest(&e))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let body: String = response
                .text()
                .await
                .unwrap_or_default()
                .chars()
                .take(ERROR_BODY_EXCERPT)
                .collect();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ProviderError::from_reqwest(&e))?;
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|e| ProviderError::Decode(e.to_string()))
    }

    /// Search by tokens, reporting failures
    ///
    /// # Errors
    ///
    /// Returns a classified `ProviderError` when the call cannot be completed
    pub async fn try_search(&self, tokens: &[String]) -> Result<Vec<SearchHit>, ProviderError> {
        if tokens.is_empty() {
            return Err(ProviderError::EmptyQuery);
        }
        self.config.credentials()?;

        let query = tokens.join(", ");
        if let Some(hits) = self.search_cache.get(&query).await {
            debug!(query = %query, hits = hits.len(), "Provider search served from cache");
            return Ok(hits);
        }

        let url = format!("{}{}", self.config.base_url, provider::RECIPES_PATH);
        let response: Option<SearchResponse> = self.get_json(&url, &[("q", &query)]).await?;

        let used = tokens.len();
        let mut seen = HashSet::new();
        let hits: Vec<SearchHit> = response
            .and_then(|r| r.hits)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|hit| hit.recipe.into_recipe(None))
            .filter(|recipe| seen.insert(recipe.id.value.clone()))
            .map(|recipe| SearchHit::new(recipe, used, 0))
            .collect();

        if !hits.is_empty() {
            self.search_cache.insert(query, hits.clone()).await;
        }
        Ok(hits)
    }

    /// Fetch one recipe, reporting failures; `Ok(None)` when the provider has no such recipe
    ///
    /// # Errors
    ///
    /// Returns a classified `ProviderError` when the call cannot be completed
    pub async fn try_fetch(&self, id: &str) -> Result<Option<Recipe>, ProviderError> {
        let id = id.trim();
        if id.is_empty() {
            return Ok(None);
        }
        self.config.credentials()?;

        if let Some(recipe) = self.detail_cache.get(id).await {
            debug!(recipe_id = %id, "Provider detail served from cache");
            return Ok(Some(recipe));
        }

        let recipe = if id.contains("://") {
            let url = format!("{}{}", self.config.base_url, provider::BY_URI_PATH);
            let response: Option<SearchResponse> = self.get_json(&url, &[("uri", id)]).await?;
            response
                .and_then(|r| r.hits)
                .and_then(|hits| hits.into_iter().next())
                .and_then(|hit| hit.recipe.into_recipe(Some(id)))
        } else {
            let url = format!(
                "{}{}/{}",
                self.config.base_url,
                provider::RECIPES_PATH,
                urlencoding::encode(id)
            );
            let response: Option<DetailResponse> = self.get_json(&url, &[]).await?;
            response
                .and_then(|r| r.recipe)
                .and_then(|recipe| recipe.into_recipe(Some(id)))
        };

        if let Some(recipe) = &recipe {
            self.detail_cache.insert(id.to_owned(), recipe.clone()).await;
        }
        Ok(recipe)
    }

    /// Drop cached responses
    pub async fn clear_caches(&self) {
        self.search_cache.clear().await;
        self.detail_cache.clear().await;
    }

    fn log_failure(operation: &str, error: &ProviderError) {
        match error {
            ProviderError::NotConfigured => {
                debug!(operation, "Provider tier skipped: credentials not configured");
            }
            e if e.is_transient() => {
                warn!(operation, error = %e, "Provider unavailable, falling through");
            }
            e => {
                warn!(
                    operation,
                    error = %e,
                    transient = false,
                    "Provider call failed, falling through"
                );
            }
        }
    }
}

#[async_trait]
impl RecipeProvider for EdamamClient {
    fn name(&self) -> &'static str {
        provider::SERVICE_NAME
    }

    async fn search_by_ingredients(&self, tokens: &[String]) -> Option<Vec<SearchHit>> {
        match self.try_search(tokens).await {
            Ok(hits) if !hits.is_empty() => {
                info!(hits = hits.len(), "Provider search succeeded");
                Some(hits)
            }
            Ok(_) => {
                debug!("Provider search returned no hits");
                None
            }
            Err(e) => {
                Self::log_failure("search", &e);
                None
            }
        }
    }

    async fn fetch_by_id(&self, id: &str) -> Option<Recipe> {
        match self.try_fetch(id).await {
            Ok(found) => found,
            Err(e) => {
                Self::log_failure("fetch_by_id", &e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_id_from_uri() {
        assert_eq!(
            recipe_id_from_uri("http://www.edamam.com/ontologies/edamam.owl#recipe_abc123"),
            "abc123"
        );
        assert_eq!(recipe_id_from_uri("abc123"), "abc123");
        assert_eq!(recipe_id_from_uri("x#recipe_"), "x#recipe_");
    }

    #[test]
    fn test_instruction_fallback_order() {
        let lines = vec!["2 eggs".to_owned(), "1 tomato".to_owned()];

        assert_eq!(
            instruction_fallback(Some(" Cook. "), &[], &lines, Some("https://x")),
            Some("Cook.".to_owned())
        );
        assert_eq!(
            instruction_fallback(Some("  "), &[], &lines, Some("https://x")),
            Some("2 eggs\n1 tomato".to_owned())
        );
        assert_eq!(
            instruction_fallback(None, &[], &[], Some("https://x")),
            Some("Open original: https://x".to_owned())
        );
        assert_eq!(instruction_fallback(None, &[], &[], None), None);
    }

    #[test]
    fn test_payload_without_title_is_dropped() {
        let payload: EdamamRecipe =
            serde_json::from_str(r#"{"uri":"u#recipe_1","label":"  "}"#).unwrap();
        assert!(payload.into_recipe(None).is_none());
    }

    #[test]
    fn test_payload_mapping_rounds_calories() {
        let payload: EdamamRecipe = serde_json::from_str(
            r#"{"uri":"u#recipe_1","label":"Shakshuka","calories":412.6,
                "ingredientLines":["2 eggs"],"url":"https://example.com/s","totalTime":0}"#,
        )
        .unwrap();
        let recipe = payload.into_recipe(None).unwrap();

        assert_eq!(recipe.id, RecipeId::new(RecipeSource::Provider, "1"));
        assert_eq!(recipe.calories, Some(413));
        assert_eq!(recipe.instructions.as_deref(), Some("2 eggs"));
        assert_eq!(recipe.ready_in_minutes, None);
        assert!(recipe.image.is_none());
    }
}
