// ABOUTME: Shared server resources wired once at startup and handed to every route
// ABOUTME: Builds the resolver tier chains from configuration and the opened database pool
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Contributors

use crate::auth::{IdentityVerifier, JwtIdentityVerifier};
use crate::config::ServerConfig;
use crate::database::LocalRecipeStore;
use crate::resolvers::{DetailResolver, SearchResolver};
use crate::suggestions::SuggestionIndex;
use crate::tiers::{LocalIndexSearch, ProviderTier};
use larder_providers::{EdamamClient, RecipeProvider};
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::{info, warn};

/// Everything a request handler needs, shared behind an `Arc`
pub struct ServerResources {
    /// Validated configuration
    pub config: Arc<ServerConfig>,
    /// Local store and account favorites database
    pub pool: SqlitePool,
    /// Provider, local, mock search chain
    pub search: SearchResolver,
    /// Local, provider, mock detail chain
    pub detail: DetailResolver,
    /// Ingredient suggestions
    pub suggestions: SuggestionIndex,
    /// Bearer token verification for account favorites
    pub identity: Arc<dyn IdentityVerifier>,
}

impl ServerResources {
    /// Wire resolvers around `pool` and an optional provider
    #[must_use]
    pub fn new(
        config: ServerConfig,
        pool: SqlitePool,
        provider: Option<Arc<dyn RecipeProvider>>,
    ) -> Self {
        let store = LocalRecipeStore::new(pool.clone());
        let local = LocalIndexSearch::new(store.clone(), config.local_search_limit);
        let provider = provider.map(ProviderTier::new);

        let identity: Arc<dyn IdentityVerifier> =
            Arc::new(JwtIdentityVerifier::new(&config.jwt_secret));

        Self {
            search: SearchResolver::standard(provider.clone(), Some(local.clone())),
            detail: DetailResolver::standard(Some(local), provider),
            suggestions: SuggestionIndex::with_store(store),
            identity,
            pool,
            config: Arc::new(config),
        }
    }

    /// Wire resolvers, creating the Edamam client when credentials are configured
    #[must_use]
    pub fn from_config(config: ServerConfig, pool: SqlitePool) -> Self {
        let provider: Option<Arc<dyn RecipeProvider>> = if config.provider_configured() {
            info!(base_url = %config.provider.base_url, "Recipe provider tier enabled");
            Some(Arc::new(EdamamClient::new(config.provider.clone())))
        } else {
            warn!("Provider credentials missing, searching local store and mock catalog only");
            None
        };
        Self::new(config, pool, provider)
    }

    /// Replace the identity verifier
    #[must_use]
    pub fn with_identity(mut self, identity: Arc<dyn IdentityVerifier>) -> Self {
        self.identity = identity;
        self
    }
}
