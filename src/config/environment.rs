// ABOUTME: Environment configuration for deployment-specific recipe service settings
// ABOUTME: Parses env vars (with optional .env) into a validated ServerConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Contributors

//! Environment-based configuration management

use crate::constants::{env_names, limits};
use anyhow::{bail, Context, Result};
use larder_providers::EdamamConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use tracing::{info, warn};

/// Default listen port
pub const DEFAULT_HTTP_PORT: u16 = 5000;

/// Default local store location
pub const DEFAULT_DATABASE_URL: &str = "sqlite:./larder.db";

/// Development-only token secret; production startups warn when it is still in use
pub const DEFAULT_JWT_SECRET: &str = "larder_dev_secret";

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Server configuration loaded from the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Local recipe store and account favorites database
    pub database_url: String,
    /// External provider settings
    pub provider: EdamamConfig,
    /// Local index result cap
    pub local_search_limit: usize,
    /// HS256 secret for identity tokens
    pub jwt_secret: String,
    /// Allowed CORS origins (`*` allows any)
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: DEFAULT_HTTP_PORT,
            environment: Environment::Development,
            database_url: DEFAULT_DATABASE_URL.to_owned(),
            provider: EdamamConfig::default(),
            local_search_limit: limits::LOCAL_SEARCH_LIMIT,
            jwt_secret: DEFAULT_JWT_SECRET.to_owned(),
            cors_origins: vec!["*".to_owned()],
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed or fails validation
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        if let Err(e) = dotenvy::dotenv() {
            warn!("No .env file found or failed to load: {}", e);
        }

        let defaults = EdamamConfig::default();
        let config = Self {
            http_port: env_var_or(env_names::HTTP_PORT, &DEFAULT_HTTP_PORT.to_string())
                .parse()
                .context("Invalid HTTP_PORT value")?,
            environment: Environment::from_str_or_default(&env_var_or(
                env_names::ENVIRONMENT,
                "development",
            )),
            database_url: env_var_or(env_names::DATABASE_URL, DEFAULT_DATABASE_URL),
            provider: EdamamConfig {
                app_id: optional_env_var(env_names::EDAMAM_APP_ID),
                app_key: optional_env_var(env_names::EDAMAM_APP_KEY),
                account_user: env_var_or(env_names::EDAMAM_ACCOUNT_USER, &defaults.account_user),
                base_url: env_var_or(env_names::EDAMAM_BASE_URL, &defaults.base_url),
                timeout_secs: env_var_or(
                    env_names::PROVIDER_TIMEOUT_SECS,
                    &defaults.timeout_secs.to_string(),
                )
                .parse()
                .context("Invalid PROVIDER_TIMEOUT_SECS value")?,
                cache_ttl_secs: env_var_or(
                    env_names::PROVIDER_CACHE_TTL_SECS,
                    &defaults.cache_ttl_secs.to_string(),
                )
                .parse()
                .context("Invalid PROVIDER_CACHE_TTL_SECS value")?,
            },
            local_search_limit: env_var_or(
                env_names::LOCAL_SEARCH_LIMIT,
                &limits::LOCAL_SEARCH_LIMIT.to_string(),
            )
            .parse()
            .context("Invalid LOCAL_SEARCH_LIMIT value")?,
            jwt_secret: env_var_or(env_names::JWT_SECRET, DEFAULT_JWT_SECRET),
            cors_origins: parse_origins(&env_var_or(env_names::CORS_ORIGINS, "*")),
        };

        config.validate()?;
        info!("{}", config.summary());
        Ok(config)
    }

    /// Validate value ranges and warn about development defaults in production
    ///
    /// # Errors
    ///
    /// Returns an error when a value is out of range
    pub fn validate(&self) -> Result<()> {
        let timeout = self.provider.timeout_secs;
        if !(1..=limits::MAX_PROVIDER_TIMEOUT_SECS).contains(&timeout) {
            bail!(
                "PROVIDER_TIMEOUT_SECS must be between 1 and {}, got {timeout}",
                limits::MAX_PROVIDER_TIMEOUT_SECS
            );
        }
        if self.local_search_limit == 0 {
            bail!("LOCAL_SEARCH_LIMIT must be greater than zero");
        }
        if self.jwt_secret.trim().is_empty() {
            bail!("JWT_SECRET cannot be empty");
        }

        if self.environment.is_production() {
            if self.jwt_secret == DEFAULT_JWT_SECRET {
                warn!("JWT_SECRET is using the development default in production");
            }
            if self.cors_origins.iter().any(|o| o == "*") {
                warn!("CORS_ORIGINS allows any origin in production");
            }
        }
        if !self.provider_configured() {
            warn!(
                "Provider credentials not set; searches use the local store and mock catalog only"
            );
        }
        Ok(())
    }

    /// Whether both provider credentials are present
    #[must_use]
    pub fn provider_configured(&self) -> bool {
        self.provider.app_id.is_some() && self.provider.app_key.is_some()
    }

    /// Configuration summary for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Larder Configuration:\n\
             - HTTP Port: {}\n\
             - Environment: {}\n\
             - Database: {}\n\
             - Provider: {}\n\
             - Provider Timeout: {}s\n\
             - Provider Cache TTL: {}s\n\
             - Local Search Limit: {}\n\
             - CORS Origins: {}",
            self.http_port,
            self.environment,
            self.database_url,
            if self.provider_configured() {
                "Enabled"
            } else {
                "Disabled"
            },
            self.provider.timeout_secs,
            self.provider.cache_ttl_secs,
            self.local_search_limit,
            self.cors_origins.join(", "),
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Get a non-blank environment variable
fn optional_env_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

/// Parse comma-separated CORS origins
fn parse_origins(origins_str: &str) -> Vec<String> {
    if origins_str.trim() == "*" {
        vec!["*".to_owned()]
    } else {
        origins_str
            .split(',')
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .collect()
    }
}
