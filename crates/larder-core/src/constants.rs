// ABOUTME: Application constants grouped by domain (limits, provider, mock catalog, env names)
// ABOUTME: Shared across the providers crate, resolvers, routes, and binaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Contributors

/// Result size and timing limits
pub mod limits {
    /// Maximum hits returned by the local index tier
    pub const LOCAL_SEARCH_LIMIT: usize = 50;

    /// Maximum entries returned by the suggestion index
    pub const SUGGESTION_LIMIT: usize = 10;

    /// Default per-call provider timeout in seconds
    pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 12;

    /// Upper bound accepted for the provider timeout
    pub const MAX_PROVIDER_TIMEOUT_SECS: u64 = 60;

    /// Default provider connect timeout in seconds
    pub const DEFAULT_PROVIDER_CONNECT_TIMEOUT_SECS: u64 = 5;

    /// Default provider response cache TTL in seconds
    pub const DEFAULT_PROVIDER_CACHE_TTL_SECS: u64 = 600;

    /// Maximum entries held by each provider response cache
    pub const DEFAULT_PROVIDER_CACHE_CAPACITY: usize = 1000;
}

/// External recipe provider (Edamam Recipe Search v2) constants
pub mod provider {
    /// Display name used in logs and error messages
    pub const SERVICE_NAME: &str = "Edamam API";

    /// Default API base URL
    pub const DEFAULT_BASE_URL: &str = "https://api.edamam.com";

    /// Recipe search path (also prefix for fetch-by-id)
    pub const RECIPES_PATH: &str = "/api/recipes/v2";

    /// Recipe lookup-by-URI path
    pub const BY_URI_PATH: &str = "/api/recipes/v2/by-uri";

    /// Default value for the account user header
    pub const DEFAULT_ACCOUNT_USER: &str = "dev_user";

    /// Header naming the account user on every request
    pub const ACCOUNT_USER_HEADER: &str = "Edamam-Account-User";

    /// Marker separating the opaque recipe id inside a recipe URI
    pub const RECIPE_URI_MARKER: &str = "#recipe_";
}

/// Literal identifiers of the static fallback catalog
pub mod mock {
    /// Quick Tomato Egg Stir-fry
    pub const TOMATO_EGG_ID: &str = "900001";
    /// Simple Rice & Veg
    pub const RICE_VEG_ID: &str = "900002";
    /// Garlic Butter Toast
    pub const GARLIC_TOAST_ID: &str = "900003";
}

/// Environment variable names
pub mod env_names {
    /// HTTP listen port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Database URL for the local store and account favorites
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Provider application id
    pub const EDAMAM_APP_ID: &str = "EDAMAM_APP_ID";
    /// Provider application key
    pub const EDAMAM_APP_KEY: &str = "EDAMAM_APP_KEY";
    /// Provider account user header value
    pub const EDAMAM_ACCOUNT_USER: &str = "EDAMAM_ACCOUNT_USER";
    /// Provider base URL override
    pub const EDAMAM_BASE_URL: &str = "EDAMAM_BASE_URL";
    /// Provider per-call timeout
    pub const PROVIDER_TIMEOUT_SECS: &str = "PROVIDER_TIMEOUT_SECS";
    /// Provider response cache TTL
    pub const PROVIDER_CACHE_TTL_SECS: &str = "PROVIDER_CACHE_TTL_SECS";
    /// Local index result cap
    pub const LOCAL_SEARCH_LIMIT: &str = "LOCAL_SEARCH_LIMIT";
    /// Identity token secret
    pub const JWT_SECRET: &str = "JWT_SECRET";
    /// Allowed CORS origins
    pub const CORS_ORIGINS: &str = "CORS_ORIGINS";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Service identity used in structured logs
pub mod service_names {
    /// Server binary service name
    pub const LARDER_SERVER: &str = "larder-server";
}
