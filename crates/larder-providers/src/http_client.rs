// ABOUTME: HTTP client construction for provider API calls with bounded timeouts
// ABOUTME: A timed-out call is treated as a failed tier by the resolvers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Contributors

use larder_core::constants::limits;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use tracing::warn;

/// Timeout settings for a provider client
#[derive(Debug, Clone, Copy)]
pub struct HttpClientConfig {
    /// Whole-request timeout
    pub timeout: Duration,
    /// TCP/TLS connect timeout
    pub connect_timeout: Duration,
}

impl HttpClientConfig {
    /// Config with the given request timeout and the default connect timeout
    #[must_use]
    pub fn with_timeout_secs(timeout_secs: u64) -> Self {
        let connect = limits::DEFAULT_PROVIDER_CONNECT_TIMEOUT_SECS.min(timeout_secs);
        Self {
            timeout: Duration::from_secs(timeout_secs),
            connect_timeout: Duration::from_secs(connect),
        }
    }
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self::with_timeout_secs(limits::DEFAULT_PROVIDER_TIMEOUT_SECS)
    }
}

/// Build a pooled client honoring the configured timeouts
///
/// Falls back to reqwest's default client if the builder fails (TLS backend
/// initialization), which keeps the provider tier usable rather than aborting.
#[must_use]
pub fn build_client(config: HttpClientConfig) -> Client {
    ClientBuilder::new()
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .build()
        .unwrap_or_else(|e| {
            warn!(error = %e, "Failed to build provider HTTP client, using defaults");
            Client::new()
        })
}
