// ABOUTME: CORS layer for the recipe API, driven by the configured origin allow-list
// ABOUTME: A wildcard or empty list allows any origin; otherwise only listed origins pass
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Contributors

use http::{header::HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// CORS layer for `origins` (from `CORS_ORIGINS`)
///
/// ```bash
/// # any origin (development)
/// export CORS_ORIGINS="*"
///
/// # explicit list
/// export CORS_ORIGINS="https://app.example.com,http://localhost:3000"
/// ```
#[must_use]
pub fn setup_cors(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.is_empty() || origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| HeaderValue::from_str(origin.trim()).ok())
            .collect();

        if parsed.is_empty() {
            AllowOrigin::any()
        } else {
            AllowOrigin::list(parsed)
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("authorization"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
        ])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
}
