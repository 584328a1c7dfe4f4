// ABOUTME: Configuration module for the recipe service
// ABOUTME: Environment-only settings for HTTP, local store, provider, identity, and CORS
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Contributors

/// Environment and server configuration
pub mod environment;

pub use environment::{Environment, ServerConfig};
