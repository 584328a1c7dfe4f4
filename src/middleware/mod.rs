// ABOUTME: HTTP middleware layers applied around the recipe API router
// ABOUTME: Currently cross-origin access control
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Contributors

/// Cross-origin resource sharing
pub mod cors;

pub use cors::setup_cors;
