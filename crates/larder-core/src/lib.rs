// ABOUTME: Core types and constants for the Larder recipe resolution service
// ABOUTME: Foundation crate with error handling, canonical recipe models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Contributors

#![deny(unsafe_code)]

//! # Larder Core
//!
//! Foundation crate providing shared types for the Larder workspace. Every
//! recipe tier (provider, local store, mock catalog) produces the models defined
//! here, so callers never see a source-specific shape.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **models**: Canonical `Recipe`, `SearchHit`, `FavoriteEntry` and identifier types
//! - **constants**: Limits, mock identifiers, and environment variable names

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Canonical recipe, search hit, and favorite models
pub mod models;

/// Application constants organized by domain
pub mod constants;
