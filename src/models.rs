// ABOUTME: Canonical recipe models for the server crate, re-exported from the shared core crate
// ABOUTME: Recipe, tier-tagged RecipeId, SearchHit, and FavoriteEntry snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Contributors

pub use larder_core::models::*;
