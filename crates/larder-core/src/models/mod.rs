// ABOUTME: Canonical source-agnostic models shared by every recipe tier
// ABOUTME: Re-exports recipe, identifier, search hit, and favorite snapshot types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Contributors

/// Favorite snapshot model
pub mod favorite;
/// Recipe, identifier, and search hit models
pub mod recipe;

pub use favorite::FavoriteEntry;
pub use recipe::{Recipe, RecipeId, RecipeSource, SearchHit};
