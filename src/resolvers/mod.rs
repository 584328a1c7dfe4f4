// ABOUTME: Ordered tier orchestration for ingredient search and single-recipe lookup
// ABOUTME: Strict short-circuit priority: the first tier with a result wins, outputs are never merged
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Contributors

/// Single-recipe resolution
pub mod detail;
/// Ingredient search resolution
pub mod search;

pub use detail::DetailResolver;
pub use search::SearchResolver;
