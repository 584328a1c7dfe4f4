// ABOUTME: Ingredient normalization into canonical lowercase, trimmed, de-duplicated tokens
// ABOUTME: Accepts comma-joined strings or pre-split lists; an empty result is a caller error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Contributors

use crate::errors::{AppError, AppResult};
use serde::Deserialize;
use std::collections::HashSet;

/// Raw ingredient input as clients send it
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum IngredientInput {
    /// One comma-joined string (`"Tomato, egg"`)
    Joined(String),
    /// Already split entries, each of which may still contain commas
    List(Vec<String>),
}

impl IngredientInput {
    /// Normalize this input into tokens
    #[must_use]
    pub fn tokens(&self) -> Vec<String> {
        match self {
            Self::Joined(raw) => normalize([raw.as_str()]),
            Self::List(items) => normalize(items.iter().map(String::as_str)),
        }
    }
}

/// Canonicalize raw ingredient entries
///
/// Entries are split on commas, trimmed, lowercased, and empties dropped.
/// The first occurrence of each token wins, so input order is preserved.
pub fn normalize<'a, I>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    raw.into_iter()
        .flat_map(|entry| entry.split(','))
        .map(|token| token.trim().to_lowercase())
        .filter(|token| !token.is_empty())
        .filter(|token| seen.insert(token.clone()))
        .collect()
}

/// Normalize and reject input that yields no tokens
///
/// # Errors
///
/// Returns `InvalidInput` when nothing survives normalization
pub fn require_tokens<'a, I>(raw: I) -> AppResult<Vec<String>>
where
    I: IntoIterator<Item = &'a str>,
{
    non_empty(normalize(raw))
}

/// Reject an already normalized, empty token set
///
/// # Errors
///
/// Returns `InvalidInput` when `tokens` is empty
pub fn non_empty(tokens: Vec<String>) -> AppResult<Vec<String>> {
    if tokens.is_empty() {
        return Err(AppError::invalid_input(
            "Provide at least one non-empty ingredient",
        ));
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_trims_lowercases_and_dedupes_in_order() {
        let tokens = normalize(["  Tomato", "EGG ", "tomato", "", "Onion"]);
        assert_eq!(tokens, vec!["tomato", "egg", "onion"]);
    }

    #[test]
    fn test_splits_comma_joined_input() {
        let tokens = normalize(["Rice, potato,, ", "garlic,Rice"]);
        assert_eq!(tokens, vec!["rice", "potato", "garlic"]);
    }

    #[test]
    fn test_whitespace_only_input_is_rejected() {
        let err = require_tokens(["  ", ",", ""]).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_ingredient_input_shapes() {
        let joined: IngredientInput = serde_json::from_str(r#""Egg, Tomato""#).unwrap();
        assert_eq!(joined.tokens(), vec!["egg", "tomato"]);

        let list: IngredientInput = serde_json::from_str(r#"["Egg", " tomato "]"#).unwrap();
        assert_eq!(list.tokens(), vec!["egg", "tomato"]);
    }

    #[test]
    fn test_multi_word_tokens_are_kept_whole() {
        assert_eq!(normalize(["Olive Oil", "green chili"]), vec!["olive oil", "green chili"]);
    }
}
