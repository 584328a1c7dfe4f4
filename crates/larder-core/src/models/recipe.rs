// ABOUTME: Canonical Recipe record, tier-tagged identifiers, and ranked search hits
// ABOUTME: All resolver tiers normalize their payloads into these shapes before returning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Contributors

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Resolution tier that produced a recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipeSource {
    /// External recipe provider (Edamam)
    Provider,
    /// Locally indexed recipe store
    Local,
    /// Static last-resort catalog
    Mock,
}

impl RecipeSource {
    /// Tag used in explicitly tagged identifiers (`local:<id>`)
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Provider => "provider",
            Self::Local => "local",
            Self::Mock => "mock",
        }
    }

    /// Parse a tag back into a source
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "provider" => Some(Self::Provider),
            "local" => Some(Self::Local),
            "mock" => Some(Self::Mock),
            _ => None,
        }
    }
}

impl fmt::Display for RecipeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recipe identifier tagged with the tier that minted it
///
/// The `value` is the tier's own key (provider opaque id, store primary key,
/// mock literal) and is never re-derived. Identifiers built by a tier always
/// carry their `source`; identifiers parsed from untagged client input do not,
/// and the detail resolver then tries every tier that accepts the value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecipeId {
    /// Tier-native identifier
    #[serde(rename = "id")]
    pub value: String,
    /// Tier that owns the identifier, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<RecipeSource>,
}

impl RecipeId {
    /// Identifier minted by a specific tier
    pub fn new(source: RecipeSource, value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            source: Some(source),
        }
    }

    /// Identifier whose owning tier is unknown
    pub fn untagged(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            source: None,
        }
    }

    /// Parse a client-supplied identifier
    ///
    /// `local:<v>`, `provider:<v>` and `mock:<v>` pin the tier; anything else is
    /// kept verbatim as an untagged value.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the identifier is blank
    pub fn parse(raw: &str) -> AppResult<Self> {
        let raw = raw.trim();
        if let Some((tag, value)) = raw.split_once(':') {
            if let Some(source) = RecipeSource::parse(tag) {
                if value.is_empty() {
                    return Err(AppError::invalid_input(format!(
                        "Recipe id '{raw}' has an empty {tag} value"
                    )));
                }
                return Ok(Self::new(source, value));
            }
        }
        if raw.is_empty() {
            return Err(AppError::invalid_input("Recipe id cannot be empty"));
        }
        Ok(Self::untagged(raw))
    }

    /// Whether a tier may serve this identifier based on its tag alone
    #[must_use]
    pub fn may_belong_to(&self, source: RecipeSource) -> bool {
        self.source.map_or(true, |s| s == source)
    }

    /// Identifier with its tier tag prefixed, when the tier is known
    #[must_use]
    pub fn tagged(&self) -> String {
        self.source.map_or_else(
            || self.value.clone(),
            |source| format!("{source}:{}", self.value),
        )
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Canonical, source-agnostic recipe record
///
/// `image` stays absent when the source has none; placeholder substitution is
/// left to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Tier-tagged identifier (serialized as `id` + `source`)
    #[serde(flatten)]
    pub id: RecipeId,
    /// Display title
    pub title: String,
    /// Image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Ordered ingredient display lines
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Preparation text; when absent `source_url` is offered instead
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    /// Rounded calorie count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<i64>,
    /// Link to the original recipe page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    /// Preparation time, used as the final local ranking key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ready_in_minutes: Option<u32>,
}

impl Recipe {
    /// Minimal recipe with only identity and title populated
    pub fn new(id: RecipeId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            image: None,
            ingredients: Vec::new(),
            instructions: None,
            calories: None,
            source_url: None,
            ready_in_minutes: None,
        }
    }

    /// Check the identity invariant every returned recipe must satisfy
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when `id` or `title` is blank
    pub fn validate(&self) -> AppResult<()> {
        if self.id.value.trim().is_empty() {
            return Err(AppError::invalid_input("Recipe id cannot be empty"));
        }
        if self.title.trim().is_empty() {
            return Err(AppError::invalid_input(format!(
                "Recipe {} has an empty title",
                self.id
            )));
        }
        Ok(())
    }

    /// Tier that produced this recipe, when known
    #[must_use]
    pub const fn source(&self) -> Option<RecipeSource> {
        self.id.source
    }
}

/// Recipe annotated with match statistics for one ingredient query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    /// The matched recipe
    #[serde(flatten)]
    pub recipe: Recipe,
    /// Query tokens found in the recipe
    pub used_ingredient_count: usize,
    /// Recipe ingredients not covered by the query
    pub missed_ingredient_count: usize,
}

impl SearchHit {
    /// Wrap a recipe with its match counts
    #[must_use]
    pub const fn new(recipe: Recipe, used: usize, missed: usize) -> Self {
        Self {
            recipe,
            used_ingredient_count: used,
            missed_ingredient_count: missed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tagged_and_untagged_ids() {
        let tagged = RecipeId::parse("mock:900001").unwrap();
        assert_eq!(tagged.source, Some(RecipeSource::Mock));
        assert_eq!(tagged.value, "900001");

        let untagged = RecipeId::parse(" 900001 ").unwrap();
        assert_eq!(untagged.source, None);
        assert_eq!(untagged.value, "900001");

        // Unknown prefixes are part of the opaque value
        let uri =
            RecipeId::parse("http://www.edamam.com/ontologies/edamam.owl#recipe_abc").unwrap();
        assert_eq!(uri.source, None);
        assert!(uri.value.starts_with("http://"));
    }

    #[test]
    fn test_parse_rejects_blank_ids() {
        assert!(RecipeId::parse("   ").is_err());
        assert!(RecipeId::parse("local:").is_err());
    }

    #[test]
    fn test_recipe_serializes_flat_id() {
        let recipe = Recipe::new(RecipeId::new(RecipeSource::Mock, "900001"), "Toast");
        let hit = SearchHit::new(recipe, 1, 0);
        let json = serde_json::to_value(&hit).unwrap();

        assert_eq!(json["id"], "900001");
        assert_eq!(json["source"], "mock");
        assert_eq!(json["usedIngredientCount"], 1);
        assert_eq!(json["missedIngredientCount"], 0);
        assert!(json.get("image").is_none());
    }

    #[test]
    fn test_recipe_deserializes_without_source() {
        let recipe: Recipe =
            serde_json::from_str(r#"{"id":"abc","title":"Soup","image":"x.png"}"#).unwrap();
        assert_eq!(recipe.id, RecipeId::untagged("abc"));
        assert!(recipe.id.may_belong_to(RecipeSource::Local));
        assert!(recipe.validate().is_ok());
    }
}
