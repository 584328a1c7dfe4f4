// ABOUTME: Fixed three-recipe catalog used as the last-resort search and detail tier
// ABOUTME: Search always returns every entry so a non-empty query never dead-ends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Contributors

use super::{DetailTier, SearchTier};
use crate::constants::mock;
use crate::models::{Recipe, RecipeId, RecipeSource, SearchHit};
use async_trait::async_trait;

/// One literal catalog entry
struct MockEntry {
    id: &'static str,
    title: &'static str,
    thumbnail: &'static str,
    image: &'static str,
    /// Constituent ingredients matched against query tokens
    key_ingredients: &'static [&'static str],
    missed: usize,
    ingredients: &'static [&'static str],
    instructions: &'static str,
    calories: i64,
}

impl MockEntry {
    fn recipe(&self, image: &str) -> Recipe {
        Recipe {
            id: RecipeId::new(RecipeSource::Mock, self.id),
            title: self.title.to_owned(),
            image: Some(image.to_owned()),
            ingredients: self.ingredients.iter().map(|i| (*i).to_owned()).collect(),
            instructions: Some(self.instructions.to_owned()),
            calories: Some(self.calories),
            source_url: None,
            ready_in_minutes: None,
        }
    }

    fn used(&self, tokens: &[String]) -> usize {
        tokens
            .iter()
            .filter(|t| self.key_ingredients.contains(&t.as_str()))
            .count()
    }
}

static ENTRIES: [MockEntry; 3] = [
    MockEntry {
        id: mock::TOMATO_EGG_ID,
        title: "Quick Tomato Egg Stir-fry",
        thumbnail: "https://via.placeholder.com/400x250?text=Tomato+Egg",
        image: "https://via.placeholder.com/800x500?text=Tomato+Egg",
        key_ingredients: &["tomato", "egg"],
        missed: 0,
        ingredients: &["2 tomatoes, chopped", "2 eggs", "1 tbsp oil", "salt"],
        instructions: "Heat oil.\nCook tomatoes.\nAdd eggs and scramble.\nSeason and serve.",
        calories: 200,
    },
    MockEntry {
        id: mock::RICE_VEG_ID,
        title: "Simple Rice & Veg",
        thumbnail: "https://via.placeholder.com/400x250?text=Rice+Veg",
        image: "https://via.placeholder.com/800x500?text=Rice+Veg",
        key_ingredients: &["rice", "potato"],
        missed: 1,
        ingredients: &["1 cup rice", "1 potato", "salt", "oil"],
        instructions: "Boil rice.\nSauté vegetables.\nMix and serve.",
        calories: 320,
    },
    MockEntry {
        id: mock::GARLIC_TOAST_ID,
        title: "Garlic Butter Toast",
        thumbnail: "https://via.placeholder.com/400x250?text=Garlic+Toast",
        image: "https://via.placeholder.com/800x500?text=Garlic+Toast",
        key_ingredients: &["bread", "garlic", "butter"],
        missed: 1,
        ingredients: &["Bread slices", "Garlic", "Butter"],
        instructions: "Toast bread.\nSpread garlic butter.\nServe hot.",
        calories: 150,
    },
];

/// Static last-resort catalog
#[derive(Debug, Clone, Copy, Default)]
pub struct MockCatalog;

impl MockCatalog {
    /// Every entry, in catalog order, scored against `tokens`
    ///
    /// `missed` is a fixed per-entry value rather than a computed count.
    #[must_use]
    pub fn search_all(tokens: &[String]) -> Vec<SearchHit> {
        ENTRIES
            .iter()
            .map(|entry| {
                SearchHit::new(
                    entry.recipe(entry.thumbnail),
                    entry.used(tokens),
                    entry.missed,
                )
            })
            .collect()
    }

    /// Direct lookup by literal id
    #[must_use]
    pub fn get(id: &str) -> Option<Recipe> {
        ENTRIES
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.recipe(entry.image))
    }

    /// Catalog identifiers in order
    pub fn ids() -> impl Iterator<Item = &'static str> {
        ENTRIES.iter().map(|entry| entry.id)
    }
}

#[async_trait]
impl SearchTier for MockCatalog {
    fn source(&self) -> RecipeSource {
        RecipeSource::Mock
    }

    async fn search(&self, tokens: &[String]) -> Option<Vec<SearchHit>> {
        Some(Self::search_all(tokens))
    }
}

#[async_trait]
impl DetailTier for MockCatalog {
    fn source(&self) -> RecipeSource {
        RecipeSource::Mock
    }

    async fn fetch(&self, id: &str) -> Option<Recipe> {
        Self::get(id)
    }
}
