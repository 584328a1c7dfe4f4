// ABOUTME: Output formatting helpers for larder-cli
// ABOUTME: Prints search hits, recipe details, and favorites lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Contributors

use larder_server::models::{FavoriteEntry, Recipe, SearchHit};

/// Print ranked search hits
pub fn display_search_hits(tokens: &[String], hits: &[SearchHit]) {
    println!("\n{} recipes for: {}", hits.len(), tokens.join(", "));
    println!("{}", "=".repeat(60));
    for (rank, hit) in hits.iter().enumerate() {
        println!(
            "{:>3}. {} [{}]  uses {} / missing {}",
            rank + 1,
            hit.recipe.title,
            hit.recipe.id.tagged(),
            hit.used_ingredient_count,
            hit.missed_ingredient_count
        );
    }
}

/// Print a full recipe
pub fn display_recipe(recipe: &Recipe) {
    println!("\n{}", recipe.title);
    println!("{}", "=".repeat(60));
    println!("   Id: {}", recipe.id.tagged());
    if let Some(calories) = recipe.calories {
        println!("   Calories: {calories}");
    }
    if let Some(minutes) = recipe.ready_in_minutes {
        println!("   Ready in: {minutes} min");
    }
    if let Some(image) = &recipe.image {
        println!("   Image: {image}");
    }

    println!("\nIngredients:");
    for line in &recipe.ingredients {
        println!("  - {line}");
    }

    match (&recipe.instructions, &recipe.source_url) {
        (Some(instructions), _) => println!("\nInstructions:\n{instructions}"),
        (None, Some(url)) => println!("\nFull instructions: {url}"),
        (None, None) => {}
    }
}

/// Print favorite snapshots
pub fn display_favorites(favorites: &[FavoriteEntry]) {
    if favorites.is_empty() {
        println!("No favorites yet");
        return;
    }
    println!("\nFavorites ({})", favorites.len());
    println!("{}", "=".repeat(60));
    for entry in favorites {
        println!("   {}  {}", entry.id, entry.title);
    }
}
