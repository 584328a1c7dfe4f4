// ABOUTME: Device favorites commands for larder-cli
// ABOUTME: The resolved recipe is passed straight into the favorites store, never stashed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Contributors

use larder_server::{
    errors::AppResult,
    favorites::{DeviceFavorites, FavoritesStore},
    models::RecipeId,
    resources::ServerResources,
};
use tracing::info;

use crate::helpers::display::{display_favorites, display_recipe};

/// Print favorites, optionally resolving full details
pub async fn list(
    resources: &ServerResources,
    store: &DeviceFavorites,
    details: bool,
) -> AppResult<()> {
    let favorites = store.list().await?;
    if !details {
        display_favorites(&favorites);
        return Ok(());
    }

    let ids: Vec<String> = favorites.into_iter().map(|entry| entry.id).collect();
    let recipes = resources.detail.resolve_many(&ids).await;
    if recipes.len() < ids.len() {
        println!(
            "({} of {} favorites could not be resolved)",
            ids.len() - recipes.len(),
            ids.len()
        );
    }
    for recipe in &recipes {
        display_recipe(recipe);
    }
    Ok(())
}

/// Resolve `id` and add the result
pub async fn add(resources: &ServerResources, store: &DeviceFavorites, id: &str) -> AppResult<()> {
    let recipe = resources.detail.resolve(id).await?;
    let favorites = store.add(&recipe).await?;
    info!(path = %store.path().display(), recipe_id = %recipe.id, "Favorite added");

    println!("Added \"{}\"", recipe.title);
    display_favorites(&favorites);
    Ok(())
}

/// Remove `id`, tier-tagged or not
pub async fn remove(store: &DeviceFavorites, id: &str) -> AppResult<()> {
    let id = RecipeId::parse(id)?;
    let favorites = store.remove(&id.value).await?;
    display_favorites(&favorites);
    Ok(())
}

/// Resolve `id` and flip its favorite state
pub async fn toggle(
    resources: &ServerResources,
    store: &DeviceFavorites,
    id: &str,
) -> AppResult<()> {
    let recipe = resources.detail.resolve(id).await?;
    let outcome = store.toggle(&recipe).await?;

    let verb = if outcome.favorited { "Added" } else { "Removed" };
    println!("{verb} \"{}\"", recipe.title);
    display_favorites(&outcome.favorites);
    Ok(())
}
