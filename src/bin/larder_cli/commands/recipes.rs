// ABOUTME: Recipe lookup commands for larder-cli
// ABOUTME: Handles search, show, and suggest through the shared resolvers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Contributors

use larder_server::{errors::AppResult, ingredients::require_tokens, resources::ServerResources};
use tracing::info;

use crate::helpers::display::{display_recipe, display_search_hits};

/// Search by ingredients and print the ranked hits
pub async fn search(resources: &ServerResources, ingredients: &[String]) -> AppResult<()> {
    let tokens = require_tokens(ingredients.iter().map(String::as_str))?;
    info!(tokens = ?tokens, "Searching");

    let hits = resources.search.resolve(&tokens).await?;
    display_search_hits(&tokens, &hits);
    Ok(())
}

/// Resolve one recipe and print it
pub async fn show(resources: &ServerResources, id: &str) -> AppResult<()> {
    let recipe = resources.detail.resolve(id).await?;
    display_recipe(&recipe);
    Ok(())
}

/// Print ingredient suggestions
pub async fn suggest(resources: &ServerResources, query: &str) {
    for suggestion in resources.suggestions.suggest(query).await {
        println!("{suggestion}");
    }
}
