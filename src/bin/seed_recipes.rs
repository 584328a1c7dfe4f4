// ABOUTME: Local recipe store seeding utility for Larder
// ABOUTME: Imports a JSON array of recipes, or a small starter set when no file is given
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Contributors

//! Local recipe seeder for Larder.
//!
//! Usage:
//! ```bash
//! # Seed the starter recipes (uses DATABASE_URL from environment)
//! cargo run --bin seed-recipes
//!
//! # Import a JSON array of recipes
//! cargo run --bin seed-recipes -- --file recipes.json
//!
//! # Override database URL and seed even when the store has recipes
//! cargo run --bin seed-recipes -- --database-url sqlite:./larder.db --force
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use larder_server::{
    config::ServerConfig,
    database::{self, LocalRecipeStore, NewRecipe},
};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(
    name = "seed-recipes",
    about = "Larder local recipe seeder",
    long_about = "Populate the local recipe store used by the local index and detail tiers"
)]
struct SeedArgs {
    /// JSON file holding an array of recipes
    #[arg(long, short = 'f')]
    file: Option<PathBuf>,

    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Seed even if the store already holds recipes
    #[arg(long)]
    force: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// Starter recipe definition
struct StarterRecipe {
    title: &'static str,
    ingredients: &'static [&'static str],
    instructions: &'static str,
    calories: i64,
    ready_in_minutes: u32,
}

const STARTER_RECIPES: &[StarterRecipe] = &[
    StarterRecipe {
        title: "Masala Omelette",
        ingredients: &["egg", "onion", "tomato", "green chili", "salt"],
        instructions: "Whisk eggs with salt. Fold in chopped onion, tomato and chili. Cook in a hot pan until set.",
        calories: 240,
        ready_in_minutes: 10,
    },
    StarterRecipe {
        title: "Jeera Rice",
        ingredients: &["rice", "cumin", "butter", "salt"],
        instructions: "Toast cumin in butter, add washed rice and water, simmer covered until tender.",
        calories: 310,
        ready_in_minutes: 25,
    },
    StarterRecipe {
        title: "Moong Dal Tadka",
        ingredients: &["moong dal", "tomato", "garlic", "cumin", "turmeric", "salt"],
        instructions: "Pressure cook dal with turmeric. Temper cumin and garlic, add tomato, pour over dal.",
        calories: 280,
        ready_in_minutes: 30,
    },
    StarterRecipe {
        title: "Paneer Bhurji",
        ingredients: &["paneer", "onion", "tomato", "bell pepper", "turmeric"],
        instructions: "Saute onion and pepper, add tomato and turmeric, crumble in paneer and heat through.",
        calories: 350,
        ready_in_minutes: 15,
    },
    StarterRecipe {
        title: "Garlic Mushroom Toast",
        ingredients: &["bread", "mushroom", "garlic", "butter"],
        instructions: "Fry sliced mushrooms with garlic in butter and pile onto toasted bread.",
        calories: 290,
        ready_in_minutes: 12,
    },
];

fn starter_recipes() -> Vec<NewRecipe> {
    STARTER_RECIPES
        .iter()
        .map(|starter| NewRecipe {
            title: starter.title.to_owned(),
            image: None,
            ingredients: starter.ingredients.iter().map(|i| (*i).to_owned()).collect(),
            instructions: Some(starter.instructions.to_owned()),
            calories: Some(starter.calories),
            source_url: None,
            ready_in_minutes: Some(starter.ready_in_minutes),
        })
        .collect()
}

async fn load_recipes(file: Option<&PathBuf>) -> Result<Vec<NewRecipe>> {
    let Some(path) = file else {
        return Ok(starter_recipes());
    };
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a JSON array of recipes", path.display()))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    let database_url = match args.database_url {
        Some(url) => url,
        None => ServerConfig::from_env()?.database_url,
    };
    info!("Connecting to database: {}", database_url);
    let pool = database::open(&database_url).await?;
    let store = LocalRecipeStore::new(pool);

    let existing = store.count().await?;
    if existing > 0 && !args.force {
        warn!(existing, "Store already holds recipes, use --force to seed anyway");
        return Ok(());
    }

    let recipes = load_recipes(args.file.as_ref()).await?;
    let mut inserted = 0_usize;
    for recipe in &recipes {
        match store.insert(recipe).await {
            Ok(stored) => {
                info!(id = %stored.id, title = %stored.title, "Seeded recipe");
                inserted += 1;
            }
            Err(e) => warn!(title = %recipe.title, error = %e, "Skipping recipe"),
        }
    }

    info!(inserted, total = store.count().await?, "Seeding complete");
    Ok(())
}
