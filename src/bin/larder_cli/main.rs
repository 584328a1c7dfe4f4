// ABOUTME: Larder CLI - command-line recipe search, detail lookup, and device favorites
// ABOUTME: Runs the same resolver chains as the server against the configured local store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Contributors
//!
//! Usage:
//! ```bash
//! # Search by ingredients (comma separated or as separate words)
//! larder-cli search tomato egg
//! larder-cli search "tomato, egg"
//!
//! # Show one recipe
//! larder-cli show 900001
//!
//! # Ingredient suggestions
//! larder-cli suggest to
//!
//! # Anonymous favorites on this device
//! larder-cli favorites add 900001
//! larder-cli favorites list --details
//! larder-cli favorites remove 900001
//! ```

mod commands;
mod helpers;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use larder_server::{
    config::ServerConfig, database, favorites::DeviceFavorites, resources::ServerResources,
};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "larder-cli",
    about = "Larder recipe search CLI",
    long_about = "Search recipes by ingredient, show recipe details, and keep favorites on this device."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Database URL override
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Favorites document override (defaults to the platform data directory)
    #[arg(long, global = true)]
    favorites_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Search recipes by ingredients
    Search {
        /// Ingredients, separate words or comma separated
        #[arg(required = true)]
        ingredients: Vec<String>,
    },

    /// Show one recipe
    Show {
        /// Recipe id, optionally tagged `local:`, `provider:` or `mock:`
        id: String,
    },

    /// Suggest ingredient names
    Suggest {
        /// Partial ingredient text
        query: String,
    },

    /// Device favorites
    Favorites {
        #[command(subcommand)]
        action: FavoritesCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum FavoritesCommand {
    /// List favorites
    List {
        /// Resolve full recipe details for every entry
        #[arg(long, short = 'd')]
        details: bool,
    },

    /// Look up a recipe and add it
    Add {
        /// Recipe id
        id: String,
    },

    /// Remove a favorite
    Remove {
        /// Recipe id
        id: String,
    },

    /// Look up a recipe and flip its favorite state
    Toggle {
        /// Recipe id
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    let mut config = ServerConfig::from_env()?;
    if let Some(database_url) = cli.database_url {
        config.database_url = database_url;
    }
    debug!(database_url = %config.database_url, "Opening local store");

    let pool = database::open(&config.database_url)
        .await
        .with_context(|| format!("Failed to open database {}", config.database_url))?;
    let resources = ServerResources::from_config(config, pool);

    match cli.command {
        Command::Search { ingredients } => {
            commands::recipes::search(&resources, &ingredients).await?;
        }
        Command::Show { id } => commands::recipes::show(&resources, &id).await?,
        Command::Suggest { query } => commands::recipes::suggest(&resources, &query).await,
        Command::Favorites { action } => {
            let path = match cli.favorites_file {
                Some(path) => path,
                None => DeviceFavorites::default_path()?,
            };
            let store = DeviceFavorites::new(path);
            match action {
                FavoritesCommand::List { details } => {
                    commands::favorites::list(&resources, &store, details).await?;
                }
                FavoritesCommand::Add { id } => {
                    commands::favorites::add(&resources, &store, &id).await?;
                }
                FavoritesCommand::Remove { id } => {
                    commands::favorites::remove(&store, &id).await?;
                }
                FavoritesCommand::Toggle { id } => {
                    commands::favorites::toggle(&resources, &store, &id).await?;
                }
            }
        }
    }

    Ok(())
}
