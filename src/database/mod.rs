// ABOUTME: SQLite connection setup and schema for the local recipe store and account favorites
// ABOUTME: Creates tables idempotently so a fresh database file is usable immediately
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Contributors

//! # Database Module
//!
//! One SQLite database holds two tables:
//! - `recipes`: the locally indexed recipe collection (second search tier)
//! - `favorites`: favorites of authenticated users

/// Local recipe store
pub mod recipes;

pub use recipes::{LocalRecipeStore, NewRecipe};

use crate::errors::{AppError, AppResult};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::info;

const CREATE_RECIPES_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS recipes (
        id TEXT PRIMARY KEY,
        title TEXT NOT NULL,
        image TEXT,
        ingredients TEXT NOT NULL DEFAULT '[]',
        instructions TEXT,
        calories INTEGER,
        source_url TEXT,
        ready_in_minutes INTEGER,
        created_at TEXT NOT NULL
    )
";

const CREATE_FAVORITES_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS favorites (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id TEXT NOT NULL,
        recipe_id TEXT NOT NULL,
        title TEXT NOT NULL,
        image TEXT,
        created_at TEXT NOT NULL,
        UNIQUE(user_id, recipe_id)
    )
";

const CREATE_FAVORITES_USER_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_favorites_user ON favorites(user_id)";

/// Open a pool for `database_url`, creating the file when missing
///
/// In-memory databases are limited to one connection so every query sees the
/// same schema and rows.
///
/// # Errors
///
/// Returns an error if the URL is malformed or the database cannot be opened
pub async fn connect(database_url: &str) -> AppResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| AppError::config(format!("Invalid DATABASE_URL '{database_url}': {e}")))?
        .create_if_missing(true);

    // An in-memory database lives only as long as its one connection
    let pool_options = if database_url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(5)
    };

    pool_options
        .connect_with(options)
        .await
        .map_err(|e| AppError::database(format!("Failed to open database: {e}")))
}

/// Create every table and index used by the service
///
/// # Errors
///
/// Returns an error if a schema statement fails
pub async fn migrate(pool: &SqlitePool) -> AppResult<()> {
    for statement in [
        CREATE_RECIPES_TABLE,
        CREATE_FAVORITES_TABLE,
        CREATE_FAVORITES_USER_INDEX,
    ] {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to apply schema: {e}")))?;
    }
    info!("Database schema ready");
    Ok(())
}

/// Connect and migrate in one step
///
/// # Errors
///
/// Returns an error if connecting or migrating fails
pub async fn open(database_url: &str) -> AppResult<SqlitePool> {
    let pool = connect(database_url).await?;
    migrate(&pool).await?;
    Ok(pool)
}
