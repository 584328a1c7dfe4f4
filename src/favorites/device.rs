// ABOUTME: Anonymous favorites persisted as one JSON document per device storage location
// ABOUTME: Corrupt or missing documents read as empty; writes replace the document atomically
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Contributors

use super::FavoritesStore;
use crate::errors::{AppError, AppResult};
use crate::models::{FavoriteEntry, Recipe};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Device-scoped favorites document
pub struct DeviceFavorites {
    path: PathBuf,
    // Serializes read-modify-write cycles on this instance
    lock: Mutex<()>,
}

impl DeviceFavorites {
    /// Favorites stored at `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Default location under the platform data directory
    ///
    /// # Errors
    ///
    /// Returns a config error when the platform has no data directory
    pub fn default_path() -> AppResult<PathBuf> {
        dirs::data_dir()
            .map(|dir| dir.join("larder").join("favorites.json"))
            .ok_or_else(|| AppError::config("No platform data directory available"))
    }

    /// Document location
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> AppResult<Vec<FavoriteEntry>> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(AppError::storage(format!(
                    "Failed to read favorites at {}: {e}",
                    self.path.display()
                )))
            }
        };

        match serde_json::from_slice::<Vec<FavoriteEntry>>(&bytes) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Favorites document unreadable, treating as empty"
                );
                Ok(Vec::new())
            }
        }
    }

    async fn write(&self, entries: &[FavoriteEntry]) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_vec_pretty(entries)?;
        let tmp = self.path.with_extension("json.tmp");

        fs::write(&tmp, &json).await.map_err(|e| {
            AppError::storage(format!("Failed to write favorites at {}: {e}", tmp.display()))
        })?;
        fs::rename(&tmp, &self.path).await.map_err(|e| {
            AppError::storage(format!(
                "Failed to replace favorites at {}: {e}",
                self.path.display()
            ))
        })?;
        debug!(path = %self.path.display(), entries = entries.len(), "Favorites document written");
        Ok(())
    }
}

#[async_trait]
impl FavoritesStore for DeviceFavorites {
    async fn list(&self) -> AppResult<Vec<FavoriteEntry>> {
        let _guard = self.lock.lock().await;
        self.read().await
    }

    async fn add(&self, recipe: &Recipe) -> AppResult<Vec<FavoriteEntry>> {
        recipe.validate()?;
        let _guard = self.lock.lock().await;

        let mut entries = self.read().await?;
        if entries.iter().any(|entry| entry.id == recipe.id.value) {
            return Ok(entries);
        }
        entries.push(FavoriteEntry::snapshot(recipe));
        self.write(&entries).await?;
        Ok(entries)
    }

    async fn remove(&self, id: &str) -> AppResult<Vec<FavoriteEntry>> {
        let _guard = self.lock.lock().await;

        let mut entries = self.read().await?;
        let before = entries.len();
        entries.retain(|entry| entry.id != id);
        if entries.len() != before {
            self.write(&entries).await?;
        }
        Ok(entries)
    }
}
