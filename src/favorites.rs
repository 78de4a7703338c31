//! Local favorites persistence
//!
//! A single JSON file holds the list of favorite team ids. Full team records
//! are not stored; they are rehydrated against a freshly fetched team list
//! so names and logos never go stale.

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::warn;

use crate::config::paths::get_favorites_path;
use crate::data_fetcher::models::Team;
use crate::error::AppError;

/// File-backed store of favorite team ids.
#[derive(Debug, Clone)]
pub struct FavoritesStore {
    path: PathBuf,
}

impl FavoritesStore {
    /// Store at the default platform location.
    pub fn new() -> Self {
        Self::at_path(get_favorites_path())
    }

    /// Store at a custom path (used by tests).
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads the stored id list.
    ///
    /// A missing, unreadable or corrupt file degrades to an empty list; the
    /// favorites feature must never block the rest of the app.
    pub async fn load(&self) -> Vec<u32> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(_) => return Vec::new(),
        };

        match serde_json::from_str::<Vec<u32>>(&content) {
            Ok(ids) => ids,
            Err(e) => {
                warn!(
                    "Corrupt favorites file at {}: {e}; starting empty",
                    self.path.display()
                );
                Vec::new()
            }
        }
    }

    /// Persists the id list, creating the parent directory if needed.
    pub async fn save(&self, ids: &[u32]) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent).await?;
        }
        let content = serde_json::to_string(ids)?;
        fs::write(&self.path, content).await?;
        Ok(())
    }

    /// Adds or removes a team id. Returns true when the id is now a favorite.
    pub async fn toggle(&self, team_id: u32) -> Result<bool, AppError> {
        let mut ids = self.load().await;
        let added = match ids.iter().position(|&id| id == team_id) {
            Some(index) => {
                ids.remove(index);
                false
            }
            None => {
                ids.push(team_id);
                true
            }
        };
        self.save(&ids).await?;
        Ok(added)
    }

    /// Cross-references the stored ids against a fetched team list,
    /// producing full team records. Ids with no matching team are silently
    /// dropped; the team list's order is preserved.
    pub async fn hydrate(&self, teams: &[Team]) -> Vec<Team> {
        let ids = self.load().await;
        teams
            .iter()
            .filter(|team| ids.contains(&team.id))
            .cloned()
            .collect()
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FavoritesStore {
    fn default() -> Self {
        Self::new()
    }
}
