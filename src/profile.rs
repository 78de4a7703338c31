//! User profile session state
//!
//! One JSON document per user id, kept under the profile directory. A
//! session is opened explicitly at sign-in and torn down by dropping it; the
//! profile is never ambient global state. Observers subscribe through a
//! watch channel and see every committed update. All mutations, including
//! the avatar picked from the device, write through to the document before
//! notifying observers.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::sync::watch;
use tracing::{info, warn};

use crate::config::paths::get_profile_dir_path;
use crate::error::AppError;

/// Profile fields as stored in the user document. Field names match the
/// backing document schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "nome", default)]
    pub display_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "profileImage", default)]
    pub avatar_path: Option<String>,
}

/// Directory of per-user profile documents.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    dir: PathBuf,
}

impl ProfileStore {
    /// Store at the default platform location.
    pub fn new() -> Self {
        Self::at_dir(get_profile_dir_path())
    }

    /// Store at a custom directory (used by tests).
    pub fn at_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn document_path(&self, user_id: &str) -> PathBuf {
        self.dir.join(format!("{user_id}.json"))
    }

    /// Opens a session for a user, reading their document if it exists.
    ///
    /// A missing document yields a default profile; a corrupt one is
    /// reported and replaced on the next commit.
    pub async fn open_session(&self, user_id: &str) -> Result<UserSession, AppError> {
        if user_id.is_empty() {
            return Err(AppError::profile_error("user id cannot be empty"));
        }

        let doc_path = self.document_path(user_id);
        let profile = match fs::read_to_string(&doc_path).await {
            Ok(content) => match serde_json::from_str::<UserProfile>(&content) {
                Ok(profile) => profile,
                Err(e) => {
                    warn!(
                        "Corrupt profile document at {}: {e}; starting fresh",
                        doc_path.display()
                    );
                    UserProfile::default()
                }
            },
            Err(_) => UserProfile::default(),
        };

        info!("Opened profile session for user {user_id}");
        let (tx, _) = watch::channel(profile);
        Ok(UserSession {
            user_id: user_id.to_string(),
            doc_path,
            tx,
        })
    }
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Live handle on one user's profile. Created at sign-in, dropped at
/// sign-out; dropping closes every subscription.
#[derive(Debug)]
pub struct UserSession {
    user_id: String,
    doc_path: PathBuf,
    tx: watch::Sender<UserProfile>,
}

impl UserSession {
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Current snapshot of the profile.
    pub fn profile(&self) -> UserProfile {
        self.tx.borrow().clone()
    }

    /// Subscribes to profile updates for the lifetime of this session.
    pub fn subscribe(&self) -> watch::Receiver<UserProfile> {
        self.tx.subscribe()
    }

    pub async fn set_display_name(&self, name: impl Into<String>) -> Result<(), AppError> {
        let mut profile = self.profile();
        profile.display_name = name.into();
        self.commit(profile).await
    }

    pub async fn set_email(&self, email: impl Into<String>) -> Result<(), AppError> {
        let mut profile = self.profile();
        profile.email = email.into();
        self.commit(profile).await
    }

    /// Records a newly picked avatar. The path is persisted to the document
    /// like every other field, so it survives the session.
    pub async fn set_avatar(&self, path: impl Into<String>) -> Result<(), AppError> {
        let mut profile = self.profile();
        profile.avatar_path = Some(path.into());
        self.commit(profile).await
    }

    /// Writes the document, then notifies subscribers. Observers only ever
    /// see persisted states.
    async fn commit(&self, profile: UserProfile) -> Result<(), AppError> {
        if let Some(parent) = self.doc_path.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent).await?;
        }
        let content = serde_json::to_string_pretty(&profile)?;
        fs::write(&self.doc_path, content).await?;

        self.tx.send_replace(profile);
        Ok(())
    }

    /// Path of the backing document.
    pub fn document_path(&self) -> &Path {
        &self.doc_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_open_session_with_no_document() {
        let dir = tempdir().unwrap();
        let store = ProfileStore::at_dir(dir.path());
        let session = store.open_session("user-1").await.unwrap();
        assert_eq!(session.profile(), UserProfile::default());
    }

    #[tokio::test]
    async fn test_empty_user_id_rejected() {
        let dir = tempdir().unwrap();
        let store = ProfileStore::at_dir(dir.path());
        assert!(store.open_session("").await.is_err());
    }

    #[tokio::test]
    async fn test_updates_write_through_and_reload() {
        let dir = tempdir().unwrap();
        let store = ProfileStore::at_dir(dir.path());

        {
            let session = store.open_session("user-1").await.unwrap();
            session.set_display_name("Jordan").await.unwrap();
            session.set_email("jordan@example.com").await.unwrap();
            session.set_avatar("/tmp/avatar.png").await.unwrap();
        }

        // A fresh session sees every field, including the avatar.
        let session = store.open_session("user-1").await.unwrap();
        let profile = session.profile();
        assert_eq!(profile.display_name, "Jordan");
        assert_eq!(profile.email, "jordan@example.com");
        assert_eq!(profile.avatar_path.as_deref(), Some("/tmp/avatar.png"));
    }

    #[tokio::test]
    async fn test_document_uses_backend_field_names() {
        let dir = tempdir().unwrap();
        let store = ProfileStore::at_dir(dir.path());
        let session = store.open_session("user-1").await.unwrap();
        session.set_display_name("Jordan").await.unwrap();

        let content = tokio::fs::read_to_string(session.document_path())
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["nome"], "Jordan");
    }

    #[tokio::test]
    async fn test_subscribers_observe_updates() {
        let dir = tempdir().unwrap();
        let store = ProfileStore::at_dir(dir.path());
        let session = store.open_session("user-1").await.unwrap();

        let mut rx = session.subscribe();
        session.set_display_name("Kareem").await.unwrap();

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().display_name, "Kareem");
    }

    #[tokio::test]
    async fn test_dropping_session_closes_subscription() {
        let dir = tempdir().unwrap();
        let store = ProfileStore::at_dir(dir.path());
        let session = store.open_session("user-1").await.unwrap();
        let mut rx = session.subscribe();

        drop(session);
        assert!(rx.changed().await.is_err());
    }

    #[tokio::test]
    async fn test_corrupt_document_starts_fresh() {
        let dir = tempdir().unwrap();
        let store = ProfileStore::at_dir(dir.path());
        tokio::fs::write(dir.path().join("user-1.json"), "{broken")
            .await
            .unwrap();

        let session = store.open_session("user-1").await.unwrap();
        assert_eq!(session.profile(), UserProfile::default());
    }
}
