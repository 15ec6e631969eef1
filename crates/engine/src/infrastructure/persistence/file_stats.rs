//! File-backed stats storage: one JSON profile per user.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use storyloom_domain::{StatProfile, UserId};
use tokio::fs;

use super::file_names::stem_for;
use crate::infrastructure::ports::{RepoError, StatsRepo};

/// Stores each profile at `<dir>/<user stem>.json`.
///
/// Saves go to a temporary sibling first and are renamed into place, so a
/// reader never sees a partially written profile.
#[derive(Debug, Clone)]
pub struct FileStatsRepo {
    dir: PathBuf,
}

impl FileStatsRepo {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Canonical file path for a user's profile.
    pub fn path_for(&self, user_id: &UserId) -> PathBuf {
        self.dir.join(format!("{}.json", stem_for(user_id.as_str())))
    }
}

#[async_trait]
impl StatsRepo for FileStatsRepo {
    async fn load(&self, user_id: &UserId) -> Result<Option<StatProfile>, RepoError> {
        let path = self.path_for(user_id);
        let raw = match fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(RepoError::storage("load_stats", e)),
        };

        let profile = serde_json::from_str(&raw).map_err(|e| {
            RepoError::serialization(format!("{}: {}", path.display(), e))
        })?;
        Ok(Some(profile))
    }

    async fn save(&self, user_id: &UserId, profile: &StatProfile) -> Result<(), RepoError> {
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| RepoError::storage("save_stats", e))?;

        let data =
            serde_json::to_vec_pretty(profile).map_err(RepoError::serialization)?;
        let path = self.path_for(user_id);
        let tmp = path.with_extension("json.tmp");

        fs::write(&tmp, &data)
            .await
            .map_err(|e| RepoError::storage("save_stats", e))?;
        fs::rename(&tmp, &path)
            .await
            .map_err(|e| RepoError::storage("save_stats", e))?;

        tracing::debug!(user_id = %user_id, path = %path.display(), "Saved stat profile");
        Ok(())
    }
}
