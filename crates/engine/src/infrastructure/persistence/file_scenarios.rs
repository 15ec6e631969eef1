//! File-backed storage for user-generated scenario documents.
//!
//! Each document lives at `<dir>/<scenario id>.json`. Generation and upload
//! pipelines call [`FileScenarioRepo::save`]; the runtime only reads.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use storyloom_domain::{Scenario, ScenarioId};
use tokio::fs;

use super::file_names::is_safe_stem;
use crate::infrastructure::ports::{RepoError, ScenarioRepo, ScenarioSummary};

#[derive(Debug, Clone)]
pub struct FileScenarioRepo {
    dir: PathBuf,
}

impl FileScenarioRepo {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// `None` for ids that cannot name a file in the store.
    fn path_for(&self, id: &ScenarioId) -> Option<PathBuf> {
        is_safe_stem(id.as_str()).then(|| self.dir.join(format!("{}.json", id)))
    }

    /// Persist a generated document, replacing any previous version.
    pub async fn save(&self, scenario: &Scenario) -> Result<(), RepoError> {
        let path = self.path_for(&scenario.id).ok_or_else(|| {
            RepoError::storage(
                "save_scenario",
                format!("scenario id '{}' is not a valid file name", scenario.id),
            )
        })?;

        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| RepoError::storage("save_scenario", e))?;
        let data = serde_json::to_vec_pretty(scenario).map_err(RepoError::serialization)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, &data)
            .await
            .map_err(|e| RepoError::storage("save_scenario", e))?;
        fs::rename(&tmp, &path)
            .await
            .map_err(|e| RepoError::storage("save_scenario", e))?;

        tracing::info!(scenario_id = %scenario.id, "Stored generated scenario");
        Ok(())
    }

    async fn read(&self, path: &Path) -> Result<Option<Scenario>, RepoError> {
        let raw = match fs::read_to_string(path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(RepoError::storage("load_scenario", e)),
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| RepoError::serialization(format!("{}: {}", path.display(), e)))
    }
}

#[async_trait]
impl ScenarioRepo for FileScenarioRepo {
    async fn get(&self, id: &ScenarioId) -> Result<Option<Scenario>, RepoError> {
        match self.path_for(id) {
            Some(path) => self.read(&path).await,
            None => Ok(None),
        }
    }

    async fn list(&self) -> Result<Vec<ScenarioSummary>, RepoError> {
        let mut entries = match fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(RepoError::storage("list_scenarios", e)),
        };

        let mut summaries = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| RepoError::storage("list_scenarios", e))?
        {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            match self.read(&path).await {
                Ok(Some(scenario)) => summaries.push(ScenarioSummary::from(&scenario)),
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Skipping unreadable scenario document");
                }
            }
        }

        summaries.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(summaries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storyloom_domain::{Choice, Difficulty, Node, Theme};

    fn generated(id: &str) -> Scenario {
        Scenario::new(id, "Generated", Theme::Other, Difficulty::Medium)
            .with_node(
                Node::new("start", "Start")
                    .with_choice(Choice::new("explore", "Explore", "content_node_1")),
            )
            .with_node(Node::new("end", "End"))
    }

    #[tokio::test]
    async fn saved_documents_survive_restart() {
        let temp_dir = tempfile::tempdir().expect("tempdir");
        let scenario = generated("gen_1");

        FileScenarioRepo::new(temp_dir.path())
            .save(&scenario)
            .await
            .expect("save");

        let reopened = FileScenarioRepo::new(temp_dir.path());
        assert_eq!(reopened.dir(), temp_dir.path());
        let loaded = reopened
            .get(&ScenarioId::new("gen_1"))
            .await
            .expect("get")
            .expect("scenario");
        assert_eq!(loaded, scenario);
    }

    #[tokio::test]
    async fn missing_directory_lists_nothing() {
        let temp_dir = tempfile::tempdir().expect("tempdir");
        let repo = FileScenarioRepo::new(temp_dir.path().join("absent"));

        assert!(repo.list().await.expect("list").is_empty());
        assert!(repo.get(&ScenarioId::new("gen_1")).await.expect("get").is_none());
    }

    #[tokio::test]
    async fn list_skips_malformed_documents() {
        let temp_dir = tempfile::tempdir().expect("tempdir");
        let repo = FileScenarioRepo::new(temp_dir.path());
        repo.save(&generated("gen_b")).await.expect("save b");
        repo.save(&generated("gen_a")).await.expect("save a");
        std::fs::write(temp_dir.path().join("broken.json"), "[]").expect("write");
        std::fs::write(temp_dir.path().join("notes.txt"), "ignore me").expect("write");

        let ids: Vec<String> = repo
            .list()
            .await
            .expect("list")
            .into_iter()
            .map(|s| s.id.into_inner())
            .collect();
        assert_eq!(ids, vec!["gen_a".to_string(), "gen_b".to_string()]);

        let err = repo
            .get(&ScenarioId::new("broken"))
            .await
            .expect_err("malformed document");
        assert!(matches!(err, RepoError::Serialization(_)));
    }

    #[tokio::test]
    async fn path_like_ids_are_never_read() {
        let temp_dir = tempfile::tempdir().expect("tempdir");
        let repo = FileScenarioRepo::new(temp_dir.path());

        assert!(repo
            .get(&ScenarioId::new("../secrets"))
            .await
            .expect("get")
            .is_none());
        assert!(repo.save(&generated("../secrets")).await.is_err());
    }
}
