//! Scenario entity module.
//!
//! Read access to scenario documents through the scenario port.

use std::sync::Arc;

use storyloom_domain::{Scenario, ScenarioId};

use crate::infrastructure::ports::{RepoError, ScenarioRepo, ScenarioSummary};

/// Scenario entity - looks up documents by id.
pub struct Scenarios {
    repo: Arc<dyn ScenarioRepo>,
}

impl Scenarios {
    pub fn new(repo: Arc<dyn ScenarioRepo>) -> Self {
        Self { repo }
    }

    pub async fn get(&self, id: &ScenarioId) -> Result<Option<Scenario>, RepoError> {
        self.repo.get(id).await
    }

    /// Like [`get`](Self::get) but treats an unknown id as `RepoError::NotFound`.
    pub async fn require(&self, id: &ScenarioId) -> Result<Scenario, RepoError> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| RepoError::not_found("Scenario", id))
    }

    pub async fn list(&self) -> Result<Vec<ScenarioSummary>, RepoError> {
        self.repo.list().await
    }
}
