//! Scenario query use cases.

use std::sync::Arc;

use storyloom_domain::{Scenario, ScenarioId};

use crate::entities::Scenarios;
use crate::infrastructure::ports::{RepoError, ScenarioSummary};

/// Container for scenario use cases.
pub struct ScenarioUseCases {
    pub get: Arc<GetScenario>,
    pub list: Arc<ListScenarios>,
}

impl ScenarioUseCases {
    pub fn new(get: Arc<GetScenario>, list: Arc<ListScenarios>) -> Self {
        Self { get, list }
    }
}

/// Return a scenario document exactly as stored.
pub struct GetScenario {
    scenarios: Arc<Scenarios>,
}

impl GetScenario {
    pub fn new(scenarios: Arc<Scenarios>) -> Self {
        Self { scenarios }
    }

    pub async fn execute(&self, id: &ScenarioId) -> Result<Scenario, ScenarioQueryError> {
        self.scenarios
            .get(id)
            .await?
            .ok_or_else(|| ScenarioQueryError::NotFound(id.clone()))
    }
}

pub struct ListScenarios {
    scenarios: Arc<Scenarios>,
}

impl ListScenarios {
    pub fn new(scenarios: Arc<Scenarios>) -> Self {
        Self { scenarios }
    }

    pub async fn execute(&self) -> Result<Vec<ScenarioSummary>, ScenarioQueryError> {
        Ok(self.scenarios.list().await?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ScenarioQueryError {
    #[error("Scenario not found: {0}")]
    NotFound(ScenarioId),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
