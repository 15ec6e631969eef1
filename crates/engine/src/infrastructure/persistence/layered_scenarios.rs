//! Scenario store that queries several sources in precedence order.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use storyloom_domain::{Scenario, ScenarioId};

use crate::infrastructure::ports::{RepoError, ScenarioRepo, ScenarioSummary};

/// The first source that knows an id wins, for both lookups and listings.
pub struct LayeredScenarioRepo {
    sources: Vec<Arc<dyn ScenarioRepo>>,
}

impl LayeredScenarioRepo {
    pub fn new(sources: Vec<Arc<dyn ScenarioRepo>>) -> Self {
        Self { sources }
    }
}

#[async_trait]
impl ScenarioRepo for LayeredScenarioRepo {
    async fn get(&self, id: &ScenarioId) -> Result<Option<Scenario>, RepoError> {
        for source in &self.sources {
            if let Some(scenario) = source.get(id).await? {
                return Ok(Some(scenario));
            }
        }
        Ok(None)
    }

    async fn list(&self) -> Result<Vec<ScenarioSummary>, RepoError> {
        let mut seen = HashSet::new();
        let mut merged = Vec::new();
        for source in &self.sources {
            for summary in source.list().await? {
                if seen.insert(summary.id.clone()) {
                    merged.push(summary);
                }
            }
        }
        Ok(merged)
    }
}
