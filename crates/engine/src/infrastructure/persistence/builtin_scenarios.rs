//! Built-in scenario catalog exposed through the scenario port.

use std::collections::BTreeMap;

use async_trait::async_trait;
use storyloom_domain::{Scenario, ScenarioId};

use crate::infrastructure::catalog;
use crate::infrastructure::ports::{RepoError, ScenarioRepo, ScenarioSummary};

/// Immutable after construction.
pub struct BuiltinScenarioRepo {
    scenarios: BTreeMap<ScenarioId, Scenario>,
}

impl BuiltinScenarioRepo {
    /// The catalog shipped with the engine.
    pub fn new() -> Self {
        Self::from_scenarios(catalog::builtin_scenarios())
    }

    pub fn from_scenarios(scenarios: impl IntoIterator<Item = Scenario>) -> Self {
        Self {
            scenarios: scenarios
                .into_iter()
                .map(|scenario| (scenario.id.clone(), scenario))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}

impl Default for BuiltinScenarioRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScenarioRepo for BuiltinScenarioRepo {
    async fn get(&self, id: &ScenarioId) -> Result<Option<Scenario>, RepoError> {
        Ok(self.scenarios.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<ScenarioSummary>, RepoError> {
        Ok(self.scenarios.values().map(ScenarioSummary::from).collect())
    }
}
