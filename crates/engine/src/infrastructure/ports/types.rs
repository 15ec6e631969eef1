//! Helper types for port operations.

use serde::{Deserialize, Serialize};
use storyloom_domain::{Difficulty, Scenario, ScenarioId, Theme};

/// Catalog listing entry for a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioSummary {
    pub id: ScenarioId,
    pub title: String,
    pub theme: Theme,
    pub difficulty: Difficulty,
}

impl From<&Scenario> for ScenarioSummary {
    fn from(scenario: &Scenario) -> Self {
        Self {
            id: scenario.id.clone(),
            title: scenario.title.clone(),
            theme: scenario.theme,
            difficulty: scenario.difficulty,
        }
    }
}
