//! E2E test helpers for constructing the full application stack.

use std::collections::BTreeMap;
use std::sync::Arc;

use storyloom_domain::{ChoiceId, NodeId, ScenarioId, StatProfile, UserId};

use crate::app::App;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::persistence::{BuiltinScenarioRepo, InMemoryStatsRepo};
use crate::infrastructure::ports::StatsRepo;
use crate::use_cases::{ChoiceError, ChoiceOutcome};

/// App over the built-in catalog with in-memory stats.
pub struct E2ETestContext {
    pub app: App,
    pub stats: Arc<InMemoryStatsRepo>,
}

impl E2ETestContext {
    pub fn setup() -> Self {
        Self::with_scenarios(BuiltinScenarioRepo::new())
    }

    fn with_scenarios(scenarios: BuiltinScenarioRepo) -> Self {
        let stats = Arc::new(InMemoryStatsRepo::new());
        let app = App::new(Arc::new(scenarios), stats.clone(), &AppConfig::default());
        Self { app, stats }
    }

    pub async fn choose(
        &self,
        user: &str,
        scenario: &str,
        node: &str,
        choice: &str,
    ) -> Result<ChoiceOutcome, ChoiceError> {
        self.app
            .use_cases
            .choice
            .make_choice
            .execute(
                &UserId::new(user),
                &ScenarioId::new(scenario),
                &NodeId::new(node),
                &ChoiceId::new(choice),
            )
            .await
    }

    /// The stored profile, or `None` if the user was never written.
    pub async fn stored_profile(&self, user: &str) -> Option<StatProfile> {
        self.app
            .repositories
            .stats
            .load(&UserId::new(user))
            .await
            .expect("in-memory load cannot fail")
    }

    pub async fn profile(&self, user: &str) -> StatProfile {
        self.stored_profile(user).await.unwrap_or_default()
    }

    pub async fn seed(&self, user: &str, profile: StatProfile) {
        self.stats.insert(UserId::new(user), profile).await;
    }
}

/// Non-zero numeric changes from `before` to `after`.
pub fn stat_diff(before: &StatProfile, after: &StatProfile) -> BTreeMap<String, i64> {
    after
        .numeric()
        .iter()
        .filter_map(|(stat, value)| {
            let change = value - before.get(stat);
            (change != 0).then(|| (stat.clone(), change))
        })
        .collect()
}

/// Build an expected diff from literal pairs.
pub fn diff_of(pairs: &[(&str, i64)]) -> BTreeMap<String, i64> {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

/// Assert every numeric stat in `before` is not larger in `after`.
pub fn assert_monotone(before: &StatProfile, after: &StatProfile, context: &str) {
    for (stat, value) in before.numeric() {
        assert!(
            after.get(stat) >= *value,
            "{context}: {stat} decreased from {value} to {}",
            after.get(stat)
        );
    }
    for quest in before.completed_quests() {
        assert!(
            after.is_quest_completed(quest),
            "{context}: completion of {quest} was lost"
        );
    }
}
