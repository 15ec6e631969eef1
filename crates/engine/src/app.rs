//! Application state and composition.

use std::sync::Arc;

use crate::entities::{PlayerStats, Scenarios};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::persistence::{
    BuiltinScenarioRepo, FileScenarioRepo, FileStatsRepo, LayeredScenarioRepo,
};
use crate::infrastructure::ports::{ScenarioRepo, StatsRepo};
use crate::stores::UserLocks;
use crate::use_cases;
use crate::use_cases::action::ActionClassifier;
use crate::use_cases::quest::QuestEngine;
use crate::use_cases::resolver::NodeResolver;

/// Main application state.
///
/// Holds the storage ports and every use case wired against them.
pub struct App {
    pub repositories: Repositories,
    pub use_cases: UseCases,
}

/// Container for the injected storage ports.
pub struct Repositories {
    pub scenario: Arc<dyn ScenarioRepo>,
    pub stats: Arc<dyn StatsRepo>,
}

/// Container for all use cases.
pub struct UseCases {
    pub choice: use_cases::ChoiceUseCases,
    pub quest: use_cases::QuestUseCases,
    pub stats: use_cases::StatsUseCases,
    pub scenario: use_cases::ScenarioUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(
        scenario_repo: Arc<dyn ScenarioRepo>,
        stats_repo: Arc<dyn StatsRepo>,
        config: &AppConfig,
    ) -> Self {
        // One lock registry shared by every path that writes a profile.
        let locks = Arc::new(UserLocks::new());

        // Entity modules
        let scenarios = Arc::new(Scenarios::new(scenario_repo.clone()));
        let player_stats = Arc::new(PlayerStats::new(stats_repo.clone(), locks.clone()));

        // In-process components
        let classifier = ActionClassifier::new(config.minutes_per_action);
        let quest_engine = Arc::new(QuestEngine::new());
        let resolver = Arc::new(NodeResolver::new());

        let choice = use_cases::ChoiceUseCases::new(Arc::new(use_cases::MakeChoice::new(
            scenarios.clone(),
            player_stats.clone(),
            locks.clone(),
            classifier,
            quest_engine.clone(),
            resolver,
        )));

        let quest = use_cases::QuestUseCases::new(
            Arc::new(use_cases::quest::ListQuests::new(
                scenarios.clone(),
                quest_engine.clone(),
            )),
            Arc::new(use_cases::quest::EvaluateQuests::new(
                scenarios.clone(),
                player_stats.clone(),
                locks,
                quest_engine.clone(),
            )),
            Arc::new(use_cases::quest::GetQuestProgress::new(
                scenarios.clone(),
                player_stats.clone(),
                quest_engine,
            )),
        );

        let stats = use_cases::StatsUseCases::new(Arc::new(use_cases::stats::GetStats::new(
            player_stats,
        )));

        let scenario = use_cases::ScenarioUseCases::new(
            Arc::new(use_cases::scenario::GetScenario::new(scenarios.clone())),
            Arc::new(use_cases::scenario::ListScenarios::new(scenarios)),
        );

        Self {
            repositories: Repositories {
                scenario: scenario_repo,
                stats: stats_repo,
            },
            use_cases: UseCases {
                choice,
                quest,
                stats,
                scenario,
            },
        }
    }

    /// Wire file-backed storage from configuration.
    ///
    /// Built-in scenarios take precedence over documents in the scenario
    /// directory with the same id.
    pub fn from_config(config: &AppConfig) -> Self {
        let scenario_repo: Arc<dyn ScenarioRepo> = Arc::new(LayeredScenarioRepo::new(vec![
            Arc::new(BuiltinScenarioRepo::new()),
            Arc::new(FileScenarioRepo::new(config.scenario_dir.clone())),
        ]));
        let stats_repo: Arc<dyn StatsRepo> = Arc::new(FileStatsRepo::new(config.stats_dir.clone()));

        tracing::debug!(
            stats_dir = %config.stats_dir.display(),
            scenario_dir = %config.scenario_dir.display(),
            "Storage configured"
        );
        Self::new(scenario_repo, stats_repo, config)
    }
}
