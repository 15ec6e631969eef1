//! Quest use cases.
//!
//! A quest completes the first time every requirement threshold is met. The
//! completion flag makes evaluation idempotent: re-running it on an unchanged
//! profile completes nothing and applies no rewards.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use storyloom_domain::{Quest, QuestId, Scenario, ScenarioId, Stat, StatProfile, UnmetRequirement, UserId};

use crate::entities::{PlayerStats, Scenarios};
use crate::infrastructure::ports::RepoError;
use crate::stores::UserLocks;

/// Quests applied to scenarios that declare none of their own.
pub fn default_quests() -> Vec<Quest> {
    vec![
        Quest::new("first_steps", "İlk Adımlar")
            .with_description("Take your first steps into the world.")
            .requiring(Stat::ExplorationSkill, 5)
            .requiring(Stat::TimeSpent, 15)
            .rewarding(Stat::Xp, 100)
            .rewarding_title("Adventurer"),
        Quest::new("social_butterfly", "Sosyal Kelebek")
            .with_description("Make friends wherever you go.")
            .requiring(Stat::Conversations, 8)
            .requiring(Stat::CharismaSkill, 15)
            .rewarding(Stat::Xp, 150)
            .rewarding(Stat::CharismaSkill, 5)
            .rewarding_title("Diplomat"),
        Quest::new("battle_hardened", "Savaş Ustası")
            .with_description("Win battle after battle.")
            .requiring(Stat::CombatWon, 5)
            .requiring(Stat::CombatSkill, 15)
            .rewarding(Stat::Xp, 200)
            .rewarding_title("Warrior"),
        Quest::new("keen_investigator", "Keskin Göz")
            .with_description("Leave no stone unturned.")
            .requiring(Stat::SearchActions, 10)
            .requiring(Stat::ExplorationSkill, 20)
            .rewarding(Stat::Xp, 150)
            .rewarding_title("Investigator"),
    ]
}

/// In-memory quest evaluation. Holds no per-player state.
pub struct QuestEngine {
    default_quests: Vec<Quest>,
}

impl Default for QuestEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestEngine {
    pub fn new() -> Self {
        Self::with_default_quests(default_quests())
    }

    pub fn with_default_quests(default_quests: Vec<Quest>) -> Self {
        Self { default_quests }
    }

    /// The scenario's own quests, or the default set when it declares none.
    pub fn quests_for<'a>(&'a self, scenario: &'a Scenario) -> &'a [Quest] {
        if scenario.quests.is_empty() {
            &self.default_quests
        } else {
            &scenario.quests
        }
    }

    /// Complete every satisfied quest in declaration order.
    ///
    /// Each completion sets the quest's flag, adds one to `quests_completed`,
    /// then applies the stat and title rewards. Returns the newly completed
    /// quests; the caller persists the profile.
    pub fn evaluate_profile(&self, profile: &mut StatProfile, scenario: &Scenario) -> Vec<Quest> {
        let mut completed = Vec::new();

        for quest in self.quests_for(scenario) {
            if profile.is_quest_completed(&quest.id) || !quest.is_satisfied_by(profile) {
                continue;
            }

            profile.mark_quest_completed(quest.id.clone());
            profile.add(Stat::QuestsCompleted, 1);
            for reward in quest.rewards.deltas() {
                if !profile.apply(&reward) {
                    tracing::warn!(
                        quest_id = %quest.id,
                        stat = %reward.stat,
                        delta = reward.delta,
                        "Ignoring negative quest reward"
                    );
                }
            }
            if let Some(title) = &quest.rewards.title {
                profile.earn_title(title.clone());
            }

            tracing::info!(
                scenario_id = %scenario.id,
                quest_id = %quest.id,
                "Quest completed"
            );
            completed.push(quest.clone());
        }

        completed
    }

    pub fn progress(&self, profile: &StatProfile, scenario: &Scenario) -> Vec<QuestProgress> {
        self.quests_for(scenario)
            .iter()
            .map(|quest| QuestProgress::of(quest, profile))
            .collect()
    }
}

/// Where a player stands on one quest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestProgress {
    pub quest_id: QuestId,
    pub title: String,
    pub completed: bool,
    pub requirements: Vec<RequirementProgress>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementProgress {
    pub stat: String,
    pub current: i64,
    pub threshold: i64,
    pub met: bool,
}

impl QuestProgress {
    fn of(quest: &Quest, profile: &StatProfile) -> Self {
        Self {
            quest_id: quest.id.clone(),
            title: quest.title.clone(),
            completed: profile.is_quest_completed(&quest.id),
            requirements: quest
                .requirements
                .iter()
                .map(|(stat, threshold)| {
                    let current = profile.get(stat);
                    RequirementProgress {
                        stat: stat.clone(),
                        current,
                        threshold: *threshold,
                        met: current >= *threshold,
                    }
                })
                .collect(),
        }
    }

    /// Requirements not yet met.
    pub fn unmet(&self) -> Vec<UnmetRequirement> {
        self.requirements
            .iter()
            .filter(|r| !r.met)
            .map(|r| UnmetRequirement {
                stat: r.stat.clone(),
                current: r.current,
                threshold: r.threshold,
            })
            .collect()
    }
}

/// Container for quest use cases.
pub struct QuestUseCases {
    pub list: Arc<ListQuests>,
    pub evaluate: Arc<EvaluateQuests>,
    pub progress: Arc<GetQuestProgress>,
}

impl QuestUseCases {
    pub fn new(
        list: Arc<ListQuests>,
        evaluate: Arc<EvaluateQuests>,
        progress: Arc<GetQuestProgress>,
    ) -> Self {
        Self {
            list,
            evaluate,
            progress,
        }
    }
}

/// Quests in effect for a scenario.
pub struct ListQuests {
    scenarios: Arc<Scenarios>,
    engine: Arc<QuestEngine>,
}

impl ListQuests {
    pub fn new(scenarios: Arc<Scenarios>, engine: Arc<QuestEngine>) -> Self {
        Self { scenarios, engine }
    }

    pub async fn execute(&self, scenario_id: &ScenarioId) -> Result<Vec<Quest>, QuestError> {
        let scenario = self.load_scenario(scenario_id).await?;
        Ok(self.engine.quests_for(&scenario).to_vec())
    }

    async fn load_scenario(&self, scenario_id: &ScenarioId) -> Result<Scenario, QuestError> {
        self.scenarios
            .get(scenario_id)
            .await?
            .ok_or_else(|| QuestError::ScenarioNotFound(scenario_id.clone()))
    }
}

/// Standalone quest evaluation against the stored profile.
///
/// Choosing a node already evaluates quests; this covers profiles changed by
/// other means.
pub struct EvaluateQuests {
    scenarios: Arc<Scenarios>,
    stats: Arc<PlayerStats>,
    locks: Arc<UserLocks>,
    engine: Arc<QuestEngine>,
}

impl EvaluateQuests {
    pub fn new(
        scenarios: Arc<Scenarios>,
        stats: Arc<PlayerStats>,
        locks: Arc<UserLocks>,
        engine: Arc<QuestEngine>,
    ) -> Self {
        Self {
            scenarios,
            stats,
            locks,
            engine,
        }
    }

    pub async fn execute(
        &self,
        user_id: &UserId,
        scenario_id: &ScenarioId,
    ) -> Result<Vec<Quest>, QuestError> {
        let scenario = self
            .scenarios
            .get(scenario_id)
            .await?
            .ok_or_else(|| QuestError::ScenarioNotFound(scenario_id.clone()))?;

        let _guard = self.locks.lock(user_id).await;
        let mut profile = self.stats.get(user_id).await?;
        let completed = self.engine.evaluate_profile(&mut profile, &scenario);

        if !completed.is_empty() {
            self.stats.save(user_id, &profile).await?;
        }
        Ok(completed)
    }
}

/// Per-quest completion and requirement status for a player.
pub struct GetQuestProgress {
    scenarios: Arc<Scenarios>,
    stats: Arc<PlayerStats>,
    engine: Arc<QuestEngine>,
}

impl GetQuestProgress {
    pub fn new(scenarios: Arc<Scenarios>, stats: Arc<PlayerStats>, engine: Arc<QuestEngine>) -> Self {
        Self {
            scenarios,
            stats,
            engine,
        }
    }

    pub async fn execute(
        &self,
        user_id: &UserId,
        scenario_id: &ScenarioId,
    ) -> Result<Vec<QuestProgress>, QuestError> {
        let scenario = self
            .scenarios
            .get(scenario_id)
            .await?
            .ok_or_else(|| QuestError::ScenarioNotFound(scenario_id.clone()))?;
        let profile = self.stats.get(user_id).await?;
        Ok(self.engine.progress(&profile, &scenario))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum QuestError {
    #[error("Scenario not found: {0}")]
    ScenarioNotFound(ScenarioId),
    #[error("Repository error: {0}")]
    Storage(#[from] RepoError),
}
