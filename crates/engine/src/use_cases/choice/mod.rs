//! Choice use cases.
//!
//! Taking a choice is the only path that both mutates stats and evaluates
//! quests. The sequence is fixed: classify, apply deltas, evaluate quests,
//! resolve the next node. Quests therefore see the deltas of the choice that
//! triggered them.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use storyloom_domain::{
    ActionCategory, ActionOutcome, ChoiceId, DomainError, Node, NodeId, Quest, ScenarioId,
    StatProfile, UserId,
};

use crate::entities::{PlayerStats, Scenarios};
use crate::infrastructure::ports::RepoError;
use crate::stores::UserLocks;
use crate::use_cases::action::ActionClassifier;
use crate::use_cases::quest::QuestEngine;
use crate::use_cases::resolver::{NodeResolver, ResolutionKind};

/// Everything a single choice produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOutcome {
    pub node: Node,
    /// One `Quest Completed: <title>` line per quest completed by this choice.
    pub notifications: Vec<String>,
    pub resolution: ResolutionKind,
    pub category: ActionCategory,
    pub completed_quests: Vec<Quest>,
}

impl ChoiceOutcome {
    /// The boundary view: next node and notifications.
    pub fn into_view(self) -> (Node, Vec<String>) {
        (self.node, self.notifications)
    }
}

pub fn quest_notification(quest: &Quest) -> String {
    format!("Quest Completed: {}", quest.title)
}

/// Container for choice use cases.
pub struct ChoiceUseCases {
    pub make_choice: Arc<MakeChoice>,
}

impl ChoiceUseCases {
    pub fn new(make_choice: Arc<MakeChoice>) -> Self {
        Self { make_choice }
    }
}

/// Apply a player's choice and move them to the next node.
pub struct MakeChoice {
    scenarios: Arc<Scenarios>,
    stats: Arc<PlayerStats>,
    locks: Arc<UserLocks>,
    classifier: ActionClassifier,
    quests: Arc<QuestEngine>,
    resolver: Arc<NodeResolver>,
}

impl MakeChoice {
    pub fn new(
        scenarios: Arc<Scenarios>,
        stats: Arc<PlayerStats>,
        locks: Arc<UserLocks>,
        classifier: ActionClassifier,
        quests: Arc<QuestEngine>,
        resolver: Arc<NodeResolver>,
    ) -> Self {
        Self {
            scenarios,
            stats,
            locks,
            classifier,
            quests,
            resolver,
        }
    }

    /// Take `choice_id` at `current_node_id`.
    ///
    /// An unknown or malformed scenario fails before the profile is touched.
    /// The profile is loaded once and saved once while the user's lock is held.
    pub async fn execute(
        &self,
        user_id: &UserId,
        scenario_id: &ScenarioId,
        current_node_id: &NodeId,
        choice_id: &ChoiceId,
    ) -> Result<ChoiceOutcome, ChoiceError> {
        let scenario = self
            .scenarios
            .get(scenario_id)
            .await?
            .ok_or_else(|| ChoiceError::ScenarioNotFound(scenario_id.clone()))?;
        scenario.validate()?;

        let current = self.resolver.lookup(&scenario, current_node_id.as_str());
        let choice = current.node().choice(choice_id.as_str());
        if choice.is_none() {
            tracing::warn!(
                user_id = %user_id,
                scenario_id = %scenario_id,
                node_id = %current_node_id,
                choice_id = %choice_id,
                "Choice not offered at node, counting it anyway"
            );
        }
        let action = self.classifier.classify_choice(choice_id.as_str(), choice);

        let completed = {
            let _guard = self.locks.lock(user_id).await;
            let mut profile = self.stats.get(user_id).await?;
            self.apply_action(user_id, &mut profile, &action);
            let completed = self.quests.evaluate_profile(&mut profile, &scenario);
            self.stats.save(user_id, &profile).await?;
            completed
        };

        let notifications: Vec<String> = completed.iter().map(quest_notification).collect();
        let next = self.resolver.follow(&scenario, current.node(), choice_id.as_str());

        tracing::info!(
            user_id = %user_id,
            scenario_id = %scenario_id,
            node_id = %current_node_id,
            choice_id = %choice_id,
            category = %action.category,
            next_node_id = %next.node().id,
            resolution = ?next.kind(),
            quests_completed = completed.len(),
            "Choice applied"
        );

        Ok(ChoiceOutcome {
            resolution: next.kind(),
            node: next.into_node(),
            notifications,
            category: action.category,
            completed_quests: completed,
        })
    }

    fn apply_action(
        &self,
        user_id: &UserId,
        profile: &mut StatProfile,
        action: &ActionOutcome,
    ) {
        for delta in &action.deltas {
            if !profile.apply(delta) {
                tracing::warn!(
                    user_id = %user_id,
                    stat = %delta.stat,
                    delta = delta.delta,
                    "Ignoring negative stat delta"
                );
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ChoiceError {
    #[error("Scenario not found: {0}")]
    ScenarioNotFound(ScenarioId),
    #[error("Malformed scenario: {0}")]
    MalformedScenario(#[from] DomainError),
    #[error("Repository error: {0}")]
    Storage(#[from] RepoError),
}
