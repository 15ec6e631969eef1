//! Quest entity - stat thresholds that unlock rewards once all are met.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entities::StatProfile;
use crate::ids::QuestId;
use crate::value_objects::{quest_completion_flag, StatDelta};

/// Rewards granted when a quest completes.
///
/// Serialized as a flat object: every integer entry is a stat delta and the
/// optional `title` key names an achievement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestRewards {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(flatten)]
    pub stats: BTreeMap<String, i64>,
}

impl QuestRewards {
    pub fn deltas(&self) -> impl Iterator<Item = StatDelta> + '_ {
        self.stats
            .iter()
            .map(|(stat, delta)| StatDelta::new(stat.clone(), *delta))
    }
}

/// A requirement that is not yet met.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnmetRequirement {
    pub stat: String,
    pub current: i64,
    pub threshold: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    pub id: QuestId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Every stat must be at least its threshold.
    #[serde(default)]
    pub requirements: BTreeMap<String, i64>,
    #[serde(default)]
    pub rewards: QuestRewards,
}

impl Quest {
    pub fn new(id: impl Into<QuestId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            requirements: BTreeMap::new(),
            rewards: QuestRewards::default(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn requiring(mut self, stat: impl Into<String>, threshold: i64) -> Self {
        self.requirements.insert(stat.into(), threshold);
        self
    }

    pub fn rewarding(mut self, stat: impl Into<String>, delta: i64) -> Self {
        self.rewards.stats.insert(stat.into(), delta);
        self
    }

    pub fn rewarding_title(mut self, title: impl Into<String>) -> Self {
        self.rewards.title = Some(title.into());
        self
    }

    /// The `quest_completed_<id>` key recorded in the stat mapping.
    pub fn completion_flag(&self) -> String {
        quest_completion_flag(&self.id)
    }

    /// Requirements the profile does not meet yet, in stat-name order.
    pub fn unmet_requirements(&self, profile: &StatProfile) -> Vec<UnmetRequirement> {
        self.requirements
            .iter()
            .filter_map(|(stat, threshold)| {
                let current = profile.get(stat);
                (current < *threshold).then(|| UnmetRequirement {
                    stat: stat.clone(),
                    current,
                    threshold: *threshold,
                })
            })
            .collect()
    }

    pub fn is_satisfied_by(&self, profile: &StatProfile) -> bool {
        self.requirements
            .iter()
            .all(|(stat, threshold)| profile.get(stat) >= *threshold)
    }
}
