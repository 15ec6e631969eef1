//! Stat vocabulary for player profiles.
//!
//! Profiles accept any stat name, but only the names enumerated by [`Stat`]
//! are initialized on a fresh profile and referenced by built-in content.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::QuestId;

/// Key prefix for per-quest completion flags in the flat stat mapping.
pub const QUEST_COMPLETED_PREFIX: &str = "quest_completed_";

/// Build the completion flag key for a quest (`quest_completed_<id>`).
pub fn quest_completion_flag(quest_id: &QuestId) -> String {
    format!("{QUEST_COMPLETED_PREFIX}{quest_id}")
}

/// Extract the quest id from a completion flag key, if it is one.
pub fn parse_quest_completion_flag(key: &str) -> Option<QuestId> {
    key.strip_prefix(QUEST_COMPLETED_PREFIX)
        .filter(|id| !id.is_empty())
        .map(QuestId::from)
}

/// Recognized numeric stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stat {
    // Progression
    Xp,
    Level,
    QuestsCompleted,
    // Skills
    ExplorationSkill,
    CombatSkill,
    CharismaSkill,
    IntelligenceSkill,
    // Action counters
    LocationsVisited,
    CluesFound,
    SearchActions,
    CombatWon,
    NpcInteractions,
    ItemsCollected,
    DamageDealt,
    TacticsUsed,
    PuzzleAttempts,
    CorrectAnswers,
    Conversations,
    RelationshipBuilt,
    TimeSpent,
    TotalActions,
}

impl Stat {
    pub const ALL: [Stat; 21] = [
        Stat::Xp,
        Stat::Level,
        Stat::QuestsCompleted,
        Stat::ExplorationSkill,
        Stat::CombatSkill,
        Stat::CharismaSkill,
        Stat::IntelligenceSkill,
        Stat::LocationsVisited,
        Stat::CluesFound,
        Stat::SearchActions,
        Stat::CombatWon,
        Stat::NpcInteractions,
        Stat::ItemsCollected,
        Stat::DamageDealt,
        Stat::TacticsUsed,
        Stat::PuzzleAttempts,
        Stat::CorrectAnswers,
        Stat::Conversations,
        Stat::RelationshipBuilt,
        Stat::TimeSpent,
        Stat::TotalActions,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Xp => "xp",
            Self::Level => "level",
            Self::QuestsCompleted => "quests_completed",
            Self::ExplorationSkill => "exploration_skill",
            Self::CombatSkill => "combat_skill",
            Self::CharismaSkill => "charisma_skill",
            Self::IntelligenceSkill => "intelligence_skill",
            Self::LocationsVisited => "locations_visited",
            Self::CluesFound => "clues_found",
            Self::SearchActions => "search_actions",
            Self::CombatWon => "combat_won",
            Self::NpcInteractions => "npc_interactions",
            Self::ItemsCollected => "items_collected",
            Self::DamageDealt => "damage_dealt",
            Self::TacticsUsed => "tactics_used",
            Self::PuzzleAttempts => "puzzle_attempts",
            Self::CorrectAnswers => "correct_answers",
            Self::Conversations => "conversations",
            Self::RelationshipBuilt => "relationship_built",
            Self::TimeSpent => "time_spent",
            Self::TotalActions => "total_actions",
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stat::ALL
            .iter()
            .copied()
            .find(|stat| stat.as_str() == s)
            .ok_or_else(|| DomainError::parse(format!("Unknown stat: {s}")))
    }
}

impl From<Stat> for String {
    fn from(stat: Stat) -> Self {
        stat.as_str().to_string()
    }
}

/// A value in the flat stat mapping: a counter or a completion flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Flag(bool),
    Number(i64),
}

impl StatValue {
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Flag(_) => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(b) => Some(*b),
            Self::Number(_) => None,
        }
    }
}

/// A single stat change produced by a choice or a quest reward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatDelta {
    pub stat: String,
    pub delta: i64,
}

impl StatDelta {
    pub fn new(stat: impl Into<String>, delta: i64) -> Self {
        Self {
            stat: stat.into(),
            delta,
        }
    }
}
