//! Player stat profile - accumulated skills, counters, completed quests and titles.
//!
//! ## Storage Shape
//!
//! In memory the profile keeps numeric stats, completed quests and earned
//! titles apart. On disk (and in the stats query) it is one flat mapping:
//!
//! ```json
//! { "xp": 100, "exploration_skill": 6, "quest_completed_first_steps": true,
//!   "titles": ["Adventurer"] }
//! ```
//!
//! Numeric stats never decrease; a completion flag only ever goes from unset to set.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::ids::QuestId;
use crate::value_objects::{
    parse_quest_completion_flag, quest_completion_flag, Stat, StatDelta, StatValue,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ProfileDocument", into = "ProfileDocument")]
pub struct StatProfile {
    numeric: BTreeMap<String, i64>,
    completed_quests: BTreeSet<QuestId>,
    titles: BTreeSet<String>,
}

impl StatProfile {
    /// A fresh profile with every recognized stat at zero.
    pub fn new() -> Self {
        Self {
            numeric: Stat::ALL
                .iter()
                .map(|stat| (stat.as_str().to_string(), 0))
                .collect(),
            completed_quests: BTreeSet::new(),
            titles: BTreeSet::new(),
        }
    }

    /// Current value of a numeric stat; absent stats read as zero.
    pub fn get(&self, stat: &str) -> i64 {
        self.numeric.get(stat).copied().unwrap_or(0)
    }

    pub fn numeric(&self) -> &BTreeMap<String, i64> {
        &self.numeric
    }

    /// Add a non-negative delta, creating the stat at zero if absent.
    ///
    /// Negative deltas are rejected so counters stay monotone; returns whether
    /// the delta was applied.
    pub fn add(&mut self, stat: impl Into<String>, delta: i64) -> bool {
        if delta < 0 {
            return false;
        }
        let value = self.numeric.entry(stat.into()).or_insert(0);
        *value = value.saturating_add(delta);
        true
    }

    pub fn apply(&mut self, delta: &StatDelta) -> bool {
        self.add(delta.stat.clone(), delta.delta)
    }

    /// Assign a boolean stat.
    ///
    /// Only `quest_completed_<id>` keys are meaningful, and only `true` changes
    /// anything. Returns whether the profile changed.
    pub fn set_flag(&mut self, stat: &str, value: bool) -> bool {
        match parse_quest_completion_flag(stat) {
            Some(quest_id) if value => self.completed_quests.insert(quest_id),
            _ => false,
        }
    }

    pub fn is_quest_completed(&self, quest_id: &QuestId) -> bool {
        self.completed_quests.contains(quest_id)
    }

    /// Record a quest as completed; returns false if it already was.
    pub fn mark_quest_completed(&mut self, quest_id: QuestId) -> bool {
        self.completed_quests.insert(quest_id)
    }

    pub fn completed_quests(&self) -> &BTreeSet<QuestId> {
        &self.completed_quests
    }

    /// Titles accumulate with set semantics.
    pub fn earn_title(&mut self, title: impl Into<String>) -> bool {
        self.titles.insert(title.into())
    }

    pub fn titles(&self) -> &BTreeSet<String> {
        &self.titles
    }

    /// Flat view: numeric stats plus `quest_completed_<id>: true` flags.
    pub fn to_stat_map(&self) -> BTreeMap<String, StatValue> {
        let mut map: BTreeMap<String, StatValue> = self
            .numeric
            .iter()
            .map(|(k, v)| (k.clone(), StatValue::Number(*v)))
            .collect();
        for quest_id in &self.completed_quests {
            map.insert(quest_completion_flag(quest_id), StatValue::Flag(true));
        }
        map
    }
}

impl Default for StatProfile {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialized form of a profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ProfileDocument {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    titles: Vec<String>,
    #[serde(flatten)]
    stats: BTreeMap<String, StatValue>,
}

impl From<ProfileDocument> for StatProfile {
    fn from(doc: ProfileDocument) -> Self {
        // Stats recognized after the file was written still read back as zero.
        let mut profile = StatProfile {
            titles: doc.titles.into_iter().collect(),
            ..StatProfile::new()
        };
        for (key, value) in doc.stats {
            match value {
                StatValue::Number(n) => {
                    profile.numeric.insert(key, n);
                }
                StatValue::Flag(flag) => {
                    profile.set_flag(&key, flag);
                }
            }
        }
        profile
    }
}

impl From<StatProfile> for ProfileDocument {
    fn from(profile: StatProfile) -> Self {
        Self {
            stats: profile.to_stat_map(),
            titles: profile.titles.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_profile_has_recognized_stats_at_zero() {
        let profile = StatProfile::new();
        for stat in Stat::ALL {
            assert_eq!(profile.numeric().get(stat.as_str()), Some(&0));
        }
        assert!(profile.completed_quests().is_empty());
        assert_eq!(profile.get("unknown_stat"), 0);
    }

    #[test]
    fn negative_deltas_are_rejected() {
        let mut profile = StatProfile::new();
        assert!(profile.add("xp", 10));
        assert!(!profile.add("xp", -5));
        assert_eq!(profile.get("xp"), 10);
    }

    #[test]
    fn add_creates_unknown_stats() {
        let mut profile = StatProfile::new();
        profile.add("dragons_befriended", 2);
        assert_eq!(profile.get("dragons_befriended"), 2);
    }

    #[test]
    fn completion_flags_only_move_forward() {
        let mut profile = StatProfile::new();
        let quest = QuestId::new("first_steps");

        assert!(profile.set_flag("quest_completed_first_steps", true));
        assert!(profile.is_quest_completed(&quest));
        assert!(!profile.set_flag("quest_completed_first_steps", false));
        assert!(profile.is_quest_completed(&quest));
        assert!(!profile.set_flag("brave", true));
    }

    #[test]
    fn serializes_as_flat_mapping() {
        let mut profile = StatProfile::new();
        profile.add("xp", 100);
        profile.mark_quest_completed(QuestId::new("first_steps"));
        profile.earn_title("Adventurer");

        let json = serde_json::to_value(&profile).expect("serialize");
        assert_eq!(json["xp"], 100);
        assert_eq!(json["quest_completed_first_steps"], true);
        assert_eq!(json["titles"][0], "Adventurer");
        assert_eq!(json["combat_skill"], 0);
    }

    #[test]
    fn loads_flat_mapping_and_drops_foreign_booleans() {
        let profile: StatProfile = serde_json::from_str(
            r#"{"xp": 40, "quest_completed_social_butterfly": true,
                "quest_completed_first_steps": false, "tutorial_seen": true}"#,
        )
        .expect("deserialize");

        assert_eq!(profile.get("xp"), 40);
        assert!(profile.is_quest_completed(&QuestId::new("social_butterfly")));
        assert!(!profile.is_quest_completed(&QuestId::new("first_steps")));
        assert!(!profile.to_stat_map().contains_key("tutorial_seen"));
        assert!(profile.titles().is_empty());
    }
}
