//! Action classification.
//!
//! Maps a choice to an action category and the stat deltas taking it grants.
//! Categories come from keyword matching on the choice id; deltas come from the
//! choice's own `effect` block when it has one.

use storyloom_domain::{ActionCategory, ActionOutcome, Choice, DeltaSource, Stat, StatDelta};

/// Default in-game minutes charged per action.
pub const DEFAULT_MINUTES_PER_ACTION: i64 = 5;

struct Rule {
    category: ActionCategory,
    keywords: &'static [&'static str],
    deltas: &'static [(Stat, i64)],
}

// Checked in order; the first rule with a matching keyword wins.
const RULES: &[Rule] = &[
    Rule {
        category: ActionCategory::Combat,
        keywords: &["combat", "savaş", "fight", "attack", "battle"],
        deltas: &[
            (Stat::CombatSkill, 3),
            (Stat::DamageDealt, 45),
            (Stat::CombatWon, 1),
        ],
    },
    Rule {
        category: ActionCategory::Talk,
        keywords: &["talk", "konuş", "negotiate", "speak", "conversation"],
        deltas: &[
            (Stat::CharismaSkill, 2),
            (Stat::Conversations, 1),
            (Stat::NpcInteractions, 1),
        ],
    },
    Rule {
        category: ActionCategory::Exploration,
        keywords: &["investigate", "araştır", "search", "explore", "look"],
        deltas: &[
            (Stat::ExplorationSkill, 2),
            (Stat::SearchActions, 1),
            (Stat::LocationsVisited, 1),
        ],
    },
    Rule {
        category: ActionCategory::Magic,
        keywords: &["magic", "büyü", "spell", "cast"],
        deltas: &[(Stat::IntelligenceSkill, 3), (Stat::PuzzleAttempts, 1)],
    },
    Rule {
        category: ActionCategory::Collect,
        keywords: &["collect", "topla", "gather", "take", "grab"],
        deltas: &[(Stat::ExplorationSkill, 1), (Stat::ItemsCollected, 1)],
    },
    Rule {
        category: ActionCategory::Help,
        keywords: &["help", "yardım", "assist", "aid"],
        deltas: &[(Stat::CharismaSkill, 2), (Stat::NpcInteractions, 1)],
    },
];

const DEFAULT_DELTAS: &[(Stat, i64)] = &[(Stat::ExplorationSkill, 1)];

/// Pure choice classifier. Never touches storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionClassifier {
    minutes_per_action: i64,
}

impl Default for ActionClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_MINUTES_PER_ACTION)
    }
}

impl ActionClassifier {
    pub fn new(minutes_per_action: i64) -> Self {
        Self { minutes_per_action }
    }

    pub fn minutes_per_action(&self) -> i64 {
        self.minutes_per_action
    }

    /// Category for a choice id. Matching is case-insensitive.
    pub fn category(&self, choice_id: &str) -> ActionCategory {
        Self::rule_for(choice_id).map_or(ActionCategory::Default, |rule| rule.category)
    }

    /// Classify by id alone.
    pub fn classify(&self, choice_id: &str) -> ActionOutcome {
        let (category, table) = match Self::rule_for(choice_id) {
            Some(rule) => (rule.category, rule.deltas),
            None => (ActionCategory::Default, DEFAULT_DELTAS),
        };

        let mut deltas: Vec<StatDelta> = table
            .iter()
            .map(|(stat, delta)| StatDelta::new(*stat, *delta))
            .collect();
        self.push_universal(&mut deltas);

        ActionOutcome {
            category,
            source: DeltaSource::Classifier,
            deltas,
        }
    }

    /// Classify a choice, preferring its declared effects.
    ///
    /// `choice` is `None` when the current node has no choice with this id; the
    /// id is still classified so the action is counted.
    pub fn classify_choice(&self, choice_id: &str, choice: Option<&Choice>) -> ActionOutcome {
        let Some(choice) = choice.filter(|c| c.has_effect()) else {
            return self.classify(choice_id);
        };

        let mut deltas: Vec<StatDelta> = choice
            .effect
            .iter()
            .map(|(stat, delta)| StatDelta::new(stat.clone(), *delta))
            .collect();
        self.push_universal(&mut deltas);

        ActionOutcome {
            category: self.category(choice_id),
            source: DeltaSource::ChoiceEffect,
            deltas,
        }
    }

    fn push_universal(&self, deltas: &mut Vec<StatDelta>) {
        deltas.push(StatDelta::new(Stat::TotalActions, 1));
        deltas.push(StatDelta::new(Stat::TimeSpent, self.minutes_per_action));
    }

    fn rule_for(choice_id: &str) -> Option<&'static Rule> {
        let id = choice_id.to_lowercase();
        RULES
            .iter()
            .find(|rule| rule.keywords.iter().any(|keyword| id.contains(keyword)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> ActionClassifier {
        ActionClassifier::default()
    }

    #[test]
    fn gather_is_collect() {
        let outcome = classifier().classify("gather_info");
        assert_eq!(outcome.category, ActionCategory::Collect);
        assert_eq!(outcome.source, DeltaSource::Classifier);
        assert_eq!(outcome.delta_for("exploration_skill"), 1);
        assert_eq!(outcome.delta_for("items_collected"), 1);
        assert_eq!(outcome.delta_for("total_actions"), 1);
        assert_eq!(outcome.delta_for("time_spent"), 5);
        assert_eq!(outcome.deltas.len(), 4);
    }

    #[test]
    fn each_category_grants_its_listed_deltas() {
        let cases: &[(&str, ActionCategory, &[(&str, i64)])] = &[
            (
                "attack_dragon",
                ActionCategory::Combat,
                &[("combat_skill", 3), ("damage_dealt", 45), ("combat_won", 1)],
            ),
            (
                "negotiate_alliance",
                ActionCategory::Talk,
                &[("charisma_skill", 2), ("conversations", 1), ("npc_interactions", 1)],
            ),
            (
                "explore_outskirts",
                ActionCategory::Exploration,
                &[("exploration_skill", 2), ("search_actions", 1), ("locations_visited", 1)],
            ),
            (
                "cast_ward",
                ActionCategory::Magic,
                &[("intelligence_skill", 3), ("puzzle_attempts", 1)],
            ),
            (
                "assist_villager",
                ActionCategory::Help,
                &[("charisma_skill", 2), ("npc_interactions", 1)],
            ),
            ("wait", ActionCategory::Default, &[("exploration_skill", 1)]),
        ];

        for (id, category, expected) in cases {
            let outcome = classifier().classify(id);
            assert_eq!(outcome.category, *category, "{id}");
            for (stat, delta) in *expected {
                assert_eq!(outcome.delta_for(stat), *delta, "{id} / {stat}");
            }
            assert_eq!(outcome.deltas.len(), expected.len() + 2, "{id}");
        }
    }

    #[test]
    fn earlier_rules_win_and_matching_ignores_case() {
        // "fight" (combat) beats "search" (exploration).
        assert_eq!(classifier().category("search_and_fight"), ActionCategory::Combat);
        assert_eq!(classifier().category("SPEAK_Truth"), ActionCategory::Talk);
        assert_eq!(classifier().category("Savaş"), ActionCategory::Combat);
        assert_eq!(classifier().category("BÜYÜ_yap"), ActionCategory::Magic);
    }

    #[test]
    fn declared_effect_replaces_keyword_deltas() {
        let choice = Choice::new("take_dragon_egg", "Take the egg", "content_node_1")
            .with_effect("items_collected", 1)
            .with_effect("xp", 50);

        let outcome = classifier().classify_choice("take_dragon_egg", Some(&choice));
        assert_eq!(outcome.source, DeltaSource::ChoiceEffect);
        assert_eq!(outcome.category, ActionCategory::Collect);
        assert_eq!(outcome.delta_for("xp"), 50);
        assert_eq!(outcome.delta_for("exploration_skill"), 0);
        assert_eq!(outcome.delta_for("total_actions"), 1);
    }

    #[test]
    fn choice_without_effect_or_unknown_choice_falls_back_to_keywords() {
        let choice = Choice::new("search_tracks", "Follow tracks", "lair");
        let with = classifier().classify_choice("search_tracks", Some(&choice));
        let without = classifier().classify_choice("search_tracks", None);
        assert_eq!(with, without);
        assert_eq!(with.source, DeltaSource::Classifier);
    }

    #[test]
    fn minutes_per_action_is_configurable() {
        let outcome = ActionClassifier::new(12).classify("wait");
        assert_eq!(outcome.delta_for("time_spent"), 12);
    }
}
