//! Action categories assigned to player choices.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value_objects::StatDelta;

/// What kind of action a choice represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionCategory {
    Combat,
    Talk,
    Exploration,
    Magic,
    Collect,
    Help,
    Default,
}

impl ActionCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Combat => "combat",
            Self::Talk => "talk",
            Self::Exploration => "exploration",
            Self::Magic => "magic",
            Self::Collect => "collect",
            Self::Help => "help",
            Self::Default => "default",
        }
    }
}

impl fmt::Display for ActionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the deltas of a classified action came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeltaSource {
    /// The choice declared an explicit `effect` block.
    ChoiceEffect,
    /// Deltas were derived from the choice id.
    Classifier,
}

/// Result of classifying a choice: its category and the deltas to apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionOutcome {
    pub category: ActionCategory,
    pub source: DeltaSource,
    pub deltas: Vec<StatDelta>,
}

impl ActionOutcome {
    /// Sum of deltas for one stat (counts repeated entries).
    pub fn delta_for(&self, stat: &str) -> i64 {
        self.deltas
            .iter()
            .filter(|d| d.stat == stat)
            .map(|d| d.delta)
            .sum()
    }
}
