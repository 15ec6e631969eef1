//! Scenario entity - a named directed graph of narrative nodes.
//!
//! Every scenario has one entry node (`start`) and one exit node (`end`).
//! Choice targets are NOT required to exist in the node map: the engine's
//! node resolver recovers missing successors, so the document is stored and
//! returned exactly as authored.

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entities::{Node, Quest};
use crate::error::DomainError;
use crate::ids::{NodeId, ScenarioId};

/// Reserved entry node id.
pub const START_NODE: &str = "start";
/// Reserved terminal node id.
pub const END_NODE: &str = "end";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Fantasy,
    Warhammer,
    Cyberpunk,
    Horror,
    /// Any theme without dedicated handling, including unknown values.
    #[serde(other)]
    Other,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fantasy => write!(f, "fantasy"),
            Self::Warhammer => write!(f, "warhammer"),
            Self::Cyberpunk => write!(f, "cyberpunk"),
            Self::Horror => write!(f, "horror"),
            Self::Other => write!(f, "other"),
        }
    }
}

impl FromStr for Theme {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fantasy" => Ok(Self::Fantasy),
            "warhammer" => Ok(Self::Warhammer),
            "cyberpunk" => Ok(Self::Cyberpunk),
            "horror" => Ok(Self::Horror),
            "other" => Ok(Self::Other),
            _ => Err(DomainError::parse(format!("Unknown theme: {s}"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Extreme,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Easy => write!(f, "easy"),
            Self::Medium => write!(f, "medium"),
            Self::Hard => write!(f, "hard"),
            Self::Extreme => write!(f, "extreme"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            "extreme" => Ok(Self::Extreme),
            _ => Err(DomainError::parse(format!("Unknown difficulty: {s}"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: ScenarioId,
    pub title: String,
    pub theme: Theme,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub description: String,
    pub nodes: BTreeMap<NodeId, Node>,
    /// Quests in declaration order. Empty means the default quest set applies.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub quests: Vec<Quest>,

    // Opaque metadata, preserved verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub npc_relationships: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub levels: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quest_chains: Option<serde_json::Value>,
}

impl Scenario {
    pub fn new(
        id: impl Into<ScenarioId>,
        title: impl Into<String>,
        theme: Theme,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            theme,
            difficulty,
            description: String::new(),
            nodes: BTreeMap::new(),
            quests: Vec::new(),
            npc_relationships: None,
            levels: None,
            quest_chains: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add a node keyed by its own id.
    pub fn with_node(mut self, node: Node) -> Self {
        self.nodes.insert(node.id.clone(), node);
        self
    }

    pub fn with_quest(mut self, quest: Quest) -> Self {
        self.quests.push(quest);
        self
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn start_node(&self) -> Option<&Node> {
        self.node(START_NODE)
    }

    pub fn end_node(&self) -> Option<&Node> {
        self.node(END_NODE)
    }

    /// Check the structural invariants the runtime relies on.
    ///
    /// A scenario must define `start` and `end`, and every choice must carry a
    /// non-empty id that is unique within its node. Dangling `next_node`
    /// targets are allowed.
    pub fn validate(&self) -> Result<(), DomainError> {
        for reserved in [START_NODE, END_NODE] {
            if !self.nodes.contains_key(reserved) {
                return Err(DomainError::validation(format!(
                    "scenario '{}' has no '{}' node",
                    self.id, reserved
                )));
            }
        }

        for (key, node) in &self.nodes {
            if key != &node.id {
                return Err(DomainError::validation(format!(
                    "scenario '{}' stores node '{}' under key '{}'",
                    self.id, node.id, key
                )));
            }
            let mut seen = HashSet::with_capacity(node.choices.len());
            for choice in &node.choices {
                if choice.id.is_empty() {
                    return Err(DomainError::validation(format!(
                        "scenario '{}' node '{}' has a choice without an id",
                        self.id, key
                    )));
                }
                if !seen.insert(choice.id.as_str()) {
                    return Err(DomainError::validation(format!(
                        "scenario '{}' node '{}' repeats choice id '{}'",
                        self.id, key, choice.id
                    )));
                }
            }
        }

        Ok(())
    }
}
