//! Node and Choice entities - one narrative beat and its outgoing edges.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ids::{ChoiceId, NodeId};

/// Optional presentation hints for a node. Opaque to the runtime.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Atmosphere {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sounds: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visuals: Option<String>,
}

/// An outgoing edge: player-visible label, successor id, optional stat effects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub id: ChoiceId,
    pub text: String,
    pub next_node: NodeId,
    /// Stat deltas applied when the choice is taken. Empty means "derive from the id".
    #[serde(default)]
    pub effect: BTreeMap<String, i64>,
}

impl Choice {
    pub fn new(id: impl Into<ChoiceId>, text: impl Into<String>, next_node: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            next_node: next_node.into(),
            effect: BTreeMap::new(),
        }
    }

    pub fn with_effect(mut self, stat: impl Into<String>, delta: i64) -> Self {
        self.effect.insert(stat.into(), delta);
        self
    }

    pub fn has_effect(&self) -> bool {
        !self.effect.is_empty()
    }
}

/// A single narrative beat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub atmosphere: Option<Atmosphere>,
    #[serde(default)]
    pub choices: Vec<Choice>,
}

impl Node {
    pub fn new(id: impl Into<NodeId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            atmosphere: None,
            choices: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_atmosphere(mut self, sounds: impl Into<String>, visuals: impl Into<String>) -> Self {
        self.atmosphere = Some(Atmosphere {
            sounds: Some(sounds.into()),
            visuals: Some(visuals.into()),
        });
        self
    }

    pub fn with_choice(mut self, choice: Choice) -> Self {
        self.choices.push(choice);
        self
    }

    /// Find a choice by id.
    pub fn choice(&self, id: &str) -> Option<&Choice> {
        self.choices.iter().find(|c| c.id == id)
    }

    /// A node with no choices ends the adventure.
    pub fn is_terminal(&self) -> bool {
        self.choices.is_empty()
    }
}
