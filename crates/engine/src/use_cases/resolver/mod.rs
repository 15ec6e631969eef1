//! Node resolution.
//!
//! Turns a (scenario, node, choice) triple into the next node. Resolution is
//! total: a missing target is recovered from, in order, the shared fallback
//! table, the cyberpunk synthesis table (cyberpunk scenarios only), generated
//! `content_node_*` continuations, and finally a terminal node.

mod fallback;
mod synthesis;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use storyloom_domain::{Node, NodeId, Scenario, Theme};

pub use synthesis::{
    is_content_node, title_case, CONTENT_NODE_PREFIX, CYBERPUNK_ENDINGS, END_AI_SINGULARITY,
    END_CORPORATE_POWER, END_REVOLUTION_VICTORY,
};

/// Which strategy produced a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionKind {
    FromScenario,
    FromFallback,
    Synthesized,
    Terminal,
}

/// A resolved node tagged with the strategy that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Defined in the scenario's own node map.
    FromScenario(Node),
    /// Taken from the shared fallback table.
    FromFallback(Node),
    /// Generated for a cyberpunk beat, ending or `content_node_*` id.
    Synthesized(Node),
    /// The scenario's `end` node, or the generic "Adventure Complete" node.
    Terminal(Node),
}

impl Resolution {
    pub fn node(&self) -> &Node {
        match self {
            Self::FromScenario(node)
            | Self::FromFallback(node)
            | Self::Synthesized(node)
            | Self::Terminal(node) => node,
        }
    }

    pub fn into_node(self) -> Node {
        match self {
            Self::FromScenario(node)
            | Self::FromFallback(node)
            | Self::Synthesized(node)
            | Self::Terminal(node) => node,
        }
    }

    pub fn kind(&self) -> ResolutionKind {
        match self {
            Self::FromScenario(_) => ResolutionKind::FromScenario,
            Self::FromFallback(_) => ResolutionKind::FromFallback,
            Self::Synthesized(_) => ResolutionKind::Synthesized,
            Self::Terminal(_) => ResolutionKind::Terminal,
        }
    }
}

/// Stateless resolver over immutable recovery tables built once at startup.
#[derive(Debug, Clone)]
pub struct NodeResolver {
    fallback: BTreeMap<NodeId, Node>,
    cyberpunk: BTreeMap<NodeId, Node>,
}

impl Default for NodeResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeResolver {
    pub fn new() -> Self {
        Self {
            fallback: fallback::nodes(),
            cyberpunk: synthesis::cyberpunk_nodes(),
        }
    }

    /// Find the node for `node_id`, recovering if the scenario lacks it.
    pub fn lookup(&self, scenario: &Scenario, node_id: &str) -> Resolution {
        if let Some(node) = scenario.node(node_id) {
            return Resolution::FromScenario(node.clone());
        }

        if let Some(node) = self.fallback.get(node_id) {
            tracing::debug!(
                scenario_id = %scenario.id,
                node_id,
                "Node served from fallback table"
            );
            return Resolution::FromFallback(node.clone());
        }

        if scenario.theme == Theme::Cyberpunk {
            if let Some(node) = self.cyberpunk.get(node_id) {
                tracing::debug!(
                    scenario_id = %scenario.id,
                    node_id,
                    "Node synthesized from cyberpunk table"
                );
                return Resolution::Synthesized(node.clone());
            }
        }

        if is_content_node(node_id) {
            tracing::debug!(
                scenario_id = %scenario.id,
                node_id,
                "Content node synthesized"
            );
            return Resolution::Synthesized(synthesis::content_node(&NodeId::new(node_id)));
        }

        tracing::warn!(
            scenario_id = %scenario.id,
            node_id,
            "Unresolvable node, ending adventure"
        );
        self.terminal(scenario)
    }

    /// Follow `choice_id` out of `current`.
    ///
    /// An id that `current` does not declare ends the adventure.
    pub fn follow(&self, scenario: &Scenario, current: &Node, choice_id: &str) -> Resolution {
        match current.choice(choice_id) {
            Some(choice) => self.lookup(scenario, choice.next_node.as_str()),
            None => {
                tracing::warn!(
                    scenario_id = %scenario.id,
                    node_id = %current.id,
                    choice_id,
                    "Choice not offered by node, ending adventure"
                );
                self.terminal(scenario)
            }
        }
    }

    /// Resolve the successor of `choice_id` taken at `current_node_id`.
    pub fn resolve(&self, scenario: &Scenario, current_node_id: &str, choice_id: &str) -> Resolution {
        let current = self.lookup(scenario, current_node_id);
        self.follow(scenario, current.node(), choice_id)
    }

    fn terminal(&self, scenario: &Scenario) -> Resolution {
        let node = scenario
            .end_node()
            .cloned()
            .unwrap_or_else(synthesis::adventure_complete);
        Resolution::Terminal(node)
    }
}
