extern crate self as storyloom_domain;

pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

// Re-export all entities (explicit list in entities/mod.rs)
pub use entities::{
    Atmosphere, Choice, Difficulty, Node, Quest, QuestRewards, Scenario, StatProfile, Theme,
    UnmetRequirement, END_NODE, START_NODE,
};

pub use error::DomainError;

// Re-export ID types
pub use ids::{ChoiceId, NodeId, QuestId, ScenarioId, UserId};

// Re-export value objects (explicit list in value_objects/mod.rs)
pub use value_objects::{
    parse_quest_completion_flag, quest_completion_flag, ActionCategory, ActionOutcome,
    DeltaSource, Stat, StatDelta, StatValue, QUEST_COMPLETED_PREFIX,
};
