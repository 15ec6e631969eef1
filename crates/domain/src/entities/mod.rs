//! Domain entities.

mod node;
mod quest;
mod scenario;
mod stat_profile;

pub use node::{Atmosphere, Choice, Node};
pub use quest::{Quest, QuestRewards, UnmetRequirement};
pub use scenario::{Difficulty, Scenario, Theme, END_NODE, START_NODE};
pub use stat_profile::StatProfile;
