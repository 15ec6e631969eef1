//! Value objects: immutable vocabulary types shared by entities and the engine.

mod action;
mod stat;

pub use action::{ActionCategory, ActionOutcome, DeltaSource};
pub use stat::{
    parse_quest_completion_flag, quest_completion_flag, Stat, StatDelta, StatValue,
    QUEST_COMPLETED_PREFIX,
};
