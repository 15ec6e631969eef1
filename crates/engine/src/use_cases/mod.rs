//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area.
//! Use cases orchestrate across entity modules to fulfill user stories.
//! `action` and `resolver` are pure in-process components with no storage.

pub mod action;
pub mod choice;
pub mod quest;
pub mod resolver;
pub mod scenario;
pub mod stats;

// Re-export main types
pub use action::ActionClassifier;
pub use choice::{ChoiceError, ChoiceOutcome, ChoiceUseCases, MakeChoice};
pub use quest::{QuestEngine, QuestError, QuestProgress, QuestUseCases};
pub use resolver::{NodeResolver, Resolution, ResolutionKind};
pub use scenario::{ScenarioQueryError, ScenarioUseCases};
pub use stats::{StatsError, StatsUseCases, StatsView};
