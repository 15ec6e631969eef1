//! Storyloom Engine library.
//!
//! Branching story runtime: players take choices through scenario graphs,
//! choices feed a stat profile, and stat thresholds complete quests.
//!
//! ## Structure
//!
//! - `entities/` - Entity modules wrapping port operations
//! - `use_cases/` - Choice, quest, stats and scenario orchestration
//! - `infrastructure/` - Ports, storage adapters, built-in catalog, config
//! - `stores/` - In-memory runtime state (per-user locks)
//! - `app` - Application composition

pub mod app;
pub mod entities;
pub mod infrastructure;
pub mod stores;
pub mod use_cases;

/// End-to-end story flows against the built-in catalog.
#[cfg(test)]
mod e2e_tests;

pub use app::App;
