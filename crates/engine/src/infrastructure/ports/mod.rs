//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Scenario access (built-in catalog, per-document files, anything keyed by id)
//! - Player stat persistence (files today, any key-value store tomorrow)

mod error;
mod repos;
pub mod types;

// =============================================================================
// Repository Ports
// =============================================================================
pub use repos::{ScenarioRepo, StatsRepo};

// =============================================================================
// Types from types module
// =============================================================================
pub use types::ScenarioSummary;

// =============================================================================
// Test-Only Mock Repositories (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use repos::{MockScenarioRepo, MockStatsRepo};

// =============================================================================
// Error Types
// =============================================================================
pub use error::RepoError;
