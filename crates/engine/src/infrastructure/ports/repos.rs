//! Repository port traits for scenario and stat storage.

use async_trait::async_trait;
use storyloom_domain::{Scenario, ScenarioId, StatProfile, UserId};

use super::error::RepoError;
use super::types::ScenarioSummary;

// =============================================================================
// Scenario Storage
// =============================================================================

/// Read-only scenario catalog.
///
/// Implementations return documents exactly as authored; they never rewrite
/// node maps or choice targets.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScenarioRepo: Send + Sync {
    async fn get(&self, id: &ScenarioId) -> Result<Option<Scenario>, RepoError>;
    async fn list(&self) -> Result<Vec<ScenarioSummary>, RepoError>;
}

// =============================================================================
// Player Stats Storage
// =============================================================================

/// One serialized profile per user id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsRepo: Send + Sync {
    /// `Ok(None)` when the user has never been saved.
    async fn load(&self, user_id: &UserId) -> Result<Option<StatProfile>, RepoError>;
    /// Replace the stored profile in a single write.
    async fn save(&self, user_id: &UserId, profile: &StatProfile) -> Result<(), RepoError>;
}
