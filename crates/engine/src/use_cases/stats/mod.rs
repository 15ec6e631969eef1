//! Player stats use cases.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use storyloom_domain::{StatValue, UserId};

use crate::entities::PlayerStats;
use crate::infrastructure::ports::RepoError;

/// The stats query result: the flat stat mapping plus earned titles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsView {
    /// Numeric stats and `quest_completed_<id>` flags.
    pub stats: BTreeMap<String, StatValue>,
    pub titles: BTreeSet<String>,
}

/// Container for stats use cases.
pub struct StatsUseCases {
    pub get: Arc<GetStats>,
}

impl StatsUseCases {
    pub fn new(get: Arc<GetStats>) -> Self {
        Self { get }
    }
}

pub struct GetStats {
    stats: Arc<PlayerStats>,
}

impl GetStats {
    pub fn new(stats: Arc<PlayerStats>) -> Self {
        Self { stats }
    }

    /// Never fails for an unknown user; they read as a fresh profile.
    pub async fn execute(&self, user_id: &UserId) -> Result<StatsView, StatsError> {
        let profile = self.stats.get(user_id).await?;
        Ok(StatsView {
            stats: profile.to_stat_map(),
            titles: profile.titles().clone(),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
