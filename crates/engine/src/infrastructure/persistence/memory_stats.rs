//! In-memory stats storage for ephemeral sessions and tests.

use std::collections::HashMap;

use async_trait::async_trait;
use storyloom_domain::{StatProfile, UserId};
use tokio::sync::RwLock;

use crate::infrastructure::ports::{RepoError, StatsRepo};

#[derive(Default)]
pub struct InMemoryStatsRepo {
    profiles: RwLock<HashMap<UserId, StatProfile>>,
}

impl InMemoryStatsRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a profile directly (bypasses the monotone update path).
    pub async fn insert(&self, user_id: UserId, profile: StatProfile) {
        self.profiles.write().await.insert(user_id, profile);
    }
}

#[async_trait]
impl StatsRepo for InMemoryStatsRepo {
    async fn load(&self, user_id: &UserId) -> Result<Option<StatProfile>, RepoError> {
        Ok(self.profiles.read().await.get(user_id).cloned())
    }

    async fn save(&self, user_id: &UserId, profile: &StatProfile) -> Result<(), RepoError> {
        self.profiles
            .write()
            .await
            .insert(user_id.clone(), profile.clone());
        Ok(())
    }
}
