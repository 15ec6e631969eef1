//! Player stats entity module.
//!
//! Wraps the stats port with the profile semantics callers rely on: an
//! unknown user reads as a fresh profile, numeric updates are additive and
//! never negative, and completion flags only ever become set.

use std::sync::Arc;

use storyloom_domain::{StatProfile, UserId};

use crate::infrastructure::ports::{RepoError, StatsRepo};
use crate::stores::UserLocks;

/// Player stats entity - profile load and single-stat updates.
pub struct PlayerStats {
    repo: Arc<dyn StatsRepo>,
    locks: Arc<UserLocks>,
}

impl PlayerStats {
    pub fn new(repo: Arc<dyn StatsRepo>, locks: Arc<UserLocks>) -> Self {
        Self { repo, locks }
    }

    /// The user's profile, or a zero-initialized one if none was saved.
    pub async fn get(&self, user_id: &UserId) -> Result<StatProfile, RepoError> {
        Ok(self.repo.load(user_id).await?.unwrap_or_default())
    }

    /// Persist a whole profile. Callers must already hold the user's lock.
    pub async fn save(&self, user_id: &UserId, profile: &StatProfile) -> Result<(), RepoError> {
        self.repo.save(user_id, profile).await
    }

    /// Add `delta` to one numeric stat and persist.
    ///
    /// Raw store operation: it does not evaluate quests. Gameplay changes go
    /// through [`MakeChoice`](crate::use_cases::MakeChoice), which applies
    /// deltas and quest evaluation under one lock.
    ///
    /// Acquires the user's lock, so it must not be called while holding it.
    /// A negative delta is ignored and nothing is written.
    pub async fn update(
        &self,
        user_id: &UserId,
        stat: &str,
        delta: i64,
    ) -> Result<StatProfile, RepoError> {
        let _guard = self.locks.lock(user_id).await;
        let mut profile = self.get(user_id).await?;

        if !profile.add(stat, delta) {
            tracing::warn!(user_id = %user_id, stat, delta, "Ignoring negative stat delta");
            return Ok(profile);
        }
        self.repo.save(user_id, &profile).await?;
        Ok(profile)
    }

    /// Assign a boolean stat and persist if anything changed.
    ///
    /// Like [`update`](Self::update), this bypasses quest evaluation; use
    /// [`MakeChoice`](crate::use_cases::MakeChoice) for gameplay.
    ///
    /// Acquires the user's lock, so it must not be called while holding it.
    pub async fn set_flag(
        &self,
        user_id: &UserId,
        stat: &str,
        value: bool,
    ) -> Result<StatProfile, RepoError> {
        let _guard = self.locks.lock(user_id).await;
        let mut profile = self.get(user_id).await?;

        if profile.set_flag(stat, value) {
            self.repo.save(user_id, &profile).await?;
        } else {
            tracing::debug!(user_id = %user_id, stat, value, "Flag assignment left profile unchanged");
        }
        Ok(profile)
    }
}
