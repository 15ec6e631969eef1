//! Per-user mutual exclusion for profile read-modify-write cycles.

use std::sync::Arc;

use dashmap::DashMap;
use storyloom_domain::UserId;
use tokio::sync::{Mutex, OwnedMutexGuard};

type LockMap = DashMap<UserId, Arc<Mutex<()>>>;

/// Lazily creates one async mutex per user id.
///
/// Different users never contend. Guards are owned so they can be held across
/// storage awaits. An entry lives only while some caller holds or waits for
/// it, so the map stays as small as the set of users currently in a request.
#[derive(Default)]
pub struct UserLocks {
    locks: Arc<LockMap>,
}

impl UserLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `user_id`'s profile.
    pub async fn lock(&self, user_id: &UserId) -> UserLockGuard {
        // Clone the Arc out so the shard lock is released before awaiting.
        let lock = self
            .locks
            .entry(user_id.clone())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        UserLockGuard {
            guard: Some(lock.lock_owned().await),
            user_id: user_id.clone(),
            locks: Arc::clone(&self.locks),
        }
    }

    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}

/// Exclusive access to one user's profile until dropped.
pub struct UserLockGuard {
    guard: Option<OwnedMutexGuard<()>>,
    user_id: UserId,
    locks: Arc<LockMap>,
}

impl Drop for UserLockGuard {
    fn drop(&mut self) {
        // Release first so the map holds the only reference when nobody waits.
        drop(self.guard.take());
        self.locks
            .remove_if(&self.user_id, |_, lock| Arc::strong_count(lock) == 1);
    }
}
