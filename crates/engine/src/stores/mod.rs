//! In-memory state storage modules.
//!
//! Stores manage runtime state that doesn't belong in persistence:
//! - `UserLocks` - per-user serialization of profile updates

pub mod user_locks;

pub use user_locks::{UserLockGuard, UserLocks};
