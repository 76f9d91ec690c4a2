//! Module providing one mutual exclusion lock per user

use std::sync::{Arc, Mutex};

use dashmap::DashMap;

use crate::domain::UserId;

/// Hands out the lock guarding the balance of each user.
///
/// Locks are created on first request and kept forever, so the registry grows with the number of distinct users.
#[derive(Debug, Default)]
pub(crate) struct LockRegistry {
    locks: DashMap<UserId, Arc<Mutex<()>>>,
}

impl LockRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Returns the lock of `user_id`, creating it if needed.
    ///
    /// The entry API holds the shard lock while inserting, so concurrent first calls for the same user agree on a single lock.
    pub(crate) fn lock_for(&self, user_id: UserId) -> Arc<Mutex<()>> {
        Arc::clone(&self.locks.entry(user_id).or_default())
    }

    /// Number of users a lock was handed out for.
    pub(crate) fn len(&self) -> usize {
        self.locks.len()
    }
}
