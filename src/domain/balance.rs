//! Module defining the domain type representing the current balance of a user

use crate::domain::{Points, Timestamp, UserId, now_millis};

/// Snapshot of a user's balance as held by a balance store.
///
/// Values are never mutated in place: a mutation stores a new `UserBalance` which replaces the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserBalance {
    user_id: UserId,
    balance: Points,
    updated_at: Timestamp,
}

impl UserBalance {
    pub fn new(user_id: UserId, balance: Points, updated_at: Timestamp) -> Self {
        Self {
            user_id,
            balance,
            updated_at,
        }
    }

    /// The balance of a user that has never been written.
    pub fn empty(user_id: UserId) -> Self {
        Self::new(user_id, 0, now_millis())
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn balance(&self) -> Points {
        self.balance
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }
}
