//! Module for the types defining the wallet domain.

mod balance;
mod transaction;

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

pub use balance::UserBalance;
pub(crate) use transaction::Command;
pub use transaction::{NewTransaction, TransactionKind, TransactionRecord};

/// Point amounts and balances. Signed so that non-positive request amounts can be represented and rejected.
pub type Points = i64;

/// Milliseconds since the Unix epoch.
pub type Timestamp = u64;

/// Id identifying the owner of a wallet.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct UserId(u64);

impl UserId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

impl From<u64> for UserId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<UserId> for u64 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub(crate) fn now_millis() -> Timestamp {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as Timestamp)
        .unwrap_or_default()
}
