//! Module defining the storage collaborators of the wallet.
//!
//! The stores only guarantee single-key atomicity. Serializing read-modify-write sequences over a user's
//! balance is the job of [`crate::Wallet`], which never calls `put` without holding the user's lock.

mod memory;

pub use memory::{InMemoryBalanceStore, InMemoryHistoryStore};

use crate::{
    Error,
    domain::{NewTransaction, Points, TransactionRecord, UserBalance, UserId},
};

/// Point reads and upserts of the current balance of each user.
pub trait BalanceStore: Send + Sync {
    /// Returns the stored balance, or a zero balance if the user was never written.
    fn get(&self, user_id: UserId) -> Result<UserBalance, Error>;

    /// Creates or overwrites the balance of a user and returns the stored value with a fresh timestamp.
    fn put(&self, user_id: UserId, balance: Points) -> Result<UserBalance, Error>;
}

/// Append-only log of accepted transactions.
pub trait HistoryStore: Send + Sync {
    /// Persists the transaction and returns it with its assigned id.
    fn append(&self, transaction: NewTransaction) -> Result<TransactionRecord, Error>;

    /// All records of the user, in insertion order.
    fn list_by_user(&self, user_id: UserId) -> Result<Vec<TransactionRecord>, Error>;
}
