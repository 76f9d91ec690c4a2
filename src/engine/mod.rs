//! Module for the core logic of the wallet: serialized balance mutations per user

mod locks;
mod orchestration;
mod validation;


use std::sync::PoisonError;

use tracing::debug;

use crate::{
    Error, WalletConfig,
    domain::{NewTransaction, Points, TransactionKind, TransactionRecord, UserBalance, UserId},
    error::rejected,
    store::{BalanceStore, HistoryStore, InMemoryBalanceStore, InMemoryHistoryStore},
};

use locks::LockRegistry;

pub(crate) use orchestration::replay_commands;
pub use validation::validate;

/// Coordinates charges and uses against a balance store and a history store.
///
/// Each mutation runs its read-validate-write-append sequence while holding the lock of the affected user,
/// so transactions of one user are applied one at a time while different users proceed in parallel.
/// Reads go straight to the stores without locking.
#[derive(Debug)]
pub struct Wallet<B, H> {
    balances: B,
    history: H,
    locks: LockRegistry,
    max_balance: Points,
}

impl Wallet<InMemoryBalanceStore, InMemoryHistoryStore> {
    /// A wallet backed by fresh in-memory stores.
    pub fn in_memory(config: &WalletConfig) -> Self {
        Self::new(
            InMemoryBalanceStore::new(),
            InMemoryHistoryStore::new(),
            config.max_balance,
        )
    }
}

impl<B: BalanceStore, H: HistoryStore> Wallet<B, H> {
    pub fn new(balances: B, history: H, max_balance: Points) -> Self {
        Self {
            balances,
            history,
            locks: LockRegistry::new(),
            max_balance,
        }
    }

    pub fn balances(&self) -> &B {
        &self.balances
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn max_balance(&self) -> Points {
        self.max_balance
    }

    /// Number of distinct users that attempted a mutation.
    pub fn known_users(&self) -> usize {
        self.locks.len()
    }

    pub fn find_balance(&self, user_id: UserId) -> Result<UserBalance, Error> {
        self.balances.get(user_id)
    }

    pub fn find_history(&self, user_id: UserId) -> Result<Vec<TransactionRecord>, Error> {
        self.history.list_by_user(user_id)
    }

    /// Credits `amount` points to the user and returns the new balance.
    pub fn charge(&self, user_id: UserId, amount: Points) -> Result<UserBalance, Error> {
        self.apply(user_id, amount, TransactionKind::Charge)
    }

    /// Debits `amount` points from the user and returns the new balance.
    pub fn use_points(&self, user_id: UserId, amount: Points) -> Result<UserBalance, Error> {
        self.apply(user_id, amount, TransactionKind::Use)
    }

    fn apply(
        &self,
        user_id: UserId,
        amount: Points,
        kind: TransactionKind,
    ) -> Result<UserBalance, Error> {
        let lock = self.locks.lock_for(user_id);
        // the mutex guards no data, a panic of a previous holder leaves nothing to repair
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

        let prev_balance = self.balances.get(user_id)?.balance();
        let new_balance = kind.apply(prev_balance, amount);

        validate(amount, prev_balance, new_balance, kind, self.max_balance)
            .map_err(|reason| rejected(user_id, amount, reason))?;

        let stored = self.balances.put(user_id, new_balance)?;
        let record = self.history.append(NewTransaction {
            user_id,
            amount,
            kind,
            timestamp: stored.updated_at(),
        })?;

        debug!(
            user = %user_id,
            %kind,
            amount,
            balance = stored.balance(),
            record = record.id(),
            "transaction accepted"
        );
        Ok(stored)
    }
}
