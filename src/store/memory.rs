//! In-memory store implementations backed by concurrent maps

use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Duration,
};

use dashmap::DashMap;

use crate::{
    Error,
    domain::{NewTransaction, Points, TransactionRecord, UserBalance, UserId, now_millis},
    store::{BalanceStore, HistoryStore},
};

#[derive(Debug, Default)]
pub struct InMemoryBalanceStore {
    balances: DashMap<UserId, UserBalance>,
    latency: Option<Duration>,
}

impl InMemoryBalanceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store sleeping for `latency` on every access, which widens the window for races between callers.
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            balances: DashMap::new(),
            latency: Some(latency),
        }
    }

    /// All balances written so far, in no particular order.
    pub fn snapshot(&self) -> Vec<UserBalance> {
        self.balances.iter().map(|entry| *entry.value()).collect()
    }
}

impl BalanceStore for InMemoryBalanceStore {
    fn get(&self, user_id: UserId) -> Result<UserBalance, Error> {
        simulate_latency(self.latency);
        Ok(self
            .balances
            .get(&user_id)
            .map(|entry| *entry.value())
            .unwrap_or_else(|| UserBalance::empty(user_id)))
    }

    fn put(&self, user_id: UserId, balance: Points) -> Result<UserBalance, Error> {
        simulate_latency(self.latency);
        let stored = UserBalance::new(user_id, balance, now_millis());
        self.balances.insert(user_id, stored);
        Ok(stored)
    }
}

#[derive(Debug, Default)]
pub struct InMemoryHistoryStore {
    records: DashMap<UserId, Vec<TransactionRecord>>,
    last_id: AtomicU64,
    latency: Option<Duration>,
}

impl InMemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store sleeping for `latency` on every access.
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            latency: Some(latency),
            ..Self::default()
        }
    }
}

impl HistoryStore for InMemoryHistoryStore {
    fn append(&self, transaction: NewTransaction) -> Result<TransactionRecord, Error> {
        simulate_latency(self.latency);
        // ids start at 1
        let id = self.last_id.fetch_add(1, Ordering::Relaxed) + 1;
        let record = TransactionRecord::new(id, transaction);
        self.records
            .entry(transaction.user_id)
            .or_default()
            .push(record);
        Ok(record)
    }

    fn list_by_user(&self, user_id: UserId) -> Result<Vec<TransactionRecord>, Error> {
        simulate_latency(self.latency);
        Ok(self
            .records
            .get(&user_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default())
    }
}

fn simulate_latency(latency: Option<Duration>) {
    if let Some(latency) = latency {
        std::thread::sleep(latency);
    }
}
