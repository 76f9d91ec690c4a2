//! Module defining the domain types related to the representation of the transactions recorded in the history

use std::fmt;

use crate::domain::{Points, Timestamp, UserId};

/// The direction of a balance mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TransactionKind {
    /// Credit: increases the balance
    Charge,
    /// Debit: decreases the balance
    Use,
}

impl TransactionKind {
    /// Applies the transaction to `balance`. Saturates instead of overflowing so that oversized amounts
    /// end up being refused by the validation rule.
    pub(crate) fn apply(self, balance: Points, amount: Points) -> Points {
        match self {
            TransactionKind::Charge => balance.saturating_add(amount),
            TransactionKind::Use => balance.saturating_sub(amount),
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Charge => write!(f, "charge"),
            TransactionKind::Use => write!(f, "use"),
        }
    }
}

/// An accepted transaction, submitted to the history store before it got an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewTransaction {
    pub user_id: UserId,
    pub amount: Points,
    pub kind: TransactionKind,
    pub timestamp: Timestamp,
}

/// An entry of a user's history. Ids are assigned by the history store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionRecord {
    id: u64,
    user_id: UserId,
    amount: Points,
    kind: TransactionKind,
    timestamp: Timestamp,
}

impl TransactionRecord {
    pub fn new(id: u64, transaction: NewTransaction) -> Self {
        let NewTransaction {
            user_id,
            amount,
            kind,
            timestamp,
        } = transaction;
        Self {
            id,
            user_id,
            amount,
            kind,
            timestamp,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn amount(&self) -> Points {
        self.amount
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// The signed effect of this record on the balance.
    pub fn delta(&self) -> Points {
        match self.kind {
            TransactionKind::Charge => self.amount,
            TransactionKind::Use => -self.amount,
        }
    }
}

/// A mutation request read from batch input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Command {
    pub(crate) user_id: UserId,
    pub(crate) kind: TransactionKind,
    pub(crate) amount: Points,
}
