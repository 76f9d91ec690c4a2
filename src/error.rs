//! Module defining the errors which are exposed to the users of the crate

use crate::domain::{Points, UserId};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A charge or use that violates the wallet policy. Nothing was written.
    #[error("rejected — user: {user_id}, amount: {amount}: {reason}")]
    Rejected {
        user_id: u64,
        amount: Points,
        reason: Rejection,
    },

    /// Invalid CSV
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Valid CSV that does not describe a known command
    #[error("invalid input — user: {user_id}: {message}")]
    Input { user_id: u64, message: String },

    /// Failure reported by a balance or history store
    #[error("store error: {message}")]
    Store { message: String },

    /// Unparsable configuration value
    #[error("invalid configuration for {key}: {message}")]
    Config { key: &'static str, message: String },
}

impl Error {
    /// The validation failure behind this error, if it is one.
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Error::Rejected { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

/// Reasons for which a mutation is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("the amount must be positive")]
    NonPositiveAmount,

    #[error("the resulting balance would exceed the maximum of {max_balance}")]
    BalanceCeilingExceeded { max_balance: Points },

    #[error("insufficient balance ({balance} available)")]
    InsufficientBalance { balance: Points },
}

pub(crate) fn rejected(user_id: UserId, amount: Points, reason: Rejection) -> Error {
    Error::Rejected {
        user_id: user_id.into(),
        amount,
        reason,
    }
}

pub(crate) fn input_error(user_id: impl Into<u64>, message: impl Into<String>) -> Error {
    Error::Input {
        user_id: user_id.into(),
        message: message.into(),
    }
}
