//! Module holding the policy deciding whether a balance mutation is accepted.

use crate::{
    domain::{Points, TransactionKind},
    error::Rejection,
};

/// Decides whether a transaction of `amount` moving the balance from `prev_balance` to `new_balance` is allowed.
///
/// `new_balance` is computed by the caller. The ceiling is inclusive: a charge landing exactly on `max_balance`
/// is accepted, and so is a use that empties the balance.
pub fn validate(
    amount: Points,
    prev_balance: Points,
    new_balance: Points,
    kind: TransactionKind,
    max_balance: Points,
) -> Result<(), Rejection> {
    if amount <= 0 {
        return Err(Rejection::NonPositiveAmount);
    }

    match kind {
        TransactionKind::Charge if new_balance > max_balance => {
            Err(Rejection::BalanceCeilingExceeded { max_balance })
        }
        TransactionKind::Use if prev_balance < amount => Err(Rejection::InsufficientBalance {
            balance: prev_balance,
        }),
        _ => Ok(()),
    }
}
