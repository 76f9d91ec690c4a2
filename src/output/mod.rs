use serde::Serialize;

use crate::{
    Error,
    domain::{Points, UserBalance},
    engine::Wallet,
    store::{HistoryStore, InMemoryBalanceStore},
};


/// Collects one record per stored balance, ordered by user id.
pub(crate) fn to_balance_records<H: HistoryStore>(
    wallet: &Wallet<InMemoryBalanceStore, H>,
) -> Result<Vec<BalanceRecord>, Error> {
    let mut balances = wallet.balances().snapshot();
    balances.sort_by_key(|b| b.user_id());

    balances
        .into_iter()
        .map(|balance| {
            let transactions = wallet.find_history(balance.user_id())?.len();
            Ok(BalanceRecord::new(balance, transactions))
        })
        .collect()
}

/// Final state of a wallet, as written by the batch replay.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct BalanceRecord {
    pub user: u64,
    pub balance: Points,
    pub transactions: usize,
}

impl BalanceRecord {
    fn new(balance: UserBalance, transactions: usize) -> Self {
        Self {
            user: balance.user_id().into(),
            balance: balance.balance(),
            transactions,
        }
    }
}
