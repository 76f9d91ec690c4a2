mod config;
mod domain;
mod engine;
mod error;
mod input;
mod output;
mod store;
mod telemetry;

pub use config::{ENV_CHANNEL_CAPACITY, ENV_MAX_BALANCE, ENV_WORKERS, WalletConfig};
pub use domain::{
    NewTransaction, Points, Timestamp, TransactionKind, TransactionRecord, UserBalance, UserId,
};
pub use engine::{Wallet, validate};
pub use error::{Error, Rejection};
pub use output::BalanceRecord;
pub use store::{BalanceStore, HistoryStore, InMemoryBalanceStore, InMemoryHistoryStore};
pub use telemetry::setup_logging;

/// Replays a CSV batch of wallet commands and returns the resulting balance of every user.
///
/// Rows have the shape `type, user, amount` with `type` being `charge` or `use`. The commands are applied to a
/// fresh in-memory [`Wallet`] by `config.workers` threads; the commands of one user are applied in input order.
///
/// # Error handling
///
/// Malformed rows and refused commands do not abort the replay. Each of them is reported to `on_error`
/// (called from a dedicated thread, hence the `Send` bound) and processing continues with the next row.
/// Only a failure while collecting the final balances is returned as `Err`.
///
/// # Example
///
/// ```no_run
/// use std::fs::File;
/// use point_wallet::{Error, WalletConfig, process};
///
/// let reader = File::open("commands.csv").unwrap();
/// let config = WalletConfig::default();
///
/// let mut wtr = csv::Writer::from_writer(std::io::stdout());
/// for record in process(reader, &config, |e: Error| eprintln!("skipped: {e}")).unwrap() {
///     wtr.serialize(&record).unwrap();
/// }
/// wtr.flush().unwrap();
/// ```
pub fn process(
    reader: impl std::io::Read,
    config: &WalletConfig,
    on_error: impl FnMut(Error) + Send,
) -> Result<Vec<BalanceRecord>, Error> {
    let wallet = Wallet::in_memory(config);
    let commands = input::parse_commands(reader);
    engine::replay_commands(
        &wallet,
        commands,
        on_error,
        config.workers,
        config.channel_capacity,
    );
    output::to_balance_records(&wallet)
}
