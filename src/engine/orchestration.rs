//! Module focusing on the way batch commands are spread over worker threads

use std::{
    sync::mpsc::{SyncSender, sync_channel},
    thread::Scope,
};

use crate::{
    Error,
    domain::{Command, TransactionKind},
    engine::Wallet,
    store::{BalanceStore, HistoryStore},
};

///
/// Applies the commands to `wallet` using `num_workers` worker threads and returns once all of them were processed.
///
/// All workers share the wallet. Commands are sharded by user id, so the commands of one user are applied in input
/// order and the outcome does not depend on thread scheduling.
///
pub(crate) fn replay_commands<B: BalanceStore, H: HistoryStore>(
    wallet: &Wallet<B, H>,
    commands: impl IntoIterator<Item = Result<Command, Error>>,
    on_error: impl FnMut(Error) + Send,
    num_workers: usize,
    channel_capacity: usize,
) {
    let num_workers = num_workers.max(1);

    std::thread::scope(|s| {
        let error_tx = spawn_error_handler(s, on_error, channel_capacity);
        let worker_senders =
            spawn_worker_threads(s, wallet, error_tx.clone(), num_workers, channel_capacity);

        for result in commands {
            match result {
                Ok(command) => {
                    let worker_idx = (u64::from(command.user_id) % num_workers as u64) as usize;
                    // Send fails only if the worker panicked; the scope surfaces that panic.
                    let _ = worker_senders[worker_idx].send(command);
                }
                Err(e) => {
                    let _ = error_tx.send(e);
                }
            }
        }

        // Closing the channels lets the workers and then the error handler drain and exit
        drop(worker_senders);
        drop(error_tx);
    });
}

fn spawn_error_handler<'s>(
    s: &'s Scope<'s, '_>,
    mut on_error: impl FnMut(Error) + Send + 's,
    channel_capacity: usize,
) -> SyncSender<Error> {
    let (error_tx, error_rx) = sync_channel::<Error>(channel_capacity);

    s.spawn(move || {
        for err in error_rx {
            on_error(err)
        }
    });

    error_tx
}

fn spawn_worker_threads<'s, 'e, B: BalanceStore, H: HistoryStore>(
    s: &'s Scope<'s, 'e>,
    wallet: &'e Wallet<B, H>,
    error_tx: SyncSender<Error>,
    num_workers: usize,
    channel_capacity: usize,
) -> Vec<SyncSender<Command>> {
    (0..num_workers)
        .map(|_| {
            let (command_tx, command_rx) = sync_channel::<Command>(channel_capacity);
            let etx = error_tx.clone();

            s.spawn(move || {
                for command in command_rx {
                    if let Err(e) = apply_command(wallet, command) {
                        let _ = etx.send(e);
                    }
                }
            });

            command_tx
        })
        .collect()
}

fn apply_command<B: BalanceStore, H: HistoryStore>(
    wallet: &Wallet<B, H>,
    command: Command,
) -> Result<(), Error> {
    let Command {
        user_id,
        kind,
        amount,
    } = command;
    match kind {
        TransactionKind::Charge => wallet.charge(user_id, amount)?,
        TransactionKind::Use => wallet.use_points(user_id, amount)?,
    };
    Ok(())
}
