use anyhow::{Context, Result};
use point_wallet::{Error, WalletConfig, process, setup_logging};
use std::{env, fs::File};

fn main() -> Result<()> {
    setup_logging()?;

    let config = WalletConfig::from_env()?;
    let reader = get_reader()?;

    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for record in process(reader, &config, handle_command_error)? {
        wtr.serialize(&record)?;
    }
    wtr.flush()?;

    Ok(())
}

fn get_reader() -> Result<impl std::io::Read> {
    let path = env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("Usage: point-wallet <commands.csv>"))?;
    File::open(&path).with_context(|| format!("failed to open {path}"))
}

// Refused commands are expected in a batch, they are only reported
fn handle_command_error(error: Error) {
    tracing::warn!("{error}")
}
