//! Module for the runtime configuration of the wallet, read from environment variables

use std::str::FromStr;

use crate::{Error, domain::Points};

pub const ENV_MAX_BALANCE: &str = "WALLET_MAX_BALANCE";
pub const ENV_WORKERS: &str = "WALLET_WORKERS";
pub const ENV_CHANNEL_CAPACITY: &str = "WALLET_CHANNEL_CAPACITY";

const DEFAULT_MAX_BALANCE: Points = 1000;
const DEFAULT_CHANNEL_CAPACITY: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletConfig {
    /// Highest balance a charge may lead to (inclusive)
    pub max_balance: Points,
    /// Number of worker threads used for batch replay
    pub workers: usize,
    /// Capacity of the channels between the dispatching thread and the workers
    pub channel_capacity: usize,
}

impl Default for WalletConfig {
    fn default() -> Self {
        let workers = std::thread::available_parallelism()
            .map(|n| n.get().saturating_sub(1).max(1))
            .unwrap_or(1);
        Self {
            max_balance: DEFAULT_MAX_BALANCE,
            workers,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl WalletConfig {
    /// Reads the configuration from the process environment. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let defaults = Self::default();
        let config = Self {
            max_balance: parse_var(&lookup, ENV_MAX_BALANCE)?.unwrap_or(defaults.max_balance),
            workers: parse_var(&lookup, ENV_WORKERS)?.unwrap_or(defaults.workers),
            channel_capacity: parse_var(&lookup, ENV_CHANNEL_CAPACITY)?
                .unwrap_or(defaults.channel_capacity),
        };

        if config.max_balance < 0 {
            return Err(config_error(ENV_MAX_BALANCE, "must not be negative"));
        }
        if config.workers == 0 {
            return Err(config_error(ENV_WORKERS, "at least one worker is required"));
        }
        Ok(config)
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, Error>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|e| config_error(key, format!("{raw:?}: {e}")))
        })
        .transpose()
}

fn config_error(key: &'static str, message: impl Into<String>) -> Error {
    Error::Config {
        key,
        message: message.into(),
    }
}
