//! Module defining the parsing logic converting batch input into commands that can be applied to the wallet.

use std::io::Read;

use serde::Deserialize;

use crate::domain::{Command, Points, TransactionKind, UserId};
use crate::error::{Error, input_error};


pub(crate) const TYPE_KW_CHARGE: &str = "charge";
pub(crate) const TYPE_KW_USE: &str = "use";

/// Parses CSV rows of the form `type, user, amount` and returns an iterator over the parsing results.
///
/// Amounts are not validated here: non-positive amounts are turned into commands and refused by the wallet.
pub(crate) fn parse_commands(reader: impl Read) -> impl Iterator<Item = Result<Command, Error>> {
    let csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader
        .into_deserialize::<RawCommand>()
        .map(|result| Command::try_from(result?))
}

// Intermediate type mirroring the CSV columns
#[derive(Deserialize)]
struct RawCommand {
    #[serde(rename = "type")]
    command_type: String,
    user: u64,
    amount: Points,
}

impl TryFrom<RawCommand> for Command {
    type Error = Error;

    fn try_from(raw: RawCommand) -> Result<Self, Self::Error> {
        let RawCommand {
            command_type,
            user,
            amount,
        } = raw;
        let kind = match command_type.to_ascii_lowercase().as_str() {
            TYPE_KW_CHARGE => TransactionKind::Charge,
            TYPE_KW_USE => TransactionKind::Use,
            other => return Err(input_error(user, format!("unknown command type: {other}"))),
        };
        Ok(Command {
            user_id: UserId::new(user),
            kind,
            amount,
        })
    }
}
