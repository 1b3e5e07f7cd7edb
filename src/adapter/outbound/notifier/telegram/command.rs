//! Telegram command parsing.

/// Supported Telegram commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TelegramCommand {
    Start,
    Help,
    AddWallet { name: String, address: String },
    RemoveWallet { name: String },
    ListWallets,
    History { name: String },
}

/// Parse error for Telegram command messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    NotACommand,
    UnknownCommand(String),
    /// Required arguments missing; carries the usage line to reply with.
    Usage(&'static str),
}

impl std::fmt::Display for CommandParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotACommand => write!(f, "message is not a command"),
            Self::UnknownCommand(cmd) => write!(f, "unknown command `{cmd}`"),
            Self::Usage(usage) => write!(f, "{usage}"),
        }
    }
}

impl std::error::Error for CommandParseError {}

pub const ADD_WALLET_USAGE: &str = "Usage: /addwallet <name> <address>";
pub const REMOVE_WALLET_USAGE: &str = "Usage: /removewallet <name>";
pub const HISTORY_USAGE: &str = "Usage: /history <wallet_name>";

/// Parse a Telegram message into a bot command.
///
/// Extra trailing arguments are ignored.
pub fn parse_command(text: &str) -> Result<TelegramCommand, CommandParseError> {
    let mut parts = text.split_whitespace();
    let Some(raw_command) = parts.next() else {
        return Err(CommandParseError::NotACommand);
    };
    if !raw_command.starts_with('/') {
        return Err(CommandParseError::NotACommand);
    }

    let command = raw_command
        .split_once('@')
        .map_or(raw_command, |(head, _)| head);

    match command {
        "/start" => Ok(TelegramCommand::Start),
        "/help" => Ok(TelegramCommand::Help),
        "/addwallet" => {
            let (Some(name), Some(address)) = (parts.next(), parts.next()) else {
                return Err(CommandParseError::Usage(ADD_WALLET_USAGE));
            };
            Ok(TelegramCommand::AddWallet {
                name: name.to_string(),
                address: address.to_string(),
            })
        }
        "/removewallet" => {
            let name = parts
                .next()
                .ok_or(CommandParseError::Usage(REMOVE_WALLET_USAGE))?;
            Ok(TelegramCommand::RemoveWallet {
                name: name.to_string(),
            })
        }
        "/listwallets" => Ok(TelegramCommand::ListWallets),
        "/history" => {
            let name = parts.next().ok_or(CommandParseError::Usage(HISTORY_USAGE))?;
            Ok(TelegramCommand::History {
                name: name.to_string(),
            })
        }
        other => Err(CommandParseError::UnknownCommand(other.to_string())),
    }
}

/// Help text returned by `/start` and `/help`.
#[must_use]
pub const fn command_help() -> &'static str {
    "Welcome to the TRX Wallet Tracker Bot!\n\n\
    Available commands:\n\
    /addwallet <name> <address> - Add a wallet to track\n\
    /removewallet <name> - Remove a tracked wallet\n\
    /listwallets - List all tracked wallets\n\
    /history <wallet_name> - View recent transactions for a wallet"
}

/// Bot commands for Telegram menu registration.
///
/// Returns tuples of (command, description) for `set_my_commands`.
#[must_use]
pub fn bot_commands() -> Vec<(&'static str, &'static str)> {
    vec![
        ("addwallet", "Add a wallet to track"),
        ("removewallet", "Remove a tracked wallet"),
        ("listwallets", "List all tracked wallets"),
        ("history", "View recent transactions for a wallet"),
        ("help", "Show all commands"),
    ]
}
