//! Telegram alert delivery and bot commands.
//!
//! Provides the Telegram notifier used by the polling engine and the
//! command listener that manages tracked wallets remotely.

mod auth;
mod command;
mod control;

pub mod notifier;
