use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Failure turning one raw provider record into a [`Transaction`].
///
/// Always scoped to a single record: the caller skips the record and keeps
/// going with the rest of the wallet's batch.
///
/// [`Transaction`]: crate::domain::transaction::Transaction
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("record is not a JSON object")]
    NotAnObject,

    #[error("record is missing `{path}`")]
    MissingField { path: &'static str },

    #[error("record has an invalid shape: {0}")]
    InvalidShape(#[source] serde_json::Error),
}

/// Delivery failure for a single recipient.
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("invalid recipient `{0}`")]
    InvalidRecipient(String),

    #[error("delivery to {recipient} failed: {reason}")]
    Delivery { recipient: String, reason: String },
}

/// Errors surfaced to command callers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackerError {
    #[error("Wallet '{0}' not found.")]
    UnknownWallet(String),
}

/// Crate-wide error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Notify(#[from] NotifyError),

    #[error(transparent)]
    Tracker(#[from] TrackerError),

    #[error("transaction source unavailable (status {status}): {reason}")]
    SourceUnavailable { status: u16, reason: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
