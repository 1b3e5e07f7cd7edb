//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!   Telegram commands ──► inbound::WalletTracker ──► application
//!                                                       │
//!                      outbound::TransactionSource ◄────┤
//!                      outbound::Notifier          ◄────┘
//! ```

pub mod inbound;
pub mod outbound;
