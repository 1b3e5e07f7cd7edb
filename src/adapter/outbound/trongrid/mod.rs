//! TronGrid transaction source.

pub mod client;
pub mod dto;
pub mod settings;
