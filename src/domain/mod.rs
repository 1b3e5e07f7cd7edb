//! Chain-agnostic domain types.

pub mod ids;
pub mod transaction;
pub mod wallet;
