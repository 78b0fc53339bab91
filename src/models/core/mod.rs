//! Core domain models.
//!
//! Defines the types delivered to consumers (blocks, headers, transactions)
//! and the per-chain watch configuration.

mod block;
mod chain;

pub use block::{Block, BlockHeader, EventAttribute, Transaction, TxEvent};
pub use chain::{ChainTarget, FetchMode};
