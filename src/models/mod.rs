//! Domain models and data structures for block watching.
//!
//! This module contains all the core data structures used throughout the
//! application:
//!
//! - `core`: Domain models handed to consumers (Block, BlockHeader, Transaction)
//! - `config`: Configuration loading and validation
//! - `tendermint`: Wire shapes of the Tendermint/Cosmos REST and RPC gateways

mod config;
mod core;
mod tendermint;

// Re-export core types
pub use core::{Block, BlockHeader, ChainTarget, EventAttribute, FetchMode, Transaction, TxEvent};

// Re-export config types
pub use config::{ChainConfig, ConfigError, IntervalsConfig, WatcherConfig};

// Re-export wire types
pub use tendermint::{
	BlockResponse, LatestBlockBody, LatestBlockHeader, LatestBlockResponse, RawEvent,
	RawEventAttribute, RawTransaction, RawTransactionResult, RpcEnvelope, TxSearchResponse,
	WireBlock, WireBlockHeader, WireBlockId,
};
