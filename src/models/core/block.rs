//! Block, header and transaction models delivered to consumers.
//!
//! These are decoded, chain-agnostic views over the gateway wire shapes in
//! `models::tendermint`. They are produced once per height per chain and
//! handed to the block handler; the core keeps no copy afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Header of a single block as reported by an RPC gateway.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BlockHeader {
	pub height: u64,
	pub time: DateTime<Utc>,
	/// Hex-encoded block hash from the gateway's `block_id`.
	pub hash: String,
	pub chain_id: String,
	pub proposer_address: String,
}

/// A decoded key/value pair attached to a transaction event.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EventAttribute {
	pub key: String,
	pub value: String,
}

/// A typed event emitted during transaction execution.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TxEvent {
	/// Event type, e.g. `transfer` or `coin_received`.
	pub kind: String,
	pub attributes: Vec<EventAttribute>,
}

/// A transaction decoded from a `tx_search` result entry.
///
/// Decoding is best effort: payload bytes are base64-decoded, event
/// attributes are decoded to text and the execution log is parsed as JSON
/// where possible. Malformed fields degrade to defaults instead of failing,
/// so a single broken transaction never aborts a whole block.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Transaction {
	/// Raw transaction bytes. Empty when the gateway omitted the payload.
	pub tx: Vec<u8>,
	/// Execution result code; 0 means success.
	pub code: u32,
	/// Execution log, parsed as JSON when well formed, otherwise the raw
	/// string carried through as `Value::String`.
	pub log: serde_json::Value,
	/// Raw result data bytes.
	pub data: Vec<u8>,
	pub events: Vec<TxEvent>,
	/// Position of the transaction within its block.
	pub index: u32,
	pub hash: String,
}

/// One block of a tracked chain, composed per the configured fetch mode.
///
/// `header` is `None` in height-only mode; `txs` is empty unless the mode
/// requests transactions (or the block genuinely has none).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Block {
	pub chain: String,
	pub height: u64,
	pub header: Option<BlockHeader>,
	pub txs: Vec<Transaction>,
}
