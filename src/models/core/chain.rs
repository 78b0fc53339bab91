use serde::{Deserialize, Serialize};

/// How much of each block to fetch and deliver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchMode {
	/// Deliver heights only; no gateway calls beyond latest-height polling.
	Height,
	/// Fetch and deliver the block header for every height.
	#[default]
	Headers,
	/// Fetch the header and all transactions for every height.
	HeadersAndTransactions,
}

/// A chain to track, with an optional caller-supplied starting floor.
///
/// `start_height` is the last height the caller already has: delivery starts
/// at `start_height + 1`. When absent, the watcher starts at the first
/// height it observes. The floor is also the replay point after a chain task
/// restart, so consumers must treat redelivery from the floor as idempotent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChainTarget {
	pub chain_id: String,
	pub start_height: Option<u64>,
}

impl ChainTarget {
	pub fn new(chain_id: impl Into<String>, start_height: Option<u64>) -> Self {
		Self {
			chain_id: chain_id.into(),
			start_height,
		}
	}
}
