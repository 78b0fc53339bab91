//! Wire shapes of the Tendermint/Cosmos gateway APIs.
//!
//! Read-only serde views over the three responses the watcher consumes:
//! the REST latest-block endpoint, the RPC `/block` endpoint and the
//! paginated RPC `/tx_search` endpoint. Numeric fields arrive as JSON
//! strings or numbers depending on gateway version, so anything that needs
//! tolerant parsing is kept as `String` or `serde_json::Value` here and
//! interpreted by the decoder.

use serde::Deserialize;

/// `GET {rest}/cosmos/base/tendermint/v1beta1/blocks/latest`
#[derive(Debug, Clone, Deserialize)]
pub struct LatestBlockResponse {
	pub block: LatestBlockBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LatestBlockBody {
	pub header: LatestBlockHeader,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LatestBlockHeader {
	pub height: String,
}

/// Outer envelope of Tendermint RPC responses: `{"result": ...}`.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcEnvelope<T> {
	pub result: T,
}

/// `result` of `GET {rpc}/block?height={h}`
#[derive(Debug, Clone, Deserialize)]
pub struct BlockResponse {
	pub block_id: WireBlockId,
	pub block: WireBlock,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireBlockId {
	pub hash: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireBlock {
	pub header: WireBlockHeader,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireBlockHeader {
	pub chain_id: String,
	pub height: String,
	/// RFC 3339 timestamp.
	pub time: String,
	pub proposer_address: String,
}

/// `result` of `GET {rpc}/tx_search?query="tx.height={h}"&page={p}`
#[derive(Debug, Clone, Deserialize)]
pub struct TxSearchResponse {
	#[serde(default)]
	pub txs: Vec<RawTransaction>,
	/// Total matching transactions across all pages. Tendermint encodes
	/// this as a string; older gateways use a number.
	#[serde(default)]
	pub total_count: serde_json::Value,
}

/// One undecoded entry of a `tx_search` result page.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTransaction {
	/// Base64-encoded transaction payload.
	#[serde(default)]
	pub tx: Option<String>,
	pub tx_result: RawTransactionResult,
	#[serde(default)]
	pub index: u32,
	#[serde(default)]
	pub hash: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTransactionResult {
	/// Result code; omitted by gateways when 0, string-encoded by some.
	#[serde(default)]
	pub code: serde_json::Value,
	#[serde(default)]
	pub log: String,
	/// Base64-encoded result data.
	#[serde(default)]
	pub data: Option<String>,
	#[serde(default)]
	pub events: Vec<RawEvent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawEvent {
	#[serde(rename = "type")]
	pub kind: String,
	#[serde(default)]
	pub attributes: Vec<RawEventAttribute>,
}

/// Attribute pair as emitted by the gateway. Tendermint 0.34 base64-encodes
/// both fields; newer versions send plain text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEventAttribute {
	#[serde(default)]
	pub key: Option<String>,
	#[serde(default)]
	pub value: Option<String>,
}
