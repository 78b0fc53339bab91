//! Best-effort transaction decoding.
//!
//! Pure transforms from `tx_search` wire entries to domain transactions.
//! Decoding is total: malformed base64, missing fields or junk result
//! codes degrade to defaults rather than erroring, since one broken
//! transaction must not abort processing of its whole block.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

use crate::models::{EventAttribute, RawEventAttribute, RawTransaction, Transaction, TxEvent};

/// Decodes one `tx_search` entry into a domain [`Transaction`].
pub fn decode_transaction(raw: RawTransaction) -> Transaction {
	Transaction {
		tx: decode_base64_bytes(raw.tx.as_deref()),
		code: value_to_u32(&raw.tx_result.code).unwrap_or(0),
		log: try_parse_json(&raw.tx_result.log),
		data: decode_base64_bytes(raw.tx_result.data.as_deref()),
		events: raw
			.tx_result
			.events
			.into_iter()
			.map(|event| TxEvent {
				kind: event.kind,
				attributes: event.attributes.into_iter().map(decode_attribute).collect(),
			})
			.collect(),
		index: raw.index,
		hash: raw.hash,
	}
}

fn decode_attribute(attribute: RawEventAttribute) -> EventAttribute {
	EventAttribute {
		key: decode_base64_text(attribute.key),
		value: decode_base64_text(attribute.value),
	}
}

/// Base64-decodes a payload field to raw bytes; absent or malformed input
/// yields an empty buffer.
fn decode_base64_bytes(field: Option<&str>) -> Vec<u8> {
	field
		.and_then(|encoded| BASE64.decode(encoded).ok())
		.unwrap_or_default()
}

/// Decodes an attribute field to text. Tendermint 0.34 gateways
/// base64-encode attribute keys and values; newer gateways send plain
/// text, so input that is not valid base64 UTF-8 is passed through as is.
fn decode_base64_text(field: Option<String>) -> String {
	let Some(text) = field else {
		return String::new();
	};

	match BASE64.decode(&text) {
		Ok(bytes) => String::from_utf8(bytes).unwrap_or(text),
		Err(_) => text,
	}
}

/// Parses an execution log as JSON, falling back to the raw string.
fn try_parse_json(log: &str) -> serde_json::Value {
	serde_json::from_str(log).unwrap_or_else(|_| serde_json::Value::String(log.to_string()))
}

/// Interprets a gateway numeric field that may arrive as a JSON number or
/// a numeric string.
pub(crate) fn value_to_u64(value: &serde_json::Value) -> Option<u64> {
	match value {
		serde_json::Value::Number(n) => n.as_u64(),
		serde_json::Value::String(s) => s.parse().ok(),
		_ => None,
	}
}

fn value_to_u32(value: &serde_json::Value) -> Option<u32> {
	value_to_u64(value).and_then(|n| u32::try_from(n).ok())
}
