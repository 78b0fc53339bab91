//! Decoder properties: base64 round-trips and total degradation.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use proptest::prelude::*;

use cosmos_block_watcher::models::{
	RawEvent, RawEventAttribute, RawTransaction, RawTransactionResult,
};
use cosmos_block_watcher::services::client::decode_transaction;

fn raw_tx_with(
	tx: Option<String>,
	code: serde_json::Value,
	log: String,
	data: Option<String>,
	attributes: Vec<RawEventAttribute>,
) -> RawTransaction {
	RawTransaction {
		tx,
		tx_result: RawTransactionResult {
			code,
			log,
			data,
			events: vec![RawEvent {
				kind: "wasm".to_string(),
				attributes,
			}],
		},
		index: 0,
		hash: "HASH".to_string(),
	}
}

proptest! {
	/// Base64-encoded attribute keys and values decode back to the
	/// original text for any input string.
	#[test]
	fn prop_attribute_round_trip(key in ".*", value in ".*") {
		let raw = raw_tx_with(
			None,
			serde_json::Value::Null,
			String::new(),
			None,
			vec![RawEventAttribute {
				key: Some(BASE64.encode(key.as_bytes())),
				value: Some(BASE64.encode(value.as_bytes())),
			}],
		);

		let tx = decode_transaction(raw);
		prop_assert_eq!(&tx.events[0].attributes[0].key, &key);
		prop_assert_eq!(&tx.events[0].attributes[0].value, &value);
	}

	/// Payload bytes round-trip through base64 for any input.
	#[test]
	fn prop_payload_round_trip(payload in proptest::collection::vec(any::<u8>(), 0..256)) {
		let raw = raw_tx_with(
			Some(BASE64.encode(&payload)),
			serde_json::Value::Null,
			String::new(),
			Some(BASE64.encode(&payload)),
			vec![],
		);

		let tx = decode_transaction(raw);
		prop_assert_eq!(&tx.tx, &payload);
		prop_assert_eq!(&tx.data, &payload);
	}

	/// Decoding never panics, whatever junk the gateway sends.
	#[test]
	fn prop_decoding_is_total(
		tx_field in proptest::option::of(".*"),
		code in prop_oneof![
			Just(serde_json::Value::Null),
			any::<u64>().prop_map(|n| serde_json::json!(n)),
			".*".prop_map(serde_json::Value::String),
		],
		log in ".*",
		data in proptest::option::of(".*"),
		key in proptest::option::of(".*"),
		value in proptest::option::of(".*"),
	) {
		let raw = raw_tx_with(
			tx_field,
			code,
			log,
			data,
			vec![RawEventAttribute { key, value }],
		);

		// Must not panic; malformed fields degrade to defaults.
		let _ = decode_transaction(raw);
	}

	/// In-range result codes survive decoding, as numbers or strings.
	#[test]
	fn prop_result_code_preserved(code in any::<u32>(), as_string in any::<bool>()) {
		let wire_code = if as_string {
			serde_json::Value::String(code.to_string())
		} else {
			serde_json::json!(code)
		};

		let raw = raw_tx_with(None, wire_code, String::new(), None, vec![]);
		prop_assert_eq!(decode_transaction(raw).code, code);
	}
}
