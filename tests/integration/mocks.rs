//! Shared test helpers and mocks.

use std::sync::Arc;
use std::time::Duration;

use mockall::mock;
use reqwest_middleware::ClientBuilder;
use serde_json::{json, Value};

use cosmos_block_watcher::services::{
	client::{ChainClient, ClientConfig},
	registry::{
		ChainEndpointUrls, ChainEndpoints, EndpointRegistry, EndpointSource, StaticEndpointSource,
	},
};

mock! {
	pub EndpointSource {}

	#[async_trait::async_trait]
	impl EndpointSource for EndpointSource {
		async fn endpoints_for(
			&self,
			chain_id: &str,
		) -> Result<Option<ChainEndpointUrls>, anyhow::Error>;
	}
}

pub const TEST_CHAIN: &str = "testchain-1";

/// Resolves a [`ChainEndpoints`] view over the given base URLs through a
/// static source, the same path production code takes.
pub async fn resolve_endpoints(rest: Vec<String>, rpc: Vec<String>) -> Arc<ChainEndpoints> {
	let source = StaticEndpointSource::new(
		[(TEST_CHAIN.to_string(), ChainEndpointUrls { rest, rpc })]
			.into_iter()
			.collect(),
	);
	let registry = EndpointRegistry::new(vec![Arc::new(source)]);

	Arc::new(registry.resolve(TEST_CHAIN).await.unwrap())
}

/// Chain client without retry middleware so tests can assert exact hit
/// counts per endpoint, and with a short grace wait to keep tests fast.
pub async fn test_client(rest: Vec<String>, rpc: Vec<String>) -> ChainClient {
	let endpoints = resolve_endpoints(rest, rpc).await;
	let http = ClientBuilder::new(reqwest::Client::new()).build();

	ChainClient::new_with_http_client(
		endpoints,
		http,
		ClientConfig {
			call_timeout: Duration::from_secs(2),
			tx_sync_grace: Duration::from_millis(10),
		},
	)
}

pub fn latest_block_body(height: u64) -> String {
	json!({ "block": { "header": { "height": height.to_string() } } }).to_string()
}

pub fn block_body(height: u64, hash: &str) -> String {
	json!({
		"result": {
			"block_id": { "hash": hash },
			"block": {
				"header": {
					"chain_id": TEST_CHAIN,
					"height": height.to_string(),
					"time": "2024-05-01T12:00:00Z",
					"proposer_address": "PROPOSER"
				}
			}
		}
	})
	.to_string()
}

pub fn raw_tx_entry(hash: &str, index: u32) -> Value {
	json!({
		"hash": hash,
		"height": "5",
		"index": index,
		"tx": "cGF5bG9hZA==",
		"tx_result": {
			"code": 0,
			"log": "[]",
			"data": null,
			"events": []
		}
	})
}

pub fn tx_search_body(txs: Vec<Value>, total_count: u64) -> String {
	json!({
		"result": {
			"txs": txs,
			"total_count": total_count.to_string()
		}
	})
	.to_string()
}
