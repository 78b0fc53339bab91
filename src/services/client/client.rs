//! Chain API client.
//!
//! One client per tracked chain, bound to that chain's resolved endpoints.
//! Every operation is best effort over multiple gateways of varying
//! availability and lag: latest-height discovery broadcasts to all REST
//! endpoints and keeps the maximum, while header and transaction fetches
//! walk the RPC candidates in priority order, reporting outcomes back to
//! the registry as they go.

use std::{sync::Arc, time::Duration};

use anyhow::Context;
use chrono::{DateTime, Utc};
use futures::future;
use reqwest_middleware::ClientWithMiddleware;
use serde::de::DeserializeOwned;

use super::{decoder, error::ClientError};
use crate::{
	models::{
		BlockHeader, BlockResponse, LatestBlockResponse, RpcEnvelope, Transaction,
		TxSearchResponse,
	},
	services::registry::{ChainEndpoints, Endpoint, EndpointKind},
	utils::http::{create_retryable_http_client, HttpRetryConfig},
};

/// Timing configuration for a chain client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
	/// Per-call HTTP timeout.
	pub call_timeout: Duration,
	/// Grace wait after an endpoint reports an empty block, giving its
	/// indexer time to catch up before the next endpoint is asked.
	pub tx_sync_grace: Duration,
}

impl Default for ClientConfig {
	fn default() -> Self {
		Self {
			call_timeout: Duration::from_secs(2),
			tx_sync_grace: Duration::from_millis(200),
		}
	}
}

/// Outcome of one HTTP fetch against a single endpoint.
///
/// The distinction matters for scoring: only transport-level failures count
/// against an endpoint, a response that merely fails to parse does not.
enum FetchError {
	/// Timeout, connection error or non-success HTTP status.
	Transport(anyhow::Error),
	/// The endpoint responded but the body did not match the expected shape.
	Malformed(anyhow::Error),
}

impl FetchError {
	fn inner(&self) -> &anyhow::Error {
		match self {
			Self::Transport(e) | Self::Malformed(e) => e,
		}
	}
}

/// Client for one chain's REST and RPC gateways.
#[derive(Clone)]
pub struct ChainClient {
	endpoints: Arc<ChainEndpoints>,
	http: ClientWithMiddleware,
	config: ClientConfig,
}

impl ChainClient {
	/// Creates a client bound to a chain's resolved endpoints.
	pub fn new(endpoints: Arc<ChainEndpoints>, config: ClientConfig) -> Self {
		let http = create_retryable_http_client(
			&HttpRetryConfig::default(),
			reqwest::Client::new(),
		);

		Self {
			endpoints,
			http,
			config,
		}
	}

	/// Creates a client using a caller-supplied HTTP client.
	pub fn new_with_http_client(
		endpoints: Arc<ChainEndpoints>,
		http: ClientWithMiddleware,
		config: ClientConfig,
	) -> Self {
		Self {
			endpoints,
			http,
			config,
		}
	}

	pub fn chain_id(&self) -> &str {
		self.endpoints.chain_id()
	}

	/// Discovers the latest height known to any REST gateway.
	///
	/// Queries all REST endpoints concurrently, keeps whichever respond
	/// successfully and returns the maximum reported height floored at
	/// `lower_bound`. Gateways lag by different amounts, so the concurrent
	/// broadcast minimizes staleness and tolerates any subset being down.
	///
	/// # Errors
	/// [`ClientError::NoLatestHeight`] when nothing useful was learned:
	/// every endpoint failed and no positive `lower_bound` was given.
	pub async fn get_latest_height(&self, lower_bound: u64) -> Result<u64, ClientError> {
		let endpoints = self.endpoints.endpoints(EndpointKind::Rest);

		let calls = endpoints.iter().map(|endpoint| async move {
			let url = format!("{}/cosmos/base/tendermint/v1beta1/blocks/latest", endpoint.url());
			match self.fetch_json::<LatestBlockResponse>(&url).await {
				Ok(response) => {
					self.endpoints.report_outcome(endpoint, true);
					response.block.header.height.parse::<u64>().ok()
				}
				Err(err) => {
					if matches!(err, FetchError::Transport(_)) {
						self.endpoints.report_outcome(endpoint, false);
					}
					tracing::debug!(
						chain = self.chain_id(),
						rest = endpoint.url(),
						error = %err.inner(),
						"latest height query failed"
					);
					None
				}
			}
		});

		let heights = future::join_all(calls).await;
		let best = heights.into_iter().flatten().fold(lower_bound, u64::max);

		if best == 0 {
			return Err(ClientError::NoLatestHeight {
				chain: self.chain_id().to_string(),
				tried: endpoints.len(),
			});
		}

		Ok(best)
	}

	/// Fetches the header of one block.
	///
	/// Tries RPC endpoints sequentially in current priority order and
	/// returns on the first success without contacting further candidates.
	///
	/// # Errors
	/// [`ClientError::NoBlockHeader`] when every candidate fails.
	pub async fn get_block_header(&self, height: u64) -> Result<BlockHeader, ClientError> {
		let endpoints = self.endpoints.endpoints(EndpointKind::Rpc);

		for endpoint in &endpoints {
			let url = format!("{}/block?height={}", endpoint.url(), height);
			match self.fetch_json::<RpcEnvelope<BlockResponse>>(&url).await {
				Ok(envelope) => {
					self.endpoints.report_outcome(endpoint, true);
					return Ok(header_from_wire(envelope.result, height));
				}
				Err(err) => {
					if matches!(err, FetchError::Transport(_)) {
						self.endpoints.report_outcome(endpoint, false);
					}
					tracing::warn!(
						chain = self.chain_id(),
						rpc = endpoint.url(),
						height,
						error = %err.inner(),
						"block header fetch failed"
					);
				}
			}
		}

		Err(ClientError::NoBlockHeader {
			chain: self.chain_id().to_string(),
			height,
			tried: endpoints.len(),
		})
	}

	/// Fetches and decodes all transactions in one block.
	///
	/// Walks RPC endpoints in priority order, paginating each one's
	/// `tx_search` until the endpoint-reported total is accumulated. An
	/// endpoint returning an empty final result may simply not have indexed
	/// the block yet, so after a short grace wait the next endpoint is
	/// asked instead of returning empty immediately. When every endpoint is
	/// exhausted without data, the block is treated as genuinely empty:
	/// that is a legitimate outcome, never an error.
	pub async fn get_txs_in_block(&self, height: u64) -> Vec<Transaction> {
		let endpoints = self.endpoints.endpoints(EndpointKind::Rpc);

		for endpoint in &endpoints {
			match self.collect_txs_from(endpoint, height).await {
				Ok(txs) if !txs.is_empty() => {
					self.endpoints.report_outcome(endpoint, true);
					return txs;
				}
				Ok(_) => {
					// Possibly a block this gateway has not indexed yet.
					// Not a transport failure, so the score is untouched.
					tokio::time::sleep(self.config.tx_sync_grace).await;
					self.endpoints.report_outcome(endpoint, true);
				}
				Err(err) => {
					if matches!(err, FetchError::Transport(_)) {
						self.endpoints.report_outcome(endpoint, false);
					}
					tracing::warn!(
						chain = self.chain_id(),
						rpc = endpoint.url(),
						height,
						error = %err.inner(),
						"transaction search failed"
					);
				}
			}
		}

		Vec::new()
	}

	/// Accumulates all `tx_search` pages from one endpoint and decodes the
	/// result. Partial pages are discarded on error; the caller moves on to
	/// the next endpoint.
	async fn collect_txs_from(
		&self,
		endpoint: &Endpoint,
		height: u64,
	) -> Result<Vec<Transaction>, FetchError> {
		let query = urlencoding::encode(&format!("tx.height={}", height)).into_owned();
		let mut raw_txs = Vec::new();
		let mut page = 1;

		loop {
			let url = format!("{}/tx_search?query=\"{}\"&page={}", endpoint.url(), query, page);
			let envelope: RpcEnvelope<TxSearchResponse> = self.fetch_json(&url).await?;

			let total = decoder::value_to_u64(&envelope.result.total_count).unwrap_or(0) as usize;
			let page_len = envelope.result.txs.len();
			raw_txs.extend(envelope.result.txs);

			// An empty page below the advertised total means the endpoint
			// will not make further progress; stop rather than loop.
			if raw_txs.len() >= total || page_len == 0 {
				break;
			}
			page += 1;
		}

		Ok(raw_txs.into_iter().map(decoder::decode_transaction).collect())
	}

	async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
		let response = self
			.http
			.get(url)
			.timeout(self.config.call_timeout)
			.send()
			.await
			.with_context(|| format!("request to {} failed", url))
			.map_err(FetchError::Transport)?;

		let response = response
			.error_for_status()
			.with_context(|| format!("request to {} returned error status", url))
			.map_err(FetchError::Transport)?;

		response
			.json::<T>()
			.await
			.with_context(|| format!("response from {} had unexpected shape", url))
			.map_err(FetchError::Malformed)
	}
}

/// Builds a domain header from the RPC `/block` result. Malformed numeric
/// and timestamp fields degrade to the requested height and the epoch.
fn header_from_wire(result: BlockResponse, requested_height: u64) -> BlockHeader {
	let header = result.block.header;

	BlockHeader {
		height: header.height.parse().unwrap_or(requested_height),
		time: DateTime::parse_from_rfc3339(&header.time)
			.map(|time| time.with_timezone(&Utc))
			.unwrap_or(DateTime::<Utc>::UNIX_EPOCH),
		hash: result.block_id.hash,
		chain_id: header.chain_id,
		proposer_address: header.proposer_address,
	}
}
