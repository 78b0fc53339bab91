//! Endpoint registry service.
//!
//! Owns all endpoint score state. Callers get an ordered snapshot of
//! candidates via [`ChainEndpoints::endpoints`] and feed results back via
//! [`ChainEndpoints::report_outcome`]; they never touch the counters
//! directly. Scores are plain atomics shared across per-chain tasks, and a
//! concurrent update reordering an in-flight caller's next snapshot is
//! acceptable: ordering is a heuristic, not a correctness property.

use std::{
	fmt,
	sync::{
		atomic::{AtomicU32, Ordering},
		Arc,
	},
};

use super::{error::RegistryError, source::EndpointSource};

/// Which gateway protocol an endpoint speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointKind {
	/// Cosmos REST gateway (latest-block queries).
	Rest,
	/// Tendermint RPC gateway (per-height block and tx-search queries).
	Rpc,
}

impl fmt::Display for EndpointKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Rest => write!(f, "rest"),
			Self::Rpc => write!(f, "rpc"),
		}
	}
}

/// A gateway base URL with its reliability score.
///
/// The URL and kind never change after construction; only the score does.
#[derive(Debug)]
pub struct Endpoint {
	url: String,
	kind: EndpointKind,
	consecutive_failures: AtomicU32,
}

impl Endpoint {
	fn new(url: String, kind: EndpointKind) -> Self {
		Self {
			url,
			kind,
			consecutive_failures: AtomicU32::new(0),
		}
	}

	pub fn url(&self) -> &str {
		&self.url
	}

	pub fn kind(&self) -> EndpointKind {
		self.kind
	}

	fn failure_count(&self) -> u32 {
		self.consecutive_failures.load(Ordering::Relaxed)
	}

	fn record(&self, success: bool) {
		if success {
			self.consecutive_failures.store(0, Ordering::Relaxed);
		} else {
			self.consecutive_failures.fetch_add(1, Ordering::Relaxed);
		}
	}
}

/// Resolves chain identifiers to endpoint candidate lists.
///
/// URLs are merged from all registered sources in stable registration
/// order, deduplicated on first occurrence, so resolution is reproducible
/// for a given source configuration.
pub struct EndpointRegistry {
	sources: Vec<Arc<dyn EndpointSource>>,
}

impl EndpointRegistry {
	pub fn new(sources: Vec<Arc<dyn EndpointSource>>) -> Self {
		Self { sources }
	}

	/// Resolves the candidate endpoints for one chain.
	///
	/// Fails with [`RegistryError::UnknownChain`] when no source knows any
	/// REST or RPC URL for the chain.
	pub async fn resolve(&self, chain_id: &str) -> Result<ChainEndpoints, RegistryError> {
		let mut rest_urls: Vec<String> = Vec::new();
		let mut rpc_urls: Vec<String> = Vec::new();

		for source in &self.sources {
			let urls = source
				.endpoints_for(chain_id)
				.await
				.map_err(|e| RegistryError::Source {
					chain: chain_id.to_string(),
					source: e,
				})?;

			if let Some(urls) = urls {
				for url in urls.rest {
					let url = url.trim_end_matches('/').to_string();
					if !rest_urls.contains(&url) {
						rest_urls.push(url);
					}
				}
				for url in urls.rpc {
					let url = url.trim_end_matches('/').to_string();
					if !rpc_urls.contains(&url) {
						rpc_urls.push(url);
					}
				}
			}
		}

		if rest_urls.is_empty() && rpc_urls.is_empty() {
			return Err(RegistryError::UnknownChain(chain_id.to_string()));
		}

		tracing::debug!(
			chain = chain_id,
			rest = rest_urls.len(),
			rpc = rpc_urls.len(),
			"resolved endpoints"
		);

		Ok(ChainEndpoints::new(chain_id.to_string(), rest_urls, rpc_urls))
	}
}

/// The registry's view of one chain: scored REST and RPC candidates.
pub struct ChainEndpoints {
	chain_id: String,
	rest: Vec<Arc<Endpoint>>,
	rpc: Vec<Arc<Endpoint>>,
}

impl ChainEndpoints {
	fn new(chain_id: String, rest_urls: Vec<String>, rpc_urls: Vec<String>) -> Self {
		Self {
			chain_id,
			rest: rest_urls
				.into_iter()
				.map(|url| Arc::new(Endpoint::new(url, EndpointKind::Rest)))
				.collect(),
			rpc: rpc_urls
				.into_iter()
				.map(|url| Arc::new(Endpoint::new(url, EndpointKind::Rpc)))
				.collect(),
		}
	}

	pub fn chain_id(&self) -> &str {
		&self.chain_id
	}

	/// Returns the candidate list for one kind, ordered by ascending
	/// consecutive-failure count. The sort is stable, so equally scored
	/// endpoints keep their prior relative order.
	pub fn endpoints(&self, kind: EndpointKind) -> Vec<Arc<Endpoint>> {
		let mut list = match kind {
			EndpointKind::Rest => self.rest.clone(),
			EndpointKind::Rpc => self.rpc.clone(),
		};
		// Snapshot the scores once so concurrent updates cannot feed the
		// sort an inconsistent key.
		list.sort_by_cached_key(|endpoint| endpoint.failure_count());
		list
	}

	/// Records the outcome of one call against an endpoint. Success resets
	/// the consecutive-failure count; failure increments it. Only transport
	/// failures should be reported as failure; an endpoint legitimately
	/// holding no data counts as success.
	pub fn report_outcome(&self, endpoint: &Endpoint, success: bool) {
		endpoint.record(success);
	}
}
