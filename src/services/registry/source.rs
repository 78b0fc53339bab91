//! Endpoint discovery sources.
//!
//! A source maps a chain identifier to sets of gateway base URLs. Discovery
//! from a remote chain-registry document is an external concern; the
//! watcher only requires something implementing [`EndpointSource`], and
//! ships a static implementation backed by configuration.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::models::ChainConfig;

/// REST and RPC base URLs discovered for one chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChainEndpointUrls {
	pub rest: Vec<String>,
	pub rpc: Vec<String>,
}

/// Provider of gateway base URLs for chains.
///
/// Sources are queried in registration order and their results merged, so
/// several sources may contribute endpoints for the same chain.
#[async_trait]
pub trait EndpointSource: Send + Sync {
	/// Returns the base URLs this source knows for `chain_id`, or `None`
	/// if the chain is unknown to it.
	async fn endpoints_for(&self, chain_id: &str) -> Result<Option<ChainEndpointUrls>, anyhow::Error>;
}

/// Endpoint source backed by an in-memory map, typically built from the
/// configuration file.
#[derive(Debug, Clone, Default)]
pub struct StaticEndpointSource {
	chains: HashMap<String, ChainEndpointUrls>,
}

impl StaticEndpointSource {
	pub fn new(chains: HashMap<String, ChainEndpointUrls>) -> Self {
		Self { chains }
	}

	/// Builds a source from the chain sections of a watcher config.
	pub fn from_chain_configs(configs: &[ChainConfig]) -> Self {
		let chains = configs
			.iter()
			.map(|chain| {
				(
					chain.chain_id.clone(),
					ChainEndpointUrls {
						rest: chain.rest_urls.clone(),
						rpc: chain.rpc_urls.clone(),
					},
				)
			})
			.collect();

		Self { chains }
	}
}

#[async_trait]
impl EndpointSource for StaticEndpointSource {
	async fn endpoints_for(
		&self,
		chain_id: &str,
	) -> Result<Option<ChainEndpointUrls>, anyhow::Error> {
		Ok(self.chains.get(chain_id).cloned())
	}
}
