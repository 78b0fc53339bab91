//! Watcher configuration file model.
//!
//! A single JSON document declares the chains to track, the gateway base
//! URLs per chain, the fetch mode and the timing knobs. Loaded once at
//! startup and validated before any task is spawned.

use std::{fs::File, path::Path};

use serde::{Deserialize, Serialize};
use url::Url;

use super::error::ConfigError;
use crate::models::FetchMode;

/// One tracked chain and its gateway base URLs.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChainConfig {
	pub chain_id: String,
	/// Last height the caller already holds; delivery starts one above it.
	pub start_height: Option<u64>,
	#[serde(default)]
	pub rest_urls: Vec<String>,
	#[serde(default)]
	pub rpc_urls: Vec<String>,
}

/// Timing knobs, all in milliseconds.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IntervalsConfig {
	/// Per-call HTTP timeout.
	#[serde(default = "default_call_timeout_ms")]
	pub call_timeout_ms: u64,
	/// Sleep between polls when no new block was committed.
	#[serde(default = "default_poll_idle_ms")]
	pub poll_idle_ms: u64,
	/// Grace wait after an endpoint reports an empty block, giving its
	/// indexer time to catch up before the next endpoint is asked.
	#[serde(default = "default_tx_sync_grace_ms")]
	pub tx_sync_grace_ms: u64,
	/// Cooldown before a failed chain task is restarted.
	#[serde(default = "default_restart_cooldown_ms")]
	pub restart_cooldown_ms: u64,
}

fn default_call_timeout_ms() -> u64 {
	2_000
}

fn default_poll_idle_ms() -> u64 {
	1_000
}

fn default_tx_sync_grace_ms() -> u64 {
	200
}

fn default_restart_cooldown_ms() -> u64 {
	30_000
}

impl Default for IntervalsConfig {
	fn default() -> Self {
		Self {
			call_timeout_ms: default_call_timeout_ms(),
			poll_idle_ms: default_poll_idle_ms(),
			tx_sync_grace_ms: default_tx_sync_grace_ms(),
			restart_cooldown_ms: default_restart_cooldown_ms(),
		}
	}
}

/// Top-level watcher configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WatcherConfig {
	pub chains: Vec<ChainConfig>,
	#[serde(default)]
	pub mode: FetchMode,
	#[serde(default)]
	pub intervals: IntervalsConfig,
}

impl WatcherConfig {
	/// Loads and validates a configuration file.
	pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
		let file = File::open(path)?;
		let config: WatcherConfig = serde_json::from_reader(file)?;

		config.validate().map_err(ConfigError::Validation)?;

		Ok(config)
	}

	/// Validates the configuration.
	///
	/// Every chain needs a non-empty identifier and at least one gateway
	/// URL; all URLs must be well-formed http(s).
	pub fn validate(&self) -> Result<(), String> {
		if self.chains.is_empty() {
			return Err("at least one chain must be configured".to_string());
		}

		for chain in &self.chains {
			if chain.chain_id.trim().is_empty() {
				return Err("chain_id must not be empty".to_string());
			}

			if chain.rest_urls.is_empty() && chain.rpc_urls.is_empty() {
				return Err(format!(
					"chain {} has no REST or RPC URLs configured",
					chain.chain_id
				));
			}

			for url in chain.rest_urls.iter().chain(chain.rpc_urls.iter()) {
				let parsed = Url::parse(url)
					.map_err(|e| format!("chain {}: invalid URL {}: {}", chain.chain_id, url, e))?;

				if parsed.scheme() != "http" && parsed.scheme() != "https" {
					return Err(format!(
						"chain {}: URL {} must use http or https",
						chain.chain_id, url
					));
				}
			}
		}

		Ok(())
	}
}
