//! Block watcher service.
//!
//! Builder-style entry point: register chains, pick a fetch mode, attach a
//! block handler and call [`BlockWatcher::run`]. Each chain runs as its own
//! tokio task cycling through starting, polling, fetching/delivering and
//! failed states; the failed state restarts the task after a cooldown, so
//! short of process shutdown no chain task ever terminates for good.

use std::{sync::Arc, time::Duration};

use futures::future::{self, BoxFuture};

use super::error::WatcherError;
use crate::{
	models::{Block, ChainTarget, FetchMode, IntervalsConfig},
	services::{
		client::{ChainClient, ClientConfig},
		registry::EndpointRegistry,
	},
};

/// Consumer callback invoked once per delivered block.
///
/// The watermark for a chain only advances after the handler returns `Ok`,
/// so a failing handler fails the chain task rather than skipping heights.
pub type BlockHandler =
	Arc<dyn Fn(Block) -> BoxFuture<'static, Result<(), anyhow::Error>> + Send + Sync>;

/// Timing knobs for the polling loop.
#[derive(Debug, Clone)]
pub struct WatcherIntervals {
	/// Sleep between polls when no new block was committed.
	pub poll_idle: Duration,
	/// Cooldown before a failed chain task is restarted.
	pub restart_cooldown: Duration,
	/// Timing of the underlying chain clients.
	pub client: ClientConfig,
}

impl Default for WatcherIntervals {
	fn default() -> Self {
		Self {
			poll_idle: Duration::from_secs(1),
			restart_cooldown: Duration::from_secs(30),
			client: ClientConfig::default(),
		}
	}
}

impl From<&IntervalsConfig> for WatcherIntervals {
	fn from(config: &IntervalsConfig) -> Self {
		Self {
			poll_idle: Duration::from_millis(config.poll_idle_ms),
			restart_cooldown: Duration::from_millis(config.restart_cooldown_ms),
			client: ClientConfig {
				call_timeout: Duration::from_millis(config.call_timeout_ms),
				tx_sync_grace: Duration::from_millis(config.tx_sync_grace_ms),
			},
		}
	}
}

/// Orchestrates one polling task per tracked chain.
pub struct BlockWatcher {
	registry: Arc<EndpointRegistry>,
	chains: Vec<ChainTarget>,
	mode: FetchMode,
	handler: Option<BlockHandler>,
	intervals: WatcherIntervals,
}

impl BlockWatcher {
	pub fn new(registry: EndpointRegistry) -> Self {
		Self {
			registry: Arc::new(registry),
			chains: Vec::new(),
			mode: FetchMode::default(),
			handler: None,
			intervals: WatcherIntervals::default(),
		}
	}

	/// Registers a chain to track, with an optional starting floor height.
	pub fn add_chain(mut self, chain_id: impl Into<String>, start_height: Option<u64>) -> Self {
		self.chains.push(ChainTarget::new(chain_id, start_height));
		self
	}

	/// Registers several chains sharing one starting floor.
	pub fn add_chains<I, S>(mut self, chain_ids: I, start_height: Option<u64>) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		for chain_id in chain_ids {
			self.chains.push(ChainTarget::new(chain_id, start_height));
		}
		self
	}

	pub fn with_intervals(mut self, intervals: WatcherIntervals) -> Self {
		self.intervals = intervals;
		self
	}

	/// Sets the fetch mode and the handler every block is delivered to.
	pub fn on_block(mut self, mode: FetchMode, handler: BlockHandler) -> Self {
		self.mode = mode;
		self.handler = Some(handler);
		self
	}

	/// Runs all chain tasks until process shutdown.
	///
	/// Completes only when every chain task has permanently ended, which in
	/// practice means never: failed tasks restart after a cooldown.
	pub async fn run(self) -> Result<(), WatcherError> {
		let handler = self.handler.ok_or(WatcherError::MissingHandler)?;

		if self.chains.is_empty() {
			tracing::info!("no chains registered, block watcher will not start");
			return Ok(());
		}

		tracing::info!(chains = self.chains.len(), "starting block watcher");

		let tasks: Vec<_> = self
			.chains
			.into_iter()
			.map(|target| {
				let registry = self.registry.clone();
				let handler = handler.clone();
				let intervals = self.intervals.clone();
				let mode = self.mode;

				tokio::spawn(async move {
					run_chain(registry, target, mode, handler, intervals).await;
				})
			})
			.collect();

		future::join_all(tasks).await;
		Ok(())
	}
}

/// Restart-forever loop for one chain. Any failure of a sync attempt is
/// logged and followed by a fixed cooldown before the next attempt, so one
/// chain's persistent outage never affects the others.
async fn run_chain(
	registry: Arc<EndpointRegistry>,
	target: ChainTarget,
	mode: FetchMode,
	handler: BlockHandler,
	intervals: WatcherIntervals,
) {
	loop {
		let err = match sync_chain(&registry, &target, mode, &handler, &intervals).await {
			Ok(never) => match never {},
			Err(err) => err,
		};

		tracing::error!(
			chain = %target.chain_id,
			error = %err,
			cooldown_ms = intervals.restart_cooldown.as_millis() as u64,
			"chain task failed, restarting after cooldown"
		);

		tokio::time::sleep(intervals.restart_cooldown).await;
	}
}

/// One attempt at syncing a chain: resolve endpoints, then poll and deliver
/// until something unrecoverable happens. Never returns `Ok`.
async fn sync_chain(
	registry: &EndpointRegistry,
	target: &ChainTarget,
	mode: FetchMode,
	handler: &BlockHandler,
	intervals: &WatcherIntervals,
) -> Result<std::convert::Infallible, WatcherError> {
	// STARTING: bind a client to freshly resolved endpoints. After a
	// restart the watermark reseeds from the caller-supplied floor.
	let endpoints = Arc::new(registry.resolve(&target.chain_id).await?);
	let client = ChainClient::new(endpoints, intervals.client.clone());
	let mut watermark = target.start_height;

	tracing::info!(
		chain = %target.chain_id,
		floor = watermark,
		"chain task started"
	);

	loop {
		// POLLING
		let new_height = client.get_latest_height(watermark.unwrap_or(0)).await?;

		if watermark == Some(new_height) {
			tokio::time::sleep(intervals.poll_idle).await;
			continue;
		}

		// FETCHING / DELIVERING: strictly sequential within the chain to
		// preserve height order.
		let first = match watermark {
			Some(delivered) => delivered + 1,
			// First observation establishes the watermark.
			None => new_height,
		};

		for height in first..=new_height {
			let block = compose_block(&client, &target.chain_id, height, mode).await?;

			handler(block).await.map_err(WatcherError::Handler)?;
			watermark = Some(height);

			tracing::debug!(chain = %target.chain_id, height, "delivered block");
		}
	}
}

/// Composes the block for one height per the configured fetch mode.
async fn compose_block(
	client: &ChainClient,
	chain_id: &str,
	height: u64,
	mode: FetchMode,
) -> Result<Block, WatcherError> {
	let block = match mode {
		FetchMode::Height => Block {
			chain: chain_id.to_string(),
			height,
			header: None,
			txs: Vec::new(),
		},
		FetchMode::Headers => Block {
			chain: chain_id.to_string(),
			height,
			header: Some(client.get_block_header(height).await?),
			txs: Vec::new(),
		},
		FetchMode::HeadersAndTransactions => {
			let header = client.get_block_header(height).await?;
			let txs = client.get_txs_in_block(height).await;
			Block {
				chain: chain_id.to_string(),
				height,
				header: Some(header),
				txs,
			}
		}
	};

	Ok(block)
}
