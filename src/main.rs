//! Block watcher service entry point.
//!
//! Loads the watcher configuration, resolves gateway endpoints for every
//! configured chain and runs one polling task per chain, logging each
//! delivered block until interrupted with Ctrl+C.

pub mod models;
pub mod services;
pub mod utils;

use std::{path::PathBuf, sync::Arc};

use clap::{Arg, Command};
use dotenvy::dotenv;
use std::env::{set_var, var};
use tracing::{error, info};

use crate::{
	models::{FetchMode, WatcherConfig},
	services::{
		registry::{EndpointRegistry, StaticEndpointSource},
		watcher::{BlockHandler, BlockWatcher, WatcherIntervals},
	},
	utils::logging::setup_logging,
};

/// Handler used by the standalone binary: logs every delivered block.
/// Library consumers register their own handler instead.
fn logging_block_handler() -> BlockHandler {
	Arc::new(|block| {
		Box::pin(async move {
			info!(
				chain = %block.chain,
				height = block.height,
				txs = block.txs.len(),
				hash = ?block.header.as_ref().map(|h| &h.hash),
				"new block"
			);
			Ok(())
		})
	})
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
	let matches = Command::new("cosmos-block-watcher")
		.version(env!("CARGO_PKG_VERSION"))
		.about(
			"Tracks the head of configured Cosmos-SDK networks through public REST/RPC \
			 gateways and logs every block in height order.",
		)
		.arg(
			Arg::new("config")
				.long("config")
				.help("Path to the watcher configuration file (default: config/watcher.json)")
				.value_name("PATH"),
		)
		.arg(
			Arg::new("log-level")
				.long("log-level")
				.help("Set log level (trace, debug, info, warn, error)")
				.value_name("LEVEL"),
		)
		.arg(
			Arg::new("mode")
				.long("mode")
				.help("Override the fetch mode (height, headers, headers_and_transactions)")
				.value_name("MODE"),
		)
		.get_matches();

	// Load environment variables from .env file
	dotenv().ok();

	// CLI options only apply when the corresponding env vars are not set
	if let Some(level) = matches.get_one::<String>("log-level") {
		if var("RUST_LOG").is_err() {
			set_var("RUST_LOG", level);
		}
	}

	setup_logging().unwrap_or_else(|e| {
		eprintln!("Failed to setup logging: {}", e);
	});

	let config_path = matches
		.get_one::<String>("config")
		.map(PathBuf::from)
		.unwrap_or_else(|| PathBuf::from("config/watcher.json"));

	let config = WatcherConfig::load_from_path(&config_path)
		.map_err(|e| anyhow::anyhow!("failed to load {}: {}", config_path.display(), e))?;

	let mode = match matches.get_one::<String>("mode").map(String::as_str) {
		Some("height") => FetchMode::Height,
		Some("headers") => FetchMode::Headers,
		Some("headers_and_transactions") => FetchMode::HeadersAndTransactions,
		Some(other) => return Err(anyhow::anyhow!("unknown fetch mode: {}", other)),
		None => config.mode,
	};

	let source = StaticEndpointSource::from_chain_configs(&config.chains);
	let registry = EndpointRegistry::new(vec![Arc::new(source)]);

	let mut watcher = BlockWatcher::new(registry)
		.with_intervals(WatcherIntervals::from(&config.intervals))
		.on_block(mode, logging_block_handler());

	for chain in &config.chains {
		watcher = watcher.add_chain(&chain.chain_id, chain.start_height);
	}

	info!(
		config = %config_path.display(),
		chains = config.chains.len(),
		"service started, press Ctrl+C to shutdown"
	);

	tokio::select! {
		result = watcher.run() => {
			if let Err(e) = result {
				error!("block watcher stopped: {}", e);
			}
		}
		result = tokio::signal::ctrl_c() => {
			if let Err(e) = result {
				error!("error waiting for Ctrl+C: {}", e);
			}
			info!("shutdown signal received, stopping");
		}
	}

	Ok(())
}
