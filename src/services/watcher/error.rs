use thiserror::Error;

use crate::services::{client::ClientError, registry::RegistryError};

/// Errors that end one attempt of a chain's sync task
#[derive(Debug, Error)]
pub enum WatcherError {
	/// `run` was called before a block handler was registered
	#[error("no block handler registered; call on_block before run")]
	MissingHandler,

	/// Endpoint resolution failed while starting the chain task
	#[error(transparent)]
	Registry(#[from] RegistryError),

	/// Block acquisition failed after exhausting all endpoints
	#[error(transparent)]
	Client(#[from] ClientError),

	/// The consumer callback rejected a block
	#[error("block handler failed: {0}")]
	Handler(#[source] anyhow::Error),
}
