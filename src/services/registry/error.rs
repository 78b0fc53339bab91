use thiserror::Error;

/// Errors raised while resolving endpoints for a chain
#[derive(Debug, Error)]
pub enum RegistryError {
	/// No configured source yielded a REST or RPC endpoint for the chain
	#[error("no REST or RPC endpoints known for chain {0}")]
	UnknownChain(String),

	/// An endpoint source failed while being queried
	#[error("endpoint source error for chain {chain}: {source}")]
	Source {
		chain: String,
		#[source]
		source: anyhow::Error,
	},
}
