use thiserror::Error;

/// Errors raised after every candidate endpoint has been exhausted
#[derive(Debug, Error)]
pub enum ClientError {
	/// No REST endpoint reported a latest height and no floor was supplied
	#[error("none of the {tried} REST endpoints returned a latest height for chain {chain}")]
	NoLatestHeight { chain: String, tried: usize },

	/// Every RPC endpoint failed to serve the block header
	#[error("none of the {tried} RPC endpoints returned the header of block {height} for chain {chain}")]
	NoBlockHeader {
		chain: String,
		height: u64,
		tried: usize,
	},
}
