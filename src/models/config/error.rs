//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Configuration file could not be read
	#[error("failed to read config file: {0}")]
	File(#[from] std::io::Error),

	/// Configuration file is not valid JSON
	#[error("failed to parse config file: {0}")]
	Parse(#[from] serde_json::Error),

	/// Configuration loaded but failed validation
	#[error("invalid configuration: {0}")]
	Validation(String),
}
