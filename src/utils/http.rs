//! HTTP client construction.
//!
//! All gateway traffic goes through a `reqwest` client wrapped in
//! transient-error retry middleware. Retries here cover blips on a single
//! endpoint; failing over to a different endpoint is the responsibility of
//! the chain client above.

use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, Jitter, RetryTransientMiddleware};
use std::time::Duration;

/// Configuration for HTTP retry policies
#[derive(Debug, Clone)]
pub struct HttpRetryConfig {
	/// Maximum number of retries for transient errors
	pub max_retries: u32,
	/// Base duration for exponential backoff calculations
	pub base_for_backoff: u32,
	/// Initial backoff duration before the first retry
	pub initial_backoff: Duration,
	/// Maximum backoff duration for retries
	pub max_backoff: Duration,
	/// Jitter to apply to the backoff duration
	pub jitter: Jitter,
}

impl Default for HttpRetryConfig {
	/// Keeps retries short; endpoint failover handles anything longer
	/// than a blip.
	fn default() -> Self {
		Self {
			max_retries: 2,
			base_for_backoff: 2,
			initial_backoff: Duration::from_millis(100),
			max_backoff: Duration::from_secs(1),
			jitter: Jitter::Full,
		}
	}
}

/// Creates a retryable HTTP client with middleware from a base client.
pub fn create_retryable_http_client(
	config: &HttpRetryConfig,
	base_client: reqwest::Client,
) -> ClientWithMiddleware {
	let retry_policy = ExponentialBackoff::builder()
		.base(config.base_for_backoff)
		.retry_bounds(config.initial_backoff, config.max_backoff)
		.jitter(config.jitter)
		.build_with_max_retries(config.max_retries);

	ClientBuilder::new(base_client)
		.with(RetryTransientMiddleware::new_with_policy(retry_policy))
		.build()
}
