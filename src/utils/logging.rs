//! Logging setup.
//!
//! Configures the `tracing_subscriber` stack used by the binary: an
//! `EnvFilter` driven by `RUST_LOG` (default `info`) and a compact
//! formatter writing to stdout, or to any caller-supplied writer in tests.

use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Sets up logging to stdout.
pub fn setup_logging() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
	setup_logging_with_writer(std::io::stdout)
}

/// Sets up logging with a custom writer.
pub fn setup_logging_with_writer<W>(
	writer: W,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>>
where
	W: for<'writer> tracing_subscriber::fmt::MakeWriter<'writer> + Send + Sync + 'static,
{
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::registry()
		.with(filter)
		.with(
			fmt::layer()
				.with_writer(writer)
				.event_format(fmt::format().with_level(true).with_target(true).compact()),
		)
		.try_init()?;

	Ok(())
}
