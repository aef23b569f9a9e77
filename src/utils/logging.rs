//! Logging utilities for the registry
//!
//! This module provides utilities for setting up and configuring logging.
//! It uses the `tracing_subscriber` crate to configure the logging.
//!
//! The `setup_logging` function sets the logging to stdout; the
//! `setup_logging_with_writer` function accepts a custom writer.

use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Setup logging to stdout
///
/// Uses the `RUST_LOG` environment variable for filtering, defaulting to
/// the info level.
pub fn setup_logging() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
	setup_logging_with_writer(std::io::stdout)?;
	Ok(())
}

/// Setup logging with a custom writer
pub fn setup_logging_with_writer<W>(
	writer: W,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>>
where
	W: for<'writer> tracing_subscriber::fmt::MakeWriter<'writer> + Send + Sync + 'static,
{
	// Create a filter based on environment variable or default to INFO
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::registry()
		.with(filter)
		.with(
			fmt::layer()
				.with_writer(writer)
				.event_format(
					fmt::format()
						.with_level(true)
						.with_target(true)
						.with_thread_ids(false)
						.with_thread_names(false)
						.with_ansi(true)
						.compact(),
				)
				.fmt_fields(fmt::format::PrettyFields::new()),
		)
		.try_init()?;
	Ok(())
}
