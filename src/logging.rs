//! Route `tracing` output to a log file.
//!
//! The interactive UI owns the terminal, so nothing may be written to stdout or
//! stderr while it runs. Logs go to a file instead, `bioverse.log` in the data
//! directory unless configured otherwise.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt};

/// Filter used when neither a level nor `RUST_LOG` is given.
pub const DEFAULT_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogOptions {
	/// Filter directive such as `debug` or `bioverse_api=trace`. Falls back to
	/// `RUST_LOG`, then [`DEFAULT_LEVEL`].
	pub level: Option<String>,
	pub file: PathBuf,
}

/// Build the filter for an explicit directive or the environment.
pub fn build_filter(level: Option<&str>) -> Result<EnvFilter> {
	match level {
		Some(level) => EnvFilter::try_new(level)
			.map_err(|err| anyhow!("invalid log filter `{level}`: {err}")),
		None => Ok(EnvFilter::try_from_default_env()
			.unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))),
	}
}

/// Install the global subscriber. Fails if one is already installed.
pub fn initialize(options: &LogOptions) -> Result<()> {
	let filter = build_filter(options.level.as_deref())?;

	if let Some(parent) = options.file.parent() {
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(&options.file)
		.with_context(|| format!("failed to open log file {}", options.file.display()))?;

	fmt()
		.with_env_filter(filter)
		.with_writer(Mutex::new(file))
		.with_ansi(false)
		.try_init()
		.map_err(|err| anyhow!("failed to install log subscriber: {err}"))?;

	tracing::info!(
		version = env!("CARGO_PKG_VERSION"),
		file = %options.file.display(),
		"logging initialised"
	);
	Ok(())
}
