use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use bioverse::app_dirs;
use config::{Config, Environment, File};

use crate::cli::CliArgs;

/// Prefix of `BIOVERSE__SECTION__KEY` environment overrides, for example
/// `BIOVERSE__API__BASE_URL` or `BIOVERSE__UI__THEME`.
pub(super) const ENV_PREFIX: &str = "bioverse";

/// Stack every settings layer, later layers overriding earlier ones:
///
/// 1. optional default files (see [`default_config_files`]), skipped with `--no-config`;
/// 2. each `--config` file in command-line order, which must exist;
/// 3. `BIOVERSE__*` environment variables.
///
/// Command-line flags are applied on top of the result by the caller.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let defaults = if cli.no_config {
		Vec::new()
	} else {
		default_config_files()
	};
	let optional = defaults
		.into_iter()
		.map(|path| File::from(path).required(false));
	let explicit = cli
		.config
		.iter()
		.map(|path| File::from(path.clone()).required(true));
	let environment = Environment::with_prefix(ENV_PREFIX)
		.separator("__")
		.try_parsing(true);

	optional
		.chain(explicit)
		.fold(Config::builder(), |builder, file| builder.add_source(file))
		.add_source(environment)
		.build()
		.context("failed to read BioVerse settings")
}

/// Default configuration files, lowest priority first.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join("bioverse.toml"));
		files.push(current_dir.join(".bioverse.toml"));
	}

	files
}
