//! Resolve configuration and data directories for `bioverse`.
//!
//! Each directory can be overridden through an environment variable; otherwise
//! the platform location from the `directories` crate is used.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "mandels-descendants";
const APPLICATION: &str = "bioverse";

pub const CONFIG_DIR_ENV: &str = "BIOVERSE_CONFIG_DIR";
pub const DATA_DIR_ENV: &str = "BIOVERSE_DATA_DIR";

/// Name of the log file written inside the data directory.
pub const LOG_FILE_NAME: &str = "bioverse.log";

fn project_dirs() -> Result<ProjectDirs> {
	ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.ok_or_else(|| anyhow!("unable to determine project directories for bioverse"))
}

/// An empty value counts as unset.
fn dir_from_env(name: &str) -> Option<PathBuf> {
	let value = env::var_os(name)?;
	if value.is_empty() {
		None
	} else {
		Some(PathBuf::from(value))
	}
}

/// Directory holding `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CONFIG_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.config_local_dir().to_path_buf())
}

/// Directory holding the log file.
pub fn get_data_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(DATA_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.data_local_dir().to_path_buf())
}

/// Default log file location, `None` when no data directory is available.
#[must_use]
pub fn default_log_file() -> Option<PathBuf> {
	get_data_dir().ok().map(|dir| dir.join(LOG_FILE_NAME))
}
