use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Error, Result};
use bioverse::app_dirs;
use bioverse_api::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use serde::Deserialize;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};
use crate::cli::CliArgs;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	pub(super) api: ApiSection,
	pub(super) ui: UiSection,
	pub(super) logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ApiSection {
	pub(super) base_url: Option<String>,
	pub(super) timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) theme: Option<String>,
	pub(super) initial_query: Option<String>,
	pub(super) skip_boot: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LoggingSection {
	pub(super) level: Option<String>,
	pub(super) file: Option<PathBuf>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(url) = cli.api_url.clone() {
			self.api.base_url = Some(url);
		}
		if let Some(secs) = cli.timeout {
			self.api.timeout_secs = Some(secs);
		}
		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
		}
		if let Some(query) = cli.query.clone() {
			self.ui.initial_query = Some(query);
		}
		if let Some(skip) = cli.skip_boot {
			self.ui.skip_boot = Some(skip);
		}
		if let Some(level) = cli.log_level.clone() {
			self.logging.level = Some(level);
		}
		if let Some(file) = cli.log_file.clone() {
			self.logging.file = Some(file);
		}
	}

	/// Fill defaults and validate, producing a [`ResolvedConfig`].
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			api_base_url: detect_source(
				cli.api_url.is_some(),
				self.api.base_url.is_some(),
				"BIOVERSE__API__BASE_URL",
				"--api-url",
				"api.base_url",
			),
			api_timeout: detect_source(
				cli.timeout.is_some(),
				self.api.timeout_secs.is_some(),
				"BIOVERSE__API__TIMEOUT_SECS",
				"--timeout",
				"api.timeout_secs",
			),
			ui_theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"BIOVERSE__UI__THEME",
				"--theme",
				"ui.theme",
			),
			logging_level: detect_source(
				cli.log_level.is_some(),
				self.logging.level.is_some(),
				"BIOVERSE__LOGGING__LEVEL",
				"--log-level",
				"logging.level",
			),
		};

		let base_url = self
			.api
			.base_url
			.map(|url| url.trim().to_string())
			.filter(|url| !url.is_empty())
			.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
		let timeout = self
			.api
			.timeout_secs
			.map_or(DEFAULT_TIMEOUT, Duration::from_secs);

		let theme_name = self
			.ui
			.theme
			.map(|theme| theme.trim().to_string())
			.filter(|theme| !theme.is_empty())
			.unwrap_or_else(default_theme_name);

		let log_level = self
			.logging
			.level
			.map(|level| level.trim().to_string())
			.filter(|level| !level.is_empty());
		let log_file = self.logging.file.or_else(app_dirs::default_log_file);

		let config = ResolvedConfig {
			client: ClientConfig::new(base_url).with_timeout(Some(timeout)),
			theme_name,
			initial_query: self.ui.initial_query.unwrap_or_default(),
			skip_boot: self.ui.skip_boot.unwrap_or(false),
			log_level,
			log_file,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn default_theme_name() -> String {
	bioverse_tui::theme_names()
		.first()
		.map_or_else(|| "cosmic".to_string(), |name| (*name).to_string())
}

/// Work out where a value that is present came from, for error messages.
fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;
