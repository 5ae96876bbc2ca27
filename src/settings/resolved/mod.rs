use std::path::PathBuf;

use bioverse::logging::LogOptions;
use bioverse_api::ClientConfig;
use bioverse_tui::UiOptions;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
	pub client: ClientConfig,
	/// Validated against the built-in theme names.
	pub theme_name: String,
	pub initial_query: String,
	pub skip_boot: bool,
	/// Explicit log filter; `None` defers to `RUST_LOG`.
	pub log_level: Option<String>,
	/// `None` when no data directory could be determined.
	pub log_file: Option<PathBuf>,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}

	pub fn ui_options(&self) -> UiOptions {
		UiOptions {
			initial_query: self.initial_query.clone(),
			theme: bioverse_tui::theme_by_name(&self.theme_name).unwrap_or_default(),
			skip_boot: self.skip_boot,
		}
	}

	pub fn log_options(&self) -> Option<LogOptions> {
		self.log_file.clone().map(|file| LogOptions {
			level: self.log_level.clone(),
			file,
		})
	}
}
