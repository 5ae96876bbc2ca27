use url::Url;

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	let base_url = &config.client.base_url;
	let scheme_ok = Url::parse(base_url)
		.map(|url| matches!(url.scheme(), "http" | "https") && url.has_host());
	match scheme_ok {
		Ok(true) => {}
		Ok(false) => {
			return Err(ConfigError::invalid(
				"api.base_url",
				base_url.as_str(),
				ConfigSources::source_for(&sources.api_base_url, "api.base_url"),
				"must be an http or https URL with a host",
			));
		}
		Err(err) => {
			return Err(ConfigError::invalid(
				"api.base_url",
				base_url.as_str(),
				ConfigSources::source_for(&sources.api_base_url, "api.base_url"),
				err.to_string(),
			));
		}
	}

	if let Some(timeout) = config.client.timeout
		&& timeout.is_zero()
	{
		return Err(ConfigError::invalid(
			"api.timeout_secs",
			"0",
			ConfigSources::source_for(&sources.api_timeout, "api.timeout_secs"),
			"must be greater than zero",
		));
	}

	if bioverse_tui::theme_by_name(&config.theme_name).is_none() {
		return Err(ConfigError::invalid(
			"ui.theme",
			config.theme_name.as_str(),
			ConfigSources::source_for(&sources.ui_theme, "ui.theme"),
			format!(
				"unknown theme, expected one of: {}",
				bioverse_tui::theme_names().join(", ")
			),
		));
	}

	if let Some(level) = &config.log_level
		&& let Err(err) = bioverse::logging::build_filter(Some(level))
	{
		return Err(ConfigError::invalid(
			"logging.level",
			level.as_str(),
			ConfigSources::source_for(&sources.logging_level, "logging.level"),
			err.to_string(),
		));
	}

	Ok(())
}
