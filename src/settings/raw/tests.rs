use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use super::RawConfig;
use crate::cli::CliArgs;

fn cli(args: &[&str]) -> CliArgs {
	let mut full = vec!["bioverse"];
	full.extend_from_slice(args);
	CliArgs::parse_from(full)
}

#[test]
fn cli_overrides_take_precedence() {
	let cli = cli(&[
		"--api-url",
		"http://flag.test",
		"--timeout",
		"7",
		"--theme",
		"solarized",
		"-q",
		"query",
		"--skip-boot",
		"--log-level",
		"debug",
		"--log-file",
		"/tmp/bioverse.log",
	]);

	let mut config = RawConfig::default();
	config.api.base_url = Some("http://file.test".into());
	config.ui.theme = Some("cosmic".into());
	config.apply_cli_overrides(&cli);

	assert_eq!(config.api.base_url.as_deref(), Some("http://flag.test"));
	assert_eq!(config.api.timeout_secs, Some(7));
	assert_eq!(config.ui.theme.as_deref(), Some("solarized"));
	assert_eq!(config.ui.initial_query.as_deref(), Some("query"));
	assert_eq!(config.ui.skip_boot, Some(true));
	assert_eq!(config.logging.level.as_deref(), Some("debug"));
	assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/bioverse.log")));
}

#[test]
fn absent_flags_keep_file_values() {
	let mut config = RawConfig::default();
	config.api.timeout_secs = Some(12);
	config.ui.initial_query = Some("roots".into());
	config.apply_cli_overrides(&cli(&[]));

	assert_eq!(config.api.timeout_secs, Some(12));
	assert_eq!(config.ui.initial_query.as_deref(), Some("roots"));
}

#[test]
fn resolve_fills_defaults() {
	let args = cli(&[]);
	let resolved = RawConfig::default().resolve(&args).unwrap();

	assert_eq!(resolved.client.base_url, bioverse_api::DEFAULT_BASE_URL);
	assert_eq!(resolved.client.timeout, Some(Duration::from_secs(30)));
	assert_eq!(resolved.theme_name, "cosmic");
	assert_eq!(resolved.initial_query, "");
	assert!(!resolved.skip_boot);
	assert_eq!(resolved.log_level, None);
}

#[test]
fn blank_values_count_as_unset() {
	let mut config = RawConfig::default();
	config.api.base_url = Some("  ".into());
	config.ui.theme = Some(String::new());
	config.logging.level = Some(" ".into());

	let resolved = config.resolve(&cli(&[])).unwrap();
	assert_eq!(resolved.client.base_url, bioverse_api::DEFAULT_BASE_URL);
	assert_eq!(resolved.theme_name, "cosmic");
	assert_eq!(resolved.log_level, None);
}

#[test]
fn bad_flag_value_is_attributed_to_the_flag() {
	let args = cli(&["--theme", "sepia"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&args);

	let message = config.resolve(&args).unwrap_err().to_string();
	assert!(message.contains("ui.theme"), "{message}");
	assert!(message.contains("CLI flag `--theme`"), "{message}");
}
