use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	println!("{}", render_summary(config));
}

fn render_summary(config: &ResolvedConfig) -> String {
	let mut lines = vec!["Effective configuration:".to_string()];
	lines.push(format!("  API base URL: {}", config.client.base_url));
	lines.push(match config.client.timeout {
		Some(timeout) => format!("  Request timeout: {}s", timeout.as_secs()),
		None => "  Request timeout: none".to_string(),
	});
	lines.push(format!("  Theme: {}", config.theme_name));
	if !config.initial_query.is_empty() {
		lines.push(format!("  Initial query: {}", config.initial_query));
	}
	lines.push(format!(
		"  Boot screen: {}",
		if config.skip_boot { "skipped" } else { "shown" }
	));
	lines.push(format!(
		"  Log level: {}",
		config.log_level.as_deref().unwrap_or("(RUST_LOG or info)")
	));
	lines.push(match &config.log_file {
		Some(path) => format!("  Log file: {}", path.display()),
		None => "  Log file: (disabled)".to_string(),
	});
	lines.join("\n")
}
