//! Built-in colour schemes and lookup by name.

mod builtins;
mod types;

pub use types::{Theme, ThemeDefinition};

use builtins::BUILT_IN_DEFINITIONS;

/// Theme used when none is configured.
#[must_use]
pub fn default_theme() -> Theme {
	builtins::cosmic::THEME
}

/// Canonical names of the built-in themes, default first.
#[must_use]
pub fn names() -> Vec<&'static str> {
	BUILT_IN_DEFINITIONS.iter().map(|def| def.name).collect()
}

/// Look a theme up by name, ignoring case, `-` and `_`.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let wanted = normalize_name(name);
	BUILT_IN_DEFINITIONS
		.iter()
		.find(|def| normalize_name(def.name) == wanted)
		.map(|def| def.theme)
}

fn normalize_name(name: &str) -> String {
	name.trim()
		.chars()
		.filter(|ch| *ch != '-' && *ch != '_' && !ch.is_whitespace())
		.flat_map(char::to_lowercase)
		.collect()
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lookup_ignores_case_and_separators() {
		assert!(by_name("Solarized").is_some());
		assert!(by_name("high-contrast").is_some());
		assert!(by_name("HIGH_CONTRAST").is_some());
		assert!(by_name("nope").is_none());
	}

	#[test]
	fn default_theme_is_listed_first() {
		assert_eq!(names().first().copied(), Some(builtins::cosmic::NAME));
	}
}
