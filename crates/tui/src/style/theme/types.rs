use ratatui::style::Style;

/// Styles for the elements drawn by both screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Headlines and card titles.
	pub header: Style,
	/// Accent colour for borders, the prompt and the progress gauge.
	pub accent: Style,
	/// Regular body text.
	pub text: Style,
	/// Secondary text such as hints, keywords and placeholders.
	pub muted: Style,
	/// Console lines on the boot screen.
	pub console: Style,
	/// Error messages.
	pub error: Style,
	/// Highlighted placeholder card.
	pub feature: Style,
}

/// A named theme compiled into the binary.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
	pub name: &'static str,
	pub theme: Theme,
}

impl ThemeDefinition {
	pub const fn new(name: &'static str, theme: Theme) -> Self {
		Self { name, theme }
	}
}
