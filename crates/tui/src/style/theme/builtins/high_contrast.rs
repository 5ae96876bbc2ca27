use ratatui::style::{Color, Modifier, Style};

use crate::style::theme::{Theme, ThemeDefinition};

pub const NAME: &str = "high-contrast";

pub const THEME: Theme = Theme {
	header: Style::new().fg(Color::White).add_modifier(Modifier::BOLD),
	accent: Style::new().fg(Color::Yellow),
	text: Style::new().fg(Color::White),
	muted: Style::new().fg(Color::Gray),
	console: Style::new().fg(Color::Green),
	error: Style::new()
		.fg(Color::Red)
		.add_modifier(Modifier::BOLD.union(Modifier::REVERSED)),
	feature: Style::new().fg(Color::Cyan),
};

pub const DEFINITION: ThemeDefinition = ThemeDefinition::new(NAME, THEME);
