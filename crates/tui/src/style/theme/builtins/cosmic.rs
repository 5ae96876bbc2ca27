use ratatui::style::{Color, Modifier, Style};

use crate::style::theme::{Theme, ThemeDefinition};

pub const NAME: &str = "cosmic";

pub const THEME: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(240, 248, 255))
		.add_modifier(Modifier::BOLD),
	accent: Style::new().fg(Color::Rgb(34, 211, 238)),
	text: Style::new().fg(Color::Rgb(209, 213, 219)),
	muted: Style::new().fg(Color::Rgb(107, 114, 128)),
	console: Style::new().fg(Color::Rgb(74, 222, 128)),
	error: Style::new()
		.fg(Color::Rgb(248, 113, 113))
		.add_modifier(Modifier::BOLD),
	feature: Style::new().fg(Color::Rgb(45, 212, 191)),
};

pub const DEFINITION: ThemeDefinition = ThemeDefinition::new(NAME, THEME);
