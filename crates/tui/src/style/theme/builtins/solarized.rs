use ratatui::style::{Color, Modifier, Style};

use crate::style::theme::{Theme, ThemeDefinition};

pub const NAME: &str = "solarized";

pub const THEME: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(253, 246, 227))
		.add_modifier(Modifier::BOLD),
	accent: Style::new().fg(Color::Rgb(38, 139, 210)),
	text: Style::new().fg(Color::Rgb(147, 161, 161)),
	muted: Style::new().fg(Color::Rgb(88, 110, 117)),
	console: Style::new().fg(Color::Rgb(133, 153, 0)),
	error: Style::new()
		.fg(Color::Rgb(220, 50, 47))
		.add_modifier(Modifier::BOLD),
	feature: Style::new().fg(Color::Rgb(181, 137, 0)),
};

pub const DEFINITION: ThemeDefinition = ThemeDefinition::new(NAME, THEME);
