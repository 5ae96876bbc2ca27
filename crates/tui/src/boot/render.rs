use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, LineGauge, Paragraph};

use super::{BootScreen, LINE_COUNT};
use crate::components::centered;
use crate::style::Theme;

const HEADLINE: &str = "SYSTEM UPGRADE IN PROGRESS";
const FOOTER: &str = "MANDEL'S DESCENDANTS © 2025 | NASA SPACE APPS CHALLENGE";
const PLACEHOLDER_HEADER: &str = "INITIALIZING...";
const READY: &str = "SYSTEM READY";
const MAX_WIDTH: u16 = 78;
/// Every line after the header gets its own row.
const BODY_ROWS: u16 = LINE_COUNT as u16 - 1;
/// Body rows, progress row, cursor row and borders.
const CONSOLE_HEIGHT: u16 = BODY_ROWS + 4;
/// Panel (4) + gap (1) + console + gap (1) + footer (1).
const CONTENT_HEIGHT: u16 = 4 + 1 + CONSOLE_HEIGHT + 1 + 1;
const BLINK_MS: u128 = 500;

impl BootScreen {
	pub(crate) fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
		let area = centered(area, MAX_WIDTH, CONTENT_HEIGHT);
		let [panel, _, console, _, footer] = Layout::vertical([
			Constraint::Length(4),
			Constraint::Length(1),
			Constraint::Length(CONSOLE_HEIGHT),
			Constraint::Length(1),
			Constraint::Length(1),
		])
		.areas(area);

		render_panel(frame, panel, theme);
		self.render_console(frame, console, theme);
		frame.render_widget(
			Paragraph::new(Span::styled(FOOTER, theme.muted)).alignment(Alignment::Center),
			footer,
		);
	}

	fn render_console(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
		let lines = self.console_lines();
		let header = lines.first().copied().unwrap_or(PLACEHOLDER_HEADER);
		let lights = Line::from(vec![
			Span::styled("● ", Style::new().fg(Color::Green)),
			Span::styled("● ", Style::new().fg(Color::Yellow)),
			Span::styled("● ", Style::new().fg(Color::Red)),
		])
		.right_aligned();
		let block = Block::bordered()
			.border_type(BorderType::Double)
			.border_style(theme.accent)
			.title(Span::styled(format!(" {header} "), theme.console))
			.title(lights);
		let inner = block.inner(area);
		frame.render_widget(block, area);

		let [body, progress, cursor] = Layout::vertical([
			Constraint::Length(BODY_ROWS),
			Constraint::Length(1),
			Constraint::Length(1),
		])
		.areas(inner);

		let body_lines: Vec<Line> = lines
			.iter()
			.skip(1)
			.map(|line| Line::from(Span::styled(*line, theme.accent)))
			.collect();
		frame.render_widget(Paragraph::new(body_lines), body);

		if lines.len() > 1 {
			self.render_progress(frame, progress, theme);
		}

		let cursor_text = if self.is_ready() {
			READY
		} else if (self.elapsed.as_millis() / BLINK_MS) % 2 == 0 {
			"_"
		} else {
			" "
		};
		frame.render_widget(
			Paragraph::new(Span::styled(cursor_text, theme.console)),
			cursor,
		);
	}

	fn render_progress(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
		let label = format!("> PROGRESS: [{}%] ", self.progress());
		let [label_area, gauge_area] = Layout::horizontal([
			Constraint::Length(label.chars().count() as u16),
			Constraint::Min(0),
		])
		.areas(area);

		frame.render_widget(Paragraph::new(Span::styled(label, theme.feature)), label_area);
		let gauge = LineGauge::default()
			.line_set(symbols::line::THICK)
			.filled_style(theme.feature)
			.unfilled_style(theme.muted)
			.label("")
			.ratio(f64::from(self.progress()) / 100.0);
		frame.render_widget(gauge, gauge_area);
	}
}

fn render_panel(frame: &mut Frame, area: Rect, theme: &Theme) {
	let block = Block::bordered()
		.border_type(BorderType::Rounded)
		.border_style(theme.accent);
	let lines = vec![
		Line::from(Span::styled(HEADLINE, theme.header)),
		Line::from(vec![
			Span::styled("QUANTUM CORE", theme.feature),
			Span::styled(" undergoing ", theme.text),
			Span::styled("dimensional recalibration", theme.accent),
			Span::styled(".", theme.text),
		]),
	];
	frame.render_widget(
		Paragraph::new(lines)
			.alignment(Alignment::Center)
			.block(block),
		area,
	);
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use ratatui::Terminal;
	use ratatui::backend::TestBackend;

	use super::*;
	use crate::testing::buffer_to_string;

	fn draw(boot: &BootScreen) -> String {
		let mut terminal = Terminal::new(TestBackend::new(90, 28)).unwrap();
		let theme = Theme::default();
		terminal
			.draw(|frame| boot.render(frame, frame.area(), &theme))
			.unwrap();
		buffer_to_string(terminal.backend().buffer())
	}

	#[test]
	fn fresh_screen_shows_placeholder_header_and_no_gauge() {
		let view = draw(&BootScreen::new());
		assert!(view.contains(HEADLINE));
		assert!(view.contains(PLACEHOLDER_HEADER));
		assert!(!view.contains("> PROGRESS"));
	}

	#[test]
	fn midway_screen_shows_lines_and_progress() {
		let mut boot = BootScreen::new();
		let _ = boot.advance(Duration::from_millis(2_000));
		let view = draw(&boot);

		assert!(view.contains("DIAGNOSTIC_CONSOLE_V3.7.2"));
		assert!(view.contains("> LOADING NEURAL PATHWAYS..."));
		assert!(!view.contains("> ESTABLISHING SECURE CONNECTION..."));
		assert!(view.contains("> PROGRESS: [50%]"));
		assert!(!view.contains(READY));
	}

	#[test]
	fn full_progress_reports_ready() {
		let mut boot = BootScreen::new();
		let _ = boot.advance(Duration::from_millis(4_100));
		let view = draw(&boot);
		assert!(view.contains("> PROGRESS: [100%]"));
		assert!(view.contains(READY));
	}
}
