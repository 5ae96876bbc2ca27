use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Margin, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};
use throbber_widgets_tui::Throbber;
use unicode_width::UnicodeWidthStr;

use super::HomeScreen;
use super::cards::{Card, CardKind};
use crate::Action;
use crate::style::Theme;

const HEADLINE: &str = "Unlocking the Secrets of Space Biology";
const TAGLINE: &str = "Search. Learn. Discover the unknown.";
const KEY_HINTS: &str =
	"Enter search · ^D summary · ^R recommend · ^E entities · ↑/↓ scroll · Esc quit";
/// Cards shorter than this are not drawn at the bottom of the pane.
const MIN_CARD_HEIGHT: u16 = 3;

impl HomeScreen<'_> {
	pub(crate) fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
		let area = area.inner(Margin {
			vertical: 0,
			horizontal: 1,
		});
		let [hero, input, results, hints] = Layout::vertical([
			Constraint::Length(2),
			Constraint::Length(3),
			Constraint::Min(1),
			Constraint::Length(1),
		])
		.areas(area);

		render_hero(frame, hero, theme);
		self.render_input(frame, input, theme);
		self.render_cards(frame, results, theme);
		self.render_hints(frame, hints, theme);
	}

	fn render_input(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
		let mut block = Block::bordered()
			.border_type(BorderType::Rounded)
			.border_style(theme.accent)
			.title(Span::styled(" Search ", theme.header));
		if self.is_loading() {
			let spinner = Throbber::default()
				.style(theme.muted)
				.throbber_style(theme.accent);
			let mut line = Line::default();
			line.spans.push(spinner.to_symbol_span(&self.throbber_state));
			let pending: Vec<&str> = self.pending().into_iter().map(Action::label).collect();
			line.spans.push(Span::styled(
				format!("Loading {}... ", pending.join(", ")),
				theme.muted,
			));
			block = block.title(line.right_aligned());
		}
		self.input.set_styles(theme.text, theme.muted);
		self.input.render(frame, area, block);
	}

	fn render_cards(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
		let pane = Block::bordered()
			.border_type(BorderType::Plain)
			.border_style(theme.muted)
			.title(Span::styled(" AI Results ", theme.header));
		let inner = pane.inner(area);
		frame.render_widget(pane, area);

		let cards = self.cards();
		self.scroll = self.scroll.min(cards.len().saturating_sub(1));

		let mut y = inner.y;
		let bottom = inner.bottom();
		for card in cards.iter().skip(self.scroll) {
			let remaining = bottom.saturating_sub(y);
			if remaining < MIN_CARD_HEIGHT {
				break;
			}
			let body = card_body(card, theme);
			let height = card_height(&body, inner.width).min(remaining);
			let card_area = Rect::new(inner.x, y, inner.width, height);
			render_card(frame, card_area, card, body, theme);
			y = y.saturating_add(height);
		}
	}

	fn render_hints(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
		let count = if self.results.is_empty() {
			String::new()
		} else {
			format!("{} results ", self.results.len())
		};
		let [left, right] = Layout::horizontal([
			Constraint::Min(0),
			Constraint::Length(u16::try_from(count.width()).unwrap_or(u16::MAX)),
		])
		.areas(area);
		frame.render_widget(Paragraph::new(KEY_HINTS).style(theme.muted), left);
		frame.render_widget(
			Paragraph::new(count)
				.style(theme.accent)
				.alignment(Alignment::Right),
			right,
		);
	}
}

fn render_hero(frame: &mut Frame, area: Rect, theme: &Theme) {
	let lines = vec![
		Line::from(Span::styled(HEADLINE, theme.header)),
		Line::from(Span::styled(TAGLINE, theme.muted)),
	];
	frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Border and body styles for a card.
fn card_styles(kind: CardKind, theme: &Theme) -> (Style, Style) {
	match kind {
		CardKind::Error => (theme.error, theme.error),
		CardKind::Summary => (theme.accent, theme.text),
		CardKind::Feature => (theme.feature, theme.text),
		CardKind::Placeholder | CardKind::Notice => (theme.muted, theme.muted),
		CardKind::Result | CardKind::Recommendation | CardKind::Entities => {
			(theme.muted, theme.text)
		}
	}
}

/// The wrapped card contents without borders. The same paragraph is measured
/// and drawn, so the card height always matches the rows the widget fills.
fn card_body(card: &Card, theme: &Theme) -> Paragraph<'static> {
	let (_, body) = card_styles(card.kind, theme);
	let mut lines: Vec<Line> = card
		.body
		.lines()
		.map(|line| Line::from(Span::styled(line.to_string(), body)))
		.collect();
	if let Some(footer) = &card.footer {
		lines.push(Line::from(Span::styled(footer.clone(), theme.muted)));
	}

	// JSON keeps its indentation; prose is re-flowed.
	let trim = card.kind != CardKind::Entities;
	Paragraph::new(lines).wrap(Wrap { trim })
}

/// Total height of a card including its borders.
fn card_height(body: &Paragraph<'_>, width: u16) -> u16 {
	let rows = body.line_count(width.saturating_sub(2)).max(1);
	u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(2)
}

fn render_card(frame: &mut Frame, area: Rect, card: &Card, body: Paragraph<'_>, theme: &Theme) {
	let (border, _) = card_styles(card.kind, theme);
	let mut block = Block::bordered()
		.border_type(BorderType::Rounded)
		.border_style(border)
		.title(Span::styled(format!(" {} ", card.title), theme.header));
	if let Some(tag) = card.kind.tag() {
		block = block.title(Line::from(Span::styled(format!(" {tag} "), border)).right_aligned());
	}

	frame.render_widget(body.block(block), area);
}
