//! Single-line query editor backed by `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;
use tui_textarea::{CursorMove, TextArea};

const PLACEHOLDER: &str = "Search for space biology research";

/// Text input holding the current query.
#[derive(Debug, Clone)]
pub struct QueryInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> QueryInput<'a> {
	pub fn new(initial: impl Into<String>) -> Self {
		let mut textarea = TextArea::new(vec![initial.into()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.set_placeholder_text(PLACEHOLDER);
		textarea.move_cursor(CursorMove::End);
		Self { textarea }
	}

	/// Current query text.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	/// Replace the query and move the cursor to the end.
	pub fn set_text(&mut self, text: impl Into<String>) {
		let mut textarea = TextArea::new(vec![text.into()]);
		textarea.set_cursor_line_style(self.textarea.cursor_line_style());
		textarea.set_placeholder_text(PLACEHOLDER);
		textarea.set_style(self.textarea.style());
		textarea.move_cursor(CursorMove::End);
		self.textarea = textarea;
	}

	/// Feed a key to the editor. Returns `true` when the text changed.
	///
	/// Keys that would insert a line break are ignored so the query stays on
	/// one line.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		let newline = matches!(key.code, KeyCode::Enter)
			|| (key.modifiers.contains(KeyModifiers::CONTROL)
				&& matches!(key.code, KeyCode::Char('m') | KeyCode::Char('j')));
		if newline {
			return false;
		}
		self.textarea.input(key)
	}

	/// Apply colours from the active theme.
	pub fn set_styles(&mut self, text: Style, placeholder: Style) {
		self.textarea.set_style(text);
		self.textarea.set_placeholder_style(placeholder);
		self.textarea
			.set_cursor_style(text.add_modifier(Modifier::REVERSED));
	}

	/// Draw the editor inside `block`.
	pub fn render(&mut self, frame: &mut Frame, area: Rect, block: Block<'a>) {
		self.textarea.set_block(block);
		frame.render_widget(&self.textarea, area);
	}
}
