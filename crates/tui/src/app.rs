//! Root of the UI: switches from the boot screen to the home screen.

use std::sync::Arc;
use std::time::Duration;

use bioverse_api::Backend;
use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::boot::BootScreen;
use crate::config::UiOptions;
use crate::home::HomeScreen;
use crate::style::Theme;

/// Why the event loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
	Quit,
}

/// Aggregate UI state.
///
/// `loading_complete` is the only coordination between the two screens: the
/// boot screen is drawn until it flips, after which the boot screen is dropped
/// along with its timers.
pub struct App<'a> {
	loading_complete: bool,
	boot: Option<BootScreen>,
	pub home: HomeScreen<'a>,
	pub theme: Theme,
}

impl<'a> App<'a> {
	pub fn new(backend: Arc<dyn Backend>, options: UiOptions) -> Self {
		let UiOptions {
			initial_query,
			theme,
			skip_boot,
		} = options;
		Self {
			loading_complete: skip_boot,
			boot: (!skip_boot).then(BootScreen::new),
			home: HomeScreen::new(backend, initial_query),
			theme,
		}
	}

	#[must_use]
	pub fn loading_complete(&self) -> bool {
		self.loading_complete
	}

	/// The boot screen while it is still shown.
	#[must_use]
	pub fn boot(&self) -> Option<&BootScreen> {
		self.boot.as_ref()
	}

	/// Advance time-driven state by `elapsed` and apply finished requests.
	pub fn tick(&mut self, elapsed: Duration) {
		if let Some(boot) = self.boot.as_mut() {
			if boot.advance(elapsed).is_some() {
				self.finish_boot();
			}
		}
		self.home.pump_replies();
		self.home.tick();
	}

	fn finish_boot(&mut self) {
		self.loading_complete = true;
		self.boot = None;
		tracing::info!("boot screen finished, showing home screen");
	}

	/// Handle a key press; returns [`Exit`] when the user quits.
	pub fn handle_key(&mut self, key: KeyEvent) -> Option<Exit> {
		let ctrl_c = key.modifiers.contains(KeyModifiers::CONTROL)
			&& matches!(key.code, KeyCode::Char('c'));
		if ctrl_c || key.code == KeyCode::Esc {
			return Some(Exit::Quit);
		}
		if self.loading_complete {
			self.home.handle_key(key);
		}
		None
	}

	pub fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area();
		match self.boot.as_ref() {
			Some(boot) if !self.loading_complete => boot.render(frame, area, &self.theme),
			_ => self.home.render(frame, area, &self.theme),
		}
	}
}
