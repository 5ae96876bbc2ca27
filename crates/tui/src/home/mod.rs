//! The interactive home screen.
//!
//! [`HomeScreen`] owns the query, fires the four backend actions through the
//! request runtime and folds replies back into its state. Rendering lives in
//! [`render`] and the card model in [`cards`].

pub(crate) mod cards;
mod render;
mod requests;
#[cfg(test)]
mod tests;

use std::sync::Arc;
use std::sync::mpsc::TryRecvError;

use bioverse_api::{Backend, NerPayload, Recommendation, SearchHit};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use throbber_widgets_tui::ThrobberState;

use crate::Action;
use crate::input::QueryInput;
use crate::worker::{self, Payload, Reply};
pub(crate) use requests::RequestRuntime;

impl Drop for HomeScreen<'_> {
	fn drop(&mut self) {
		self.requests.shutdown();
	}
}

/// State behind the home screen.
pub struct HomeScreen<'a> {
	pub(crate) input: QueryInput<'a>,
	pub(crate) results: Vec<SearchHit>,
	pub(crate) summary: String,
	pub(crate) recommendations: Vec<Recommendation>,
	/// Backend note attached to an empty recommendation list.
	pub(crate) recommend_message: Option<String>,
	pub(crate) entities: Option<NerPayload>,
	pub(crate) error: Option<String>,
	pub(crate) requests: RequestRuntime,
	pub(crate) throbber_state: ThrobberState,
	/// Number of cards scrolled past the top of the results pane.
	pub(crate) scroll: usize,
}

impl<'a> HomeScreen<'a> {
	/// Create the screen and start its request dispatcher.
	pub fn new(backend: Arc<dyn Backend>, initial_query: impl Into<String>) -> Self {
		let (tx, rx) = worker::spawn(backend);
		Self {
			input: QueryInput::new(initial_query),
			results: Vec::new(),
			summary: String::new(),
			recommendations: Vec::new(),
			recommend_message: None,
			entities: None,
			error: None,
			requests: RequestRuntime::new(tx, rx),
			throbber_state: ThrobberState::default(),
			scroll: 0,
		}
	}

	/// Current query text.
	#[must_use]
	pub fn query(&self) -> &str {
		self.input.text()
	}

	/// Replace the query text.
	pub fn set_query(&mut self, query: impl Into<String>) {
		self.input.set_text(query);
	}

	#[must_use]
	pub fn results(&self) -> &[SearchHit] {
		&self.results
	}

	#[must_use]
	pub fn summary(&self) -> &str {
		&self.summary
	}

	#[must_use]
	pub fn recommendations(&self) -> &[Recommendation] {
		&self.recommendations
	}

	#[must_use]
	pub fn entities(&self) -> Option<&NerPayload> {
		self.entities.as_ref()
	}

	/// Message from the most recent failed request.
	#[must_use]
	pub fn error(&self) -> Option<&str> {
		self.error.as_deref()
	}

	/// True while any request is outstanding.
	#[must_use]
	pub fn is_loading(&self) -> bool {
		self.requests.is_loading()
	}

	/// Actions still waiting for their latest reply.
	#[must_use]
	pub fn pending(&self) -> Vec<Action> {
		Action::ALL
			.into_iter()
			.filter(|action| self.requests.is_in_flight(*action))
			.collect()
	}

	/// Issue `action` for the current query.
	///
	/// Returns `false` without touching the network when the query is blank.
	pub fn trigger(&mut self, action: Action) -> bool {
		let query = self.input.text().trim().to_string();
		if query.is_empty() {
			tracing::debug!(%action, "ignoring action for empty query");
			return false;
		}

		self.error = None;
		let id = self.requests.issue(action, query);
		tracing::info!(%action, id, "request issued");
		true
	}

	/// The primary search button: results plus the AI summary.
	pub fn submit(&mut self) -> bool {
		let searched = self.trigger(Action::Search);
		let described = self.trigger(Action::Describe);
		searched || described
	}

	/// Apply every reply waiting on the channel. Returns how many were applied.
	pub fn pump_replies(&mut self) -> usize {
		let mut applied = 0;
		loop {
			match self.requests.try_recv() {
				Ok(reply) => {
					if self.apply_reply(reply) {
						applied += 1;
					}
				}
				Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
			}
		}
		applied
	}

	/// Advance the loading spinner.
	pub fn tick(&mut self) {
		if self.is_loading() {
			self.throbber_state.calc_next();
		}
	}

	/// Handle a key press.
	pub fn handle_key(&mut self, key: KeyEvent) {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Enter => {
				self.submit();
			}
			KeyCode::Char('r') if ctrl => {
				self.trigger(Action::Recommend);
			}
			KeyCode::Char('e') if ctrl => {
				self.trigger(Action::Recognize);
			}
			KeyCode::Char('d') if ctrl => {
				self.trigger(Action::Describe);
			}
			KeyCode::Up | KeyCode::PageUp => {
				self.scroll = self.scroll.saturating_sub(1);
			}
			KeyCode::Down | KeyCode::PageDown => {
				let last = self.card_count().saturating_sub(1);
				self.scroll = (self.scroll + 1).min(last);
			}
			_ => {
				self.input.input(key);
			}
		}
	}

	fn apply_reply(&mut self, reply: Reply) -> bool {
		if !self.requests.accept(&reply) {
			tracing::debug!(action = %reply.action, id = reply.id, "dropping stale reply");
			return false;
		}

		let action = reply.action;
		match reply.outcome {
			Ok(Payload::Search(body)) => {
				tracing::info!(count = body.results.len(), "search results received");
				self.results = body.results;
				self.scroll = 0;
			}
			Ok(Payload::Describe(body)) => {
				self.summary = body.summary;
			}
			Ok(Payload::Recommend(body)) => {
				self.recommendations = body.results;
				self.recommend_message = body.message;
			}
			Ok(Payload::Recognize(payload)) => {
				self.entities = Some(payload);
			}
			Err(err) => {
				tracing::warn!(%action, error = %err, "request failed");
				if action == Action::Recognize {
					self.entities = None;
				}
				self.error = Some(err.to_string());
			}
		}
		true
	}
}
