use std::sync::Arc;
use std::thread;
use std::time::Duration;

use bioverse_api::{Endpoint, SearchHit};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::HomeScreen;
use super::cards::{CardKind, PLACEHOLDER_CARDS};
use crate::Action;
use crate::style::Theme;
use crate::testing::{FakeBackend, buffer_to_string, settle};

fn home(backend: &Arc<FakeBackend>, query: &str) -> HomeScreen<'static> {
	HomeScreen::new(backend.clone(), query)
}

fn render(home: &mut HomeScreen<'_>) -> String {
	let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
	let theme = Theme::default();
	terminal
		.draw(|frame| home.render(frame, frame.area(), &theme))
		.unwrap();
	buffer_to_string(terminal.backend().buffer())
}

fn result_titles(home: &HomeScreen<'_>) -> Vec<String> {
	home.cards()
		.into_iter()
		.filter(|card| card.kind == CardKind::Result)
		.map(|card| card.title)
		.collect()
}

#[test]
fn blank_query_issues_no_requests() {
	let backend = Arc::new(FakeBackend::default());
	for query in ["", "   "] {
		let mut home = home(&backend, query);
		for action in Action::ALL {
			assert!(!home.trigger(action), "{action} should be ignored");
		}
		assert!(!home.submit());
		assert!(!home.is_loading());
	}

	thread::sleep(Duration::from_millis(50));
	assert!(backend.calls().is_empty());
}

#[test]
fn search_renders_one_card_per_result_in_order() {
	let backend = Arc::new(FakeBackend::with_hits(vec![
		SearchHit::new("A", "B"),
		SearchHit::new("C", "D"),
		SearchHit::new("E", "F"),
	]));
	let mut home = home(&backend, "x");

	assert!(home.trigger(Action::Search));
	assert!(home.is_loading());
	assert_eq!(home.pending(), [Action::Search]);
	settle(&mut home);

	assert_eq!(result_titles(&home), ["A", "C", "E"]);
	assert_eq!(backend.calls(), vec![(Endpoint::Search, "x".to_string())]);

	let view = render(&mut home);
	assert!(view.contains("╭ A ─"), "missing card heading:\n{view}");
	assert!(view.contains("│B"), "missing card body:\n{view}");
	let a = view.find("╭ A ─").unwrap();
	let c = view.find("╭ C ─").unwrap();
	let e = view.find("╭ E ─").unwrap();
	assert!(a < c && c < e);
	assert!(view.contains("3 results"));
}

#[test]
fn failed_search_sets_error_and_keeps_previous_results() {
	let backend = Arc::new(FakeBackend::default());
	let mut home = home(&backend, "mice");
	home.trigger(Action::Search);
	settle(&mut home);
	assert_eq!(result_titles(&home), ["mice"]);

	backend.set_failing(true);
	home.set_query("plants");
	home.trigger(Action::Search);
	settle(&mut home);

	let error = home.error().expect("error is set");
	assert!(error.contains("HTTP 500"), "unexpected error: {error}");
	assert_eq!(result_titles(&home), ["mice"]);

	let view = render(&mut home);
	assert!(view.contains("Request failed"));
	assert!(view.contains("boom"));
}

#[test]
fn failed_entity_recognition_clears_previous_payload() {
	let backend = Arc::new(FakeBackend::default());
	let mut home = home(&backend, "Arabidopsis");
	home.trigger(Action::Recognize);
	settle(&mut home);
	assert!(home.entities().is_some());
	assert!(render(&mut home).contains("Named Entities"));

	backend.set_failing(true);
	home.trigger(Action::Recognize);
	settle(&mut home);

	assert!(home.entities().is_none());
	assert!(home.error().is_some());
}

#[test]
fn new_action_clears_previous_error() {
	let backend = Arc::new(FakeBackend::default());
	let mut home = home(&backend, "x");
	backend.set_failing(true);
	home.trigger(Action::Describe);
	settle(&mut home);
	assert!(home.error().is_some());

	backend.set_failing(false);
	home.trigger(Action::Describe);
	assert!(home.error().is_none());
	settle(&mut home);
	assert_eq!(home.summary(), "summary of x");
	assert!(home.error().is_none());
}

#[test]
fn late_reply_from_superseded_search_is_dropped() {
	let backend = Arc::new(FakeBackend {
		slow_query: Some("slow".into()),
		..FakeBackend::default()
	});
	let mut home = home(&backend, "slow");
	home.trigger(Action::Search);
	home.set_query("fast");
	home.trigger(Action::Search);
	settle(&mut home);
	assert_eq!(result_titles(&home), ["fast"]);

	// Let the slow request finish, then make sure it does not win.
	thread::sleep(Duration::from_millis(400));
	assert_eq!(home.pump_replies(), 0);
	assert_eq!(result_titles(&home), ["fast"]);
	assert_eq!(backend.calls().len(), 2);
}

#[test]
fn placeholders_show_before_any_content() {
	let backend = Arc::new(FakeBackend::default());
	let mut home = home(&backend, "");
	let kinds: Vec<_> = home.cards().into_iter().map(|card| card.kind).collect();
	assert_eq!(kinds, [CardKind::Placeholder, CardKind::Feature]);

	let view = render(&mut home);
	assert!(view.contains(PLACEHOLDER_CARDS[0].0));
	assert!(view.contains(PLACEHOLDER_CARDS[1].0));

	home.set_query("x");
	home.trigger(Action::Search);
	assert!(
		home.cards()
			.iter()
			.all(|card| card.kind != CardKind::Placeholder),
		"placeholders hide while loading"
	);
	settle(&mut home);
	assert!(!render(&mut home).contains(PLACEHOLDER_CARDS[0].0));
}

#[test]
fn enter_runs_search_and_describe() {
	let backend = Arc::new(FakeBackend::default());
	let mut home = home(&backend, "");
	for ch in "roots".chars() {
		home.handle_key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE));
	}
	assert_eq!(home.query(), "roots");

	home.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
	settle(&mut home);

	let mut endpoints: Vec<_> = backend.calls().into_iter().map(|(e, _)| e).collect();
	endpoints.sort_by_key(|endpoint| endpoint.path());
	assert_eq!(endpoints, [Endpoint::Describe, Endpoint::Search]);
	assert_eq!(result_titles(&home), ["roots"]);
	assert_eq!(home.summary(), "summary of roots");

	let view = render(&mut home);
	assert!(view.contains("AI Summary"));
	let summary_at = view.find("AI Summary").unwrap();
	let result_at = view.find("╭ roots ─").unwrap();
	assert!(summary_at < result_at);
}

#[test]
fn control_keys_trigger_recommend_and_entities() {
	let backend = Arc::new(FakeBackend::default());
	let mut home = home(&backend, "mice");

	home.handle_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL));
	home.handle_key(KeyEvent::new(KeyCode::Char('e'), KeyModifiers::CONTROL));
	settle(&mut home);

	assert_eq!(home.query(), "mice");
	assert_eq!(home.recommendations()[0].title, "related to mice");
	assert_eq!(home.entities().unwrap().0["entities"][0], "mice");
	let view = render(&mut home);
	assert!(view.contains("related to mice"));
	assert!(view.contains("recommended"));
}

#[test]
fn word_wrapped_description_keeps_its_last_word() {
	let description = format!("{} {} ENDWORD", "a".repeat(89), "b".repeat(89));
	let backend = Arc::new(FakeBackend::with_hits(vec![SearchHit::new(
		"Long",
		description,
	)]));
	let mut home = home(&backend, "x");
	home.trigger(Action::Search);
	settle(&mut home);

	let view = render(&mut home);
	assert!(view.contains("ENDWORD"), "description tail cut off:\n{view}");
}
