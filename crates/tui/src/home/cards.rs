//! Card model for the home screen's results pane.

use bioverse_api::SearchHit;

use super::HomeScreen;

pub(crate) const PLACEHOLDER_CARDS: [(&str, &str); 2] = [
	(
		"AI-Powered Space Biology Search Engine",
		"Explore the vast universe of space biology with our AI-driven search engine.",
	),
	(
		"Uncover the Mysteries of Space Biology",
		"Delve into the fascinating world of space biology and uncover the secrets of life beyond Earth.",
	),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CardKind {
	Error,
	Summary,
	Result,
	Recommendation,
	Notice,
	Entities,
	Placeholder,
	Feature,
}

impl CardKind {
	/// Label drawn on the right of the card border.
	pub(crate) fn tag(self) -> Option<&'static str> {
		match self {
			CardKind::Error => Some("error"),
			CardKind::Summary => Some("AI"),
			CardKind::Recommendation => Some("recommended"),
			CardKind::Entities => Some("SciBERT"),
			_ => None,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Card {
	pub(crate) kind: CardKind,
	pub(crate) title: String,
	pub(crate) body: String,
	pub(crate) footer: Option<String>,
}

impl Card {
	fn new(kind: CardKind, title: impl Into<String>, body: impl Into<String>) -> Self {
		Self {
			kind,
			title: title.into(),
			body: body.into(),
			footer: None,
		}
	}

	fn from_hit(kind: CardKind, hit: &SearchHit) -> Self {
		let mut card = Self::new(kind, hit.title.clone(), hit.description.clone());
		card.footer = hit_footer(hit);
		card
	}
}

fn hit_footer(hit: &SearchHit) -> Option<String> {
	let mut parts = Vec::new();
	if let Some(id) = &hit.id {
		parts.push(id.clone());
	}
	if !hit.keywords.is_empty() {
		parts.push(hit.keywords.join(", "));
	}
	if parts.is_empty() {
		None
	} else {
		Some(parts.join(" · "))
	}
}

impl HomeScreen<'_> {
	/// Cards in display order.
	pub(crate) fn cards(&self) -> Vec<Card> {
		let mut cards = Vec::new();

		if let Some(error) = &self.error {
			cards.push(Card::new(CardKind::Error, "Request failed", error.clone()));
		}

		let content_start = cards.len();
		if !self.summary.is_empty() {
			cards.push(Card::new(CardKind::Summary, "AI Summary", self.summary.clone()));
		}
		cards.extend(
			self.results
				.iter()
				.map(|hit| Card::from_hit(CardKind::Result, hit)),
		);
		cards.extend(
			self.recommendations
				.iter()
				.map(|hit| Card::from_hit(CardKind::Recommendation, hit)),
		);
		if self.recommendations.is_empty() {
			if let Some(message) = &self.recommend_message {
				cards.push(Card::new(CardKind::Notice, "Recommendations", message.clone()));
			}
		}
		if let Some(entities) = &self.entities {
			cards.push(Card::new(CardKind::Entities, "Named Entities", entities.pretty()));
		}

		if cards.len() == content_start && !self.is_loading() {
			let [first, second] = PLACEHOLDER_CARDS;
			cards.push(Card::new(CardKind::Placeholder, first.0, first.1));
			cards.push(Card::new(CardKind::Feature, second.0, second.1));
		}

		cards
	}

	pub(crate) fn card_count(&self) -> usize {
		self.cards().len()
	}
}
