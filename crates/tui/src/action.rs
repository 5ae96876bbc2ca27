use std::fmt;

use bioverse_api::Endpoint;

/// A user-triggered request against one backend endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
	Search,
	Describe,
	Recommend,
	Recognize,
}

impl Action {
	pub const ALL: [Action; 4] = [
		Action::Search,
		Action::Describe,
		Action::Recommend,
		Action::Recognize,
	];

	/// Backend route the action calls.
	#[must_use]
	pub fn endpoint(self) -> Endpoint {
		match self {
			Action::Search => Endpoint::Search,
			Action::Describe => Endpoint::Describe,
			Action::Recommend => Endpoint::Recommend,
			Action::Recognize => Endpoint::Ner,
		}
	}

	pub(crate) fn index(self) -> usize {
		match self {
			Action::Search => 0,
			Action::Describe => 1,
			Action::Recommend => 2,
			Action::Recognize => 3,
		}
	}

	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Action::Search => "search",
			Action::Describe => "summary",
			Action::Recommend => "recommendations",
			Action::Recognize => "entities",
		}
	}
}

impl fmt::Display for Action {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}
