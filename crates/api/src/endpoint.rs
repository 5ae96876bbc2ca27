use std::fmt;

/// The backend routes consumed by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
	/// `GET /search?q=`
	Search,
	/// `GET /describe?q=`
	Describe,
	/// `GET /recommend?q=`
	Recommend,
	/// `POST /scibert/ner`
	Ner,
}

impl Endpoint {
	/// Every endpoint in the order the UI presents them.
	pub const ALL: [Endpoint; 4] = [
		Endpoint::Search,
		Endpoint::Describe,
		Endpoint::Recommend,
		Endpoint::Ner,
	];

	/// Path relative to the configured base URL.
	#[must_use]
	pub fn path(self) -> &'static str {
		match self {
			Endpoint::Search => "search",
			Endpoint::Describe => "describe",
			Endpoint::Recommend => "recommend",
			Endpoint::Ner => "scibert/ner",
		}
	}

	/// HTTP method used for the route.
	#[must_use]
	pub fn method(self) -> &'static str {
		match self {
			Endpoint::Ner => "POST",
			_ => "GET",
		}
	}
}

impl fmt::Display for Endpoint {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} /{}", self.method(), self.path())
	}
}
