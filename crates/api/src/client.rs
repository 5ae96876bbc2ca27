use serde::de::DeserializeOwned;
use url::Url;

use crate::{
	ApiError, ClientConfig, DescribeResponse, Endpoint, NerPayload, NerRequest, RecommendResponse,
	SearchResponse,
};

/// Longest non-JSON error body echoed back in a status error.
const MAX_DETAIL_CHARS: usize = 200;

/// The operations the UI can ask of the backend.
///
/// Calls block the current thread; the UI runs them on worker threads.
pub trait Backend: Send + Sync {
	/// `GET /search?q=`
	fn search(&self, query: &str) -> Result<SearchResponse, ApiError>;
	/// `GET /describe?q=`
	fn describe(&self, query: &str) -> Result<DescribeResponse, ApiError>;
	/// `GET /recommend?q=`
	fn recommend(&self, query: &str) -> Result<RecommendResponse, ApiError>;
	/// `POST /scibert/ner` with `{ "text": query }`
	fn recognize(&self, text: &str) -> Result<NerPayload, ApiError>;
}

/// [`Backend`] over plain JSON-over-HTTP.
#[derive(Debug, Clone)]
pub struct HttpBackend {
	client: reqwest::blocking::Client,
	base: Url,
}

impl HttpBackend {
	/// Build a client for the configured base URL.
	pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
		let base = parse_base_url(&config.base_url)?;
		let mut builder = reqwest::blocking::Client::builder()
			.user_agent(concat!("bioverse/", env!("CARGO_PKG_VERSION")));
		if let Some(timeout) = config.timeout {
			builder = builder.timeout(timeout);
		}
		let client = builder.build().map_err(ApiError::Client)?;
		Ok(Self { client, base })
	}

	/// The normalized base URL requests are resolved against.
	#[must_use]
	pub fn base_url(&self) -> &Url {
		&self.base
	}

	/// Absolute URL for `endpoint`, without query parameters.
	#[must_use]
	pub fn endpoint_url(&self, endpoint: Endpoint) -> Url {
		// Paths are static and relative, so joining onto a parsed base cannot fail.
		self.base
			.join(endpoint.path())
			.unwrap_or_else(|_| self.base.clone())
	}

	fn get<T: DeserializeOwned>(&self, endpoint: Endpoint, query: &str) -> Result<T, ApiError> {
		let query = non_empty(query)?;
		let mut url = self.endpoint_url(endpoint);
		url.query_pairs_mut().append_pair("q", query);
		tracing::debug!(%endpoint, %url, "sending request");

		let response = self
			.client
			.get(url)
			.send()
			.map_err(|source| ApiError::Transport { endpoint, source })?;
		decode(endpoint, response)
	}
}

impl Backend for HttpBackend {
	fn search(&self, query: &str) -> Result<SearchResponse, ApiError> {
		self.get(Endpoint::Search, query)
	}

	fn describe(&self, query: &str) -> Result<DescribeResponse, ApiError> {
		self.get(Endpoint::Describe, query)
	}

	fn recommend(&self, query: &str) -> Result<RecommendResponse, ApiError> {
		self.get(Endpoint::Recommend, query)
	}

	fn recognize(&self, text: &str) -> Result<NerPayload, ApiError> {
		let endpoint = Endpoint::Ner;
		let text = non_empty(text)?;
		let url = self.endpoint_url(endpoint);
		tracing::debug!(%endpoint, %url, "sending request");

		let body = NerRequest {
			text: text.to_string(),
		};
		let response = self
			.client
			.post(url)
			.json(&body)
			.send()
			.map_err(|source| ApiError::Transport { endpoint, source })?;
		decode(endpoint, response)
	}
}

/// Parse the base URL and make sure its path ends in `/` so endpoint paths are
/// appended instead of replacing the last segment.
fn parse_base_url(raw: &str) -> Result<Url, ApiError> {
	let trimmed = raw.trim();
	let mut url = Url::parse(trimmed).map_err(|source| ApiError::InvalidBaseUrl {
		url: trimmed.to_string(),
		source,
	})?;
	if url.cannot_be_a_base() {
		return Err(ApiError::InvalidBaseUrl {
			url: trimmed.to_string(),
			source: url::ParseError::RelativeUrlWithCannotBeABaseBase,
		});
	}
	if !url.path().ends_with('/') {
		let path = format!("{}/", url.path());
		url.set_path(&path);
	}
	url.set_query(None);
	url.set_fragment(None);
	Ok(url)
}

fn non_empty(query: &str) -> Result<&str, ApiError> {
	if query.trim().is_empty() {
		Err(ApiError::EmptyQuery)
	} else {
		Ok(query)
	}
}

fn decode<T: DeserializeOwned>(
	endpoint: Endpoint,
	response: reqwest::blocking::Response,
) -> Result<T, ApiError> {
	let status = response.status();
	let body = response
		.text()
		.map_err(|source| ApiError::Transport { endpoint, source })?;

	if !status.is_success() {
		return Err(ApiError::Status {
			endpoint,
			status: status.as_u16(),
			detail: error_detail(&body),
		});
	}

	serde_json::from_str(&body).map_err(|source| ApiError::Decode { endpoint, source })
}

/// Extract a readable message from an error body. FastAPI reports errors as
/// `{"detail": ...}` where the detail is either a string or a list of
/// validation records.
fn error_detail(body: &str) -> Option<String> {
	let trimmed = body.trim();
	if trimmed.is_empty() {
		return None;
	}

	match serde_json::from_str::<serde_json::Value>(trimmed) {
		Ok(serde_json::Value::Object(map)) => match map.get("detail") {
			Some(serde_json::Value::String(detail)) => Some(detail.clone()),
			Some(other) => Some(other.to_string()),
			None => Some(serde_json::Value::Object(map).to_string()),
		},
		Ok(other) => Some(other.to_string()),
		Err(_) => Some(trimmed.chars().take(MAX_DETAIL_CHARS).collect()),
	}
}
