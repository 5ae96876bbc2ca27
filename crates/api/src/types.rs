//! Wire types exchanged with the backend.
//!
//! Response envelopes default every field so that a backend omitting
//! `results` or `summary` yields an empty value rather than a decode error.
//! Text fields the backend may send as `null` decode to their default too.

use serde::{Deserialize, Deserializer, Serialize};

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Default + Deserialize<'de>,
{
	Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A single search hit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchHit {
	#[serde(deserialize_with = "null_as_default")]
	pub title: String,
	#[serde(deserialize_with = "null_as_default")]
	pub description: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,
	#[serde(
		deserialize_with = "null_as_default",
		skip_serializing_if = "Vec::is_empty"
	)]
	pub keywords: Vec<String>,
}

impl SearchHit {
	pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			description: description.into(),
			..Self::default()
		}
	}
}

/// A suggested dataset from `/recommend`. Same shape as [`SearchHit`].
pub type Recommendation = SearchHit;

/// Body of `GET /search`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResponse {
	pub results: Vec<SearchHit>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub query: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub count: Option<usize>,
}

/// Body of `GET /describe`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeResponse {
	#[serde(deserialize_with = "null_as_default")]
	pub summary: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub source_count: Option<usize>,
}

/// Body of `GET /recommend`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendResponse {
	pub results: Vec<Recommendation>,
	/// Set by the backend when nothing matched.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub message: Option<String>,
}

/// Body sent to `POST /scibert/ner`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NerRequest {
	pub text: String,
}

/// Entity recognition output. The backend shape is not fixed, so it is kept
/// as raw JSON and displayed verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NerPayload(pub serde_json::Value);

impl NerPayload {
	/// Pretty-printed JSON for display.
	#[must_use]
	pub fn pretty(&self) -> String {
		serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
	}
}
