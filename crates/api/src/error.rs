use thiserror::Error;

use crate::Endpoint;

/// Failures surfaced by a [`Backend`](crate::Backend) call.
///
/// The UI never branches on the variant; it stores the rendered message. The
/// variants exist so logs and tests can tell the failure modes apart.
#[derive(Debug, Error)]
pub enum ApiError {
	#[error("invalid backend URL `{url}`: {source}")]
	InvalidBaseUrl {
		url: String,
		#[source]
		source: url::ParseError,
	},
	#[error("failed to build HTTP client: {0}")]
	Client(#[source] reqwest::Error),
	#[error("query is empty")]
	EmptyQuery,
	#[error("{endpoint} failed: {source}")]
	Transport {
		endpoint: Endpoint,
		#[source]
		source: reqwest::Error,
	},
	#[error("{endpoint} returned HTTP {status}{}", detail_suffix(.detail))]
	Status {
		endpoint: Endpoint,
		status: u16,
		detail: Option<String>,
	},
	#[error("{endpoint} returned a malformed body: {source}")]
	Decode {
		endpoint: Endpoint,
		#[source]
		source: serde_json::Error,
	},
}

impl ApiError {
	/// HTTP status code for [`ApiError::Status`], `None` otherwise.
	#[must_use]
	pub fn status(&self) -> Option<u16> {
		match self {
			ApiError::Status { status, .. } => Some(*status),
			_ => None,
		}
	}
}

fn detail_suffix(detail: &Option<String>) -> String {
	match detail {
		Some(detail) => format!(": {detail}"),
		None => String::new(),
	}
}
