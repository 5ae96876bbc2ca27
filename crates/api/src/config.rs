use std::time::Duration;

/// Address used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:10000";

/// Per-request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for [`HttpBackend`](crate::HttpBackend).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
	/// Base URL every endpoint path is joined onto.
	pub base_url: String,
	/// Upper bound for a single request, `None` to wait indefinitely.
	pub timeout: Option<Duration>,
}

impl ClientConfig {
	/// Create a configuration pointing at `base_url` with the default timeout.
	pub fn new(base_url: impl Into<String>) -> Self {
		Self {
			base_url: base_url.into(),
			timeout: Some(DEFAULT_TIMEOUT),
		}
	}

	/// Replace the request timeout.
	#[must_use]
	pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
		self.timeout = timeout;
		self
	}
}

impl Default for ClientConfig {
	fn default() -> Self {
		Self::new(DEFAULT_BASE_URL)
	}
}
