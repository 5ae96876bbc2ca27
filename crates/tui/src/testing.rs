//! Test doubles shared by the unit tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use bioverse_api::{
	ApiError, Backend, DescribeResponse, Endpoint, NerPayload, RecommendResponse, SearchHit,
	SearchResponse,
};
use ratatui::buffer::Buffer;

use crate::HomeScreen;

/// In-memory [`Backend`] that records every call.
///
/// Search echoes the query as a single hit unless `hits` is set. A query equal
/// to `slow_query` is answered after a delay so ordering races can be staged.
#[derive(Default)]
pub(crate) struct FakeBackend {
	pub(crate) calls: Mutex<Vec<(Endpoint, String)>>,
	pub(crate) hits: Vec<SearchHit>,
	pub(crate) failing: AtomicBool,
	pub(crate) slow_query: Option<String>,
}

impl FakeBackend {
	pub(crate) fn with_hits(hits: Vec<SearchHit>) -> Self {
		Self {
			hits,
			..Self::default()
		}
	}

	pub(crate) fn set_failing(&self, failing: bool) {
		self.failing.store(failing, Ordering::SeqCst);
	}

	pub(crate) fn calls(&self) -> Vec<(Endpoint, String)> {
		self.calls.lock().unwrap().clone()
	}

	fn record(&self, endpoint: Endpoint, query: &str) -> Result<(), ApiError> {
		self.calls
			.lock()
			.unwrap()
			.push((endpoint, query.to_string()));
		if self.slow_query.as_deref() == Some(query) {
			thread::sleep(Duration::from_millis(300));
		}
		if self.failing.load(Ordering::SeqCst) {
			return Err(ApiError::Status {
				endpoint,
				status: 500,
				detail: Some("boom".into()),
			});
		}
		Ok(())
	}
}

impl Backend for FakeBackend {
	fn search(&self, query: &str) -> Result<SearchResponse, ApiError> {
		self.record(Endpoint::Search, query)?;
		let results = if self.hits.is_empty() {
			vec![SearchHit::new(query, format!("about {query}"))]
		} else {
			self.hits.clone()
		};
		Ok(SearchResponse {
			results,
			..SearchResponse::default()
		})
	}

	fn describe(&self, query: &str) -> Result<DescribeResponse, ApiError> {
		self.record(Endpoint::Describe, query)?;
		Ok(DescribeResponse {
			summary: format!("summary of {query}"),
			source_count: None,
		})
	}

	fn recommend(&self, query: &str) -> Result<RecommendResponse, ApiError> {
		self.record(Endpoint::Recommend, query)?;
		Ok(RecommendResponse {
			results: vec![SearchHit::new(format!("related to {query}"), "suggested")],
			message: None,
		})
	}

	fn recognize(&self, text: &str) -> Result<NerPayload, ApiError> {
		self.record(Endpoint::Ner, text)?;
		Ok(NerPayload(serde_json::json!({ "entities": [text] })))
	}
}

/// Pump replies until nothing is in flight.
pub(crate) fn settle(home: &mut HomeScreen<'_>) {
	let deadline = Instant::now() + Duration::from_secs(5);
	home.pump_replies();
	while home.is_loading() {
		assert!(Instant::now() < deadline, "requests did not settle");
		thread::sleep(Duration::from_millis(5));
		home.pump_replies();
	}
}

/// Flatten a buffer into newline-separated rows.
pub(crate) fn buffer_to_string(buf: &Buffer) -> String {
	let mut lines = Vec::new();
	for y in 0..buf.area.height {
		let mut line = String::new();
		for x in 0..buf.area.width {
			line.push_str(buf[(x, y)].symbol());
		}
		lines.push(line);
	}
	lines.join("\n")
}
