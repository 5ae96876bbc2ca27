use std::sync::Arc;

use anyhow::{Context, Result, bail};
use bioverse_api::{
	ApiError, Backend, HttpBackend, NerPayload, RecommendResponse, SearchHit,
};
use bioverse_tui::{Exit, UiOptions};
use serde::Serialize;

use crate::settings::ResolvedConfig;

/// Coordinates the backend client with either the interactive UI or a single
/// headless pass over every endpoint.
pub(crate) struct Workflow {
	backend: Arc<dyn Backend>,
	base_url: String,
	query: String,
	ui: UiOptions,
}

impl Workflow {
	pub(crate) fn from_config(config: &ResolvedConfig) -> Result<Self> {
		let backend = HttpBackend::new(&config.client)
			.with_context(|| format!("failed to create a client for {}", config.client.base_url))?;
		let base_url = backend.base_url().to_string();
		Ok(Self::with_backend(Arc::new(backend), base_url, config.ui_options()))
	}

	pub(crate) fn with_backend(
		backend: Arc<dyn Backend>,
		base_url: impl Into<String>,
		ui: UiOptions,
	) -> Self {
		Self {
			backend,
			base_url: base_url.into(),
			query: ui.initial_query.trim().to_string(),
			ui,
		}
	}

	/// Open the terminal UI and block until the user quits.
	pub(crate) fn interactive(self) -> Result<Exit> {
		tracing::info!(base_url = %self.base_url, "starting interactive session");
		bioverse_tui::run(self.backend, self.ui)
	}

	/// Issue all four requests for the configured query, one after another.
	///
	/// Individual request failures are recorded in the report; only a missing
	/// query is an error.
	pub(crate) fn headless(&self) -> Result<HeadlessReport> {
		if self.query.is_empty() {
			bail!("--headless needs a non-empty --query");
		}
		tracing::info!(query = %self.query, base_url = %self.base_url, "running headless");

		let query = self.query.as_str();
		let backend = self.backend.as_ref();
		Ok(HeadlessReport {
			query: self.query.clone(),
			base_url: self.base_url.clone(),
			search: backend.search(query).map(|response| response.results).into(),
			summary: backend.describe(query).map(|response| response.summary).into(),
			recommendations: backend.recommend(query).into(),
			entities: backend.recognize(query).into(),
		})
	}
}

/// Result of one request in a headless run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Outcome<T> {
	Ok(T),
	Error(String),
}

impl<T> From<Result<T, ApiError>> for Outcome<T> {
	fn from(result: Result<T, ApiError>) -> Self {
		match result {
			Ok(value) => Outcome::Ok(value),
			Err(err) => {
				tracing::warn!(error = %err, "headless request failed");
				Outcome::Error(err.to_string())
			}
		}
	}
}

impl<T> Outcome<T> {
	pub(crate) fn is_error(&self) -> bool {
		matches!(self, Outcome::Error(_))
	}
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct HeadlessReport {
	pub(crate) query: String,
	pub(crate) base_url: String,
	pub(crate) search: Outcome<Vec<SearchHit>>,
	pub(crate) summary: Outcome<String>,
	pub(crate) recommendations: Outcome<RecommendResponse>,
	pub(crate) entities: Outcome<NerPayload>,
}

impl HeadlessReport {
	/// Number of requests that failed.
	pub(crate) fn failures(&self) -> usize {
		[
			self.search.is_error(),
			self.summary.is_error(),
			self.recommendations.is_error(),
			self.entities.is_error(),
		]
		.into_iter()
		.filter(|failed| *failed)
		.count()
	}
}
