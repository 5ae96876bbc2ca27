//! Client-side view of the BioVerse backend.
//!
//! The backend exposes four JSON endpoints (search, describe, recommend and
//! SciBERT entity recognition). This crate owns the wire types for those
//! endpoints, the [`Backend`] seam the UI talks to, and the blocking
//! [`HttpBackend`] implementation used at runtime.

mod client;
mod config;
mod endpoint;
mod error;
mod types;

pub use client::{Backend, HttpBackend};
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use endpoint::Endpoint;
pub use error::ApiError;
pub use types::{
	DescribeResponse, NerPayload, NerRequest, Recommendation, RecommendResponse, SearchHit,
	SearchResponse,
};
