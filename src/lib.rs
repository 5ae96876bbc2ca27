//! Shared plumbing for the `bioverse` binary.
//!
//! The interactive UI lives in `bioverse-tui` and the HTTP client in
//! `bioverse-api`; this crate only resolves where files go and how logs are
//! written so both the binary and its tests can reuse it.

pub mod app_dirs;
pub mod logging;
