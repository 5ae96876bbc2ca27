use std::fmt::Write;

use anyhow::Result;
use bioverse_api::SearchHit;

use crate::workflow::{HeadlessReport, Outcome};

/// Print a plain-text rendering of a headless run.
pub(crate) fn print_plain(report: &HeadlessReport) {
	print!("{}", format_plain(report));
}

pub(crate) fn format_plain(report: &HeadlessReport) -> String {
	let mut out = String::new();
	let _ = writeln!(out, "Query: {}", report.query);
	let _ = writeln!(out, "Backend: {}", report.base_url);

	let _ = writeln!(out);
	match &report.search {
		Outcome::Ok(hits) => {
			let _ = writeln!(out, "Search results ({}):", hits.len());
			write_hits(&mut out, hits);
		}
		Outcome::Error(err) => {
			let _ = writeln!(out, "Search results: error: {err}");
		}
	}

	let _ = writeln!(out);
	match &report.summary {
		Outcome::Ok(summary) if summary.is_empty() => {
			let _ = writeln!(out, "AI summary: (none)");
		}
		Outcome::Ok(summary) => {
			let _ = writeln!(out, "AI summary:");
			let _ = writeln!(out, "  {summary}");
		}
		Outcome::Error(err) => {
			let _ = writeln!(out, "AI summary: error: {err}");
		}
	}

	let _ = writeln!(out);
	match &report.recommendations {
		Outcome::Ok(response) => {
			let _ = writeln!(out, "Recommendations ({}):", response.results.len());
			write_hits(&mut out, &response.results);
			if let Some(message) = &response.message {
				let _ = writeln!(out, "  {message}");
			}
		}
		Outcome::Error(err) => {
			let _ = writeln!(out, "Recommendations: error: {err}");
		}
	}

	let _ = writeln!(out);
	match &report.entities {
		Outcome::Ok(payload) => {
			let _ = writeln!(out, "Named entities:");
			for line in payload.pretty().lines() {
				let _ = writeln!(out, "  {line}");
			}
		}
		Outcome::Error(err) => {
			let _ = writeln!(out, "Named entities: error: {err}");
		}
	}

	out
}

fn write_hits(out: &mut String, hits: &[SearchHit]) {
	for (index, hit) in hits.iter().enumerate() {
		let _ = writeln!(out, "  {}. {}", index + 1, hit.title);
		if !hit.description.is_empty() {
			let _ = writeln!(out, "     {}", hit.description);
		}
	}
}

pub(crate) fn format_report_json(report: &HeadlessReport) -> Result<String> {
	Ok(serde_json::to_string_pretty(report)?)
}

/// Print the JSON representation of a headless run.
pub(crate) fn print_json(report: &HeadlessReport) -> Result<()> {
	println!("{}", format_report_json(report)?);
	Ok(())
}
