mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use bioverse::logging;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use workflow::Workflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in bioverse_tui::theme_names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	if let Some(options) = resolved.log_options()
		&& let Err(err) = logging::initialize(&options)
	{
		eprintln!("warning: logging disabled: {err:#}");
	}

	let workflow = Workflow::from_config(&resolved)?;
	if cli.headless {
		run_headless(cli.output, &workflow)
	} else {
		workflow.interactive()?;
		Ok(())
	}
}

/// Run every request once and print the report in the chosen format.
fn run_headless(format: OutputFormat, workflow: &Workflow) -> Result<()> {
	let report = workflow.headless()?;

	match format {
		OutputFormat::Plain => print_plain(&report),
		OutputFormat::Json => print_json(&report)?,
	}

	if report.failures() > 0 {
		tracing::warn!(failures = report.failures(), "headless run finished with errors");
	}
	Ok(())
}
