use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `bioverse` binary.
#[derive(Parser, Debug)]
#[command(
	name = "bioverse",
	version,
	long_version = long_version(),
	about = "Terminal client for the BioVerse space biology search engine",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "BIOVERSE_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'u',
		long = "api-url",
		value_name = "URL",
		env = "BIOVERSE_API_URL",
		help = "Base URL of the BioVerse backend (default: http://127.0.0.1:10000)"
	)]
	pub(crate) api_url: Option<String>,
	#[arg(
		short = 't',
		long,
		value_name = "SECS",
		help = "Per-request timeout in seconds (default: 30)"
	)]
	pub(crate) timeout: Option<u64>,
	#[arg(
		short = 'q',
		long,
		value_name = "QUERY",
		help = "Pre-fill the search box, required with --headless (default: empty)"
	)]
	pub(crate) query: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name, see --list-themes (default: cosmic)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "skip-boot",
		num_args = 0..=1,
		default_missing_value = "true",
		value_parser = BoolishValueParser::new(),
		help = "Skip the boot animation (default: disabled)"
	)]
	pub(crate) skip_boot: Option<bool>,
	#[arg(
		long,
		help = "Run every request once for --query and print the results instead of opening the UI"
	)]
	pub(crate) headless: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how --headless prints its report"
	)]
	pub(crate) output: OutputFormat,
	#[arg(
		long = "log-level",
		value_name = "FILTER",
		help = "Log filter such as `debug` or `bioverse_api=trace` (default: RUST_LOG, then info)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		long = "log-file",
		value_name = "FILE",
		help = "Write logs to this file (default: bioverse.log in the data directory)"
	)]
	pub(crate) log_file: Option<PathBuf>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
}
