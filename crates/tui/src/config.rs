use crate::style::Theme;

/// Start-up options for [`App`](crate::App).
#[derive(Debug, Clone, Default)]
pub struct UiOptions {
	/// Text pre-filled in the query input.
	pub initial_query: String,
	pub theme: Theme,
	/// Go straight to the home screen.
	pub skip_boot: bool,
}
