//! Interactive terminal UI for the BioVerse client.
//!
//! The [`App`] starts on the animated [`BootScreen`] and switches to the
//! [`HomeScreen`] once the boot sequence reports completion. The home screen
//! talks to the backend through the [`bioverse_api::Backend`] trait on
//! background threads so the event loop never blocks on the network.

mod action;
mod app;
pub mod boot;
pub mod components;
mod config;
pub mod home;
pub mod input;
mod runtime;
pub mod style;
#[cfg(test)]
mod testing;
mod worker;

pub use action::Action;
pub use app::{App, Exit};
pub use boot::{BootComplete, BootScreen};
pub use config::UiOptions;
pub use home::HomeScreen;
pub use input::QueryInput;
pub use style::{Theme, by_name as theme_by_name, default_theme, names as theme_names};

use std::sync::Arc;

use anyhow::Result;
use bioverse_api::Backend;

/// Build an [`App`] and run it until the user quits.
pub fn run(backend: Arc<dyn Backend>, options: UiOptions) -> Result<Exit> {
	let mut app = App::new(backend, options);
	app.run()
}
