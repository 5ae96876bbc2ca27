//! Configuration loading and resolution.
//!
//! Values are layered from config files, `BIOVERSE__SECTION__KEY` environment
//! variables and CLI flags, in increasing priority. `load` is the entry point
//! and returns a validated [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
pub use resolved::ResolvedConfig;
