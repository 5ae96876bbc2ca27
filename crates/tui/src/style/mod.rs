//! Visual styling for the boot and home screens.

pub mod theme;

pub use theme::{Theme, ThemeDefinition, by_name, default_theme, names};
