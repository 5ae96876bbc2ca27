//! Layout helpers shared by both screens.

mod layout;

pub use layout::centered;
