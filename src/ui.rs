//! Terminal output for fie.
//!
//! See [render] for the table layout and coloring rules.

pub mod render;

pub use render::{EMPTY_NOTICE, Renderer};
