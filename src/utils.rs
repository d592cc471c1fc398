//! Miscellaneous utility functions for fie.
//!
//! - [helpers]: color parsing and home directory handling.
//! - [cli]: command-line argument handling, help, and version output.
//! - [logging]: the `tracing` subscriber writing diagnostics to stderr.

pub mod cli;
pub mod helpers;
pub mod logging;

pub use helpers::{expand_home_path, get_home, parse_color};
pub use logging::init_logging;
