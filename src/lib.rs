//! Library crate for fie.
//!
//! The shipped application is the `fie` binary (`src/main.rs`).
//!
//! This library exists to share code between the binary and the tests. It is not
//! considered a stable API for external use.

pub mod app;
pub mod config;
pub mod core;
pub mod error;
pub mod ui;
pub mod utils;

pub use error::{FieError, Result};
