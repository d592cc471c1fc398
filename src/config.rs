//! Configuration module for fie.
//!
//! Holds the [General] and [Theme] sections of `fie.toml` and the [Config] loader.
//!
//! Module overview:
//! - [general]: header, symlink target, and color switches.
//! - [theme]: colors used for names, notices, and errors.
//! - [load]: locating, reading, and generating `fie.toml`.

pub mod general;
pub mod load;
pub mod theme;

pub use general::{ColorChoice, General};
pub use load::Config;
pub use theme::Theme;
