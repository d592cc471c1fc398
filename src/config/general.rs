//! The general configuration settings for fie.
//!
//! This module defines the [General] struct for deserializing the `[general]`
//! table of `fie.toml`, and [ColorChoice] which decides whether output is colored.

use crate::core::ListOptions;

use serde::Deserialize;

use std::io::IsTerminal;

/// When to emit color and underline escapes.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Color only when writing to a terminal and `NO_COLOR` is not set.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Resolves the choice for a given output stream.
    pub fn enabled<S: IsTerminal>(self, stream: &S) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => stream.is_terminal() && !no_color_requested(),
        }
    }
}

/// `NO_COLOR` set to any non-empty value disables automatic color.
fn no_color_requested() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|value| !value.is_empty())
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct General {
    header: bool,
    symlink_target: bool,
    color: ColorChoice,
}

impl Default for General {
    fn default() -> Self {
        General {
            header: true,
            symlink_target: false,
            color: ColorChoice::Auto,
        }
    }
}

impl General {
    #[inline]
    pub fn header(&self) -> bool {
        self.header
    }

    #[inline]
    pub fn symlink_target(&self) -> bool {
        self.symlink_target
    }

    #[inline]
    pub fn color(&self) -> ColorChoice {
        self.color
    }

    pub fn list_options(&self) -> ListOptions {
        ListOptions {
            symlink_target: self.symlink_target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forced_choices_ignore_the_stream() {
        assert!(ColorChoice::Always.enabled(&std::io::stdout()));
        assert!(!ColorChoice::Never.enabled(&std::io::stdout()));
    }

    #[test]
    fn partial_table_keeps_defaults() -> Result<(), Box<dyn std::error::Error>> {
        let general: General = toml::from_str("symlink_target = true")?;
        assert!(general.header());
        assert!(general.symlink_target());
        assert_eq!(general.color(), ColorChoice::Auto);
        assert!(general.list_options().symlink_target);
        Ok(())
    }

    #[test]
    fn color_choice_is_lowercase() -> Result<(), Box<dyn std::error::Error>> {
        let general: General = toml::from_str(r#"color = "never""#)?;
        assert_eq!(general.color(), ColorChoice::Never);
        assert!(toml::from_str::<General>(r#"color = "Sometimes""#).is_err());
        Ok(())
    }
}
