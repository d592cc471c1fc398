//! Theme configuration options for fie
//!
//! This module defines the `[theme]` table of `fie.toml`: the colors used for entry
//! names by type, for the empty-directory notice, and for error messages.

use crate::core::EntryKind;
use crate::utils::parse_color;

use crossterm::style::Color;
use serde::Deserialize;

const AQUA: Color = Color::Rgb { r: 0, g: 255, b: 255 };
const PINK: Color = Color::Rgb { r: 255, g: 192, b: 203 };
const GOLD: Color = Color::Rgb { r: 255, g: 215, b: 0 };
const CRIMSON: Color = Color::Rgb { r: 220, g: 20, b: 60 };

/// Theme configuration options
/// # Examples
/// ```toml
/// [theme]
/// directory = "blue"
/// symlink = "#ff79c6"
/// file = "default"
/// ```
/// `"default"` (or `"reset"`) prints that element without color.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Theme {
    #[serde(deserialize_with = "deserialize_color_field")]
    directory: Color,
    #[serde(deserialize_with = "deserialize_color_field")]
    symlink: Color,
    #[serde(deserialize_with = "deserialize_color_field")]
    file: Color,
    #[serde(deserialize_with = "deserialize_color_field")]
    notice: Color,
    #[serde(deserialize_with = "deserialize_color_field")]
    error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            directory: AQUA,
            symlink: PINK,
            file: GOLD,
            notice: GOLD,
            error: CRIMSON,
        }
    }
}

impl Theme {
    /// Name color for an entry of the given kind.
    pub fn entry_color(&self, kind: EntryKind) -> Color {
        match kind {
            EntryKind::Directory => self.directory,
            EntryKind::Symlink => self.symlink,
            EntryKind::Other => self.file,
        }
    }

    #[inline]
    pub fn notice(&self) -> Color {
        self.notice
    }

    #[inline]
    pub fn error(&self) -> Color {
        self.error
    }
}

fn deserialize_color_field<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(parse_color(&s))
}
