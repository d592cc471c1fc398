//! Helpers for fie.
//!
//! Provides utility functions:
//! - Color parsing from names or hex codes
//! - Locating and expanding the home directory

use crossterm::style::Color;
use std::path::PathBuf;

/// Parses a string (color name or hex) into a crossterm::style::Color
///
/// Supports standard terminal names (red, green, etc.), a few named web colors,
/// and hex values (#RRGGBB or #RGB). Anything unrecognized is `Color::Reset`.
pub fn parse_color(s: &str) -> Color {
    match s.to_lowercase().as_str() {
        "default" | "reset" => Color::Reset,
        "yellow" => Color::Yellow,
        "red" => Color::Red,
        "blue" => Color::Blue,
        "green" => Color::Green,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "black" => Color::Black,
        "gray" | "grey" => Color::Grey,
        "darkgray" | "darkgrey" => Color::DarkGrey,
        "aqua" => rgb(0x00ffff),
        "pink" => rgb(0xffc0cb),
        "gold" => rgb(0xffd700),
        "crimson" => rgb(0xdc143c),
        _ => {
            if let Some(color) = s.strip_prefix('#') {
                match color.len() {
                    6 => {
                        if let Ok(value) = u32::from_str_radix(color, 16) {
                            return rgb(value);
                        }
                    }
                    3 => {
                        let expanded = color
                            .chars()
                            .map(|c| format!("{}{}", c, c))
                            .collect::<String>();
                        if let Ok(value) = u32::from_str_radix(&expanded, 16) {
                            return rgb(value);
                        }
                    }
                    _ => {}
                }
            }
            // fallback
            Color::Reset
        }
    }
}

fn rgb(value: u32) -> Color {
    Color::Rgb {
        r: ((value >> 16) & 0xFF) as u8,
        g: ((value >> 8) & 0xFF) as u8,
        b: (value & 0xFF) as u8,
    }
}

pub fn get_home() -> Option<PathBuf> {
    dirs::home_dir()
}

/// Expands a leading `~` to the home directory. Other paths are returned unchanged.
pub fn expand_home_path(path: &str) -> PathBuf {
    if path == "~" {
        if let Some(home) = get_home() {
            return home;
        }
    } else if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = get_home()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}
