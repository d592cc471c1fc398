//! The main config loading module for fie.
//!
//! Handles locating and deserializing `fie.toml` into [Config], and writing a
//! default file for `fie --init`.
//!
//! A missing or broken config file never stops a listing: fie falls back to the
//! internal defaults.

use crate::config::{General, Theme};
use crate::error::{FieError, Result};
use crate::utils::{expand_home_path, get_home};

use serde::Deserialize;

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration struct for fie, as read from `fie.toml`.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    general: General,
    theme: Theme,
}

const DEFAULT_TOML: &str = r##"# fie.toml - default configuration for fie

[general]
# Print the underlined column header above the listing
header = true
# Show symlinks as "name -> target"
symlink_target = false
# "auto", "always", or "never". "auto" honors NO_COLOR.
color = "auto"

# Colors are names ("cyan", "darkgray"), hex codes ("#RRGGBB"), or "default" for none.
[theme]
directory = "#00ffff"
symlink = "#ffc0cb"
file = "#ffd700"
notice = "#ffd700"
error = "#dc143c"
"##;

impl Config {
    /// Load configuration from the default path.
    ///
    /// Called by the entry point to load config at startup.
    pub fn load() -> Self {
        Self::load_from(&Self::default_path())
    }

    /// Load configuration from `path`.
    /// If the file does not exist or fails to parse, returns the default configuration.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match Self::from_toml(&content) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("error parsing {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("cannot read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    // Getters

    #[inline]
    pub fn general(&self) -> &General {
        &self.general
    }

    #[inline]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Determine the default configuration file path.
    /// Checks the FIE_CONFIG environment variable first,
    /// Checks for XDG_CONFIG_HOME after,
    /// then defaults to ~/.config/fie/fie.toml,
    pub fn default_path() -> PathBuf {
        config_path_from(
            std::env::var("FIE_CONFIG").ok(),
            std::env::var_os("XDG_CONFIG_HOME"),
            get_home(),
        )
    }

    /// Generate a default configuration file at the specified path.
    /// If the file already exists, returns an error.
    pub fn generate_default(path: &Path) -> Result<()> {
        if path.exists() {
            return Err(FieError::ConfigExists {
                path: path.to_path_buf(),
            });
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_TOML)?;
        Ok(())
    }
}

/// Picks the config path from the environment values. Empty values are unset, and a
/// relative `XDG_CONFIG_HOME` is ignored as the XDG base directory rules require.
fn config_path_from(
    fie_config: Option<String>,
    xdg_config: Option<OsString>,
    home: Option<PathBuf>,
) -> PathBuf {
    if let Some(path) = fie_config.filter(|p| !p.is_empty()) {
        return expand_home_path(&path);
    }

    if let Some(xdg) = xdg_config.map(PathBuf::from).filter(|p| p.is_absolute()) {
        return xdg.join("fie/fie.toml");
    }

    if let Some(home) = home {
        return home.join(".config/fie/fie.toml");
    }
    PathBuf::from("fie.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ColorChoice;
    use crate::core::EntryKind;
    use crossterm::style::Color;
    use tempfile::tempdir;

    #[test]
    fn missing_file_gives_defaults() {
        let config = Config::load_from(Path::new("/path/does/not/exist/fie.toml"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn invalid_file_gives_defaults() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("fie.toml");
        fs::write(&path, "[general\nheader = ")?;
        assert_eq!(Config::load_from(&path), Config::default());
        Ok(())
    }

    #[test]
    fn reads_both_tables() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("fie.toml");
        fs::write(
            &path,
            r#"
            [general]
            header = false
            color = "always"

            [theme]
            directory = "red"
            "#,
        )?;

        let config = Config::load_from(&path);
        assert!(!config.general().header());
        assert_eq!(config.general().color(), ColorChoice::Always);
        assert_eq!(config.theme().entry_color(EntryKind::Directory), Color::Red);
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn config_path_precedence() {
        let home = Some(PathBuf::from("/home/user"));
        assert_eq!(
            config_path_from(Some("/etc/fie.toml".into()), Some("/xdg".into()), home.clone()),
            PathBuf::from("/etc/fie.toml")
        );
        assert_eq!(
            config_path_from(None, Some("/xdg".into()), home.clone()),
            PathBuf::from("/xdg/fie/fie.toml")
        );
        assert_eq!(
            config_path_from(None, None, home),
            PathBuf::from("/home/user/.config/fie/fie.toml")
        );
        assert_eq!(config_path_from(None, None, None), PathBuf::from("fie.toml"));
    }

    #[cfg(unix)]
    #[test]
    fn empty_or_relative_xdg_is_ignored() {
        let home = Some(PathBuf::from("/home/user"));
        let fallback = PathBuf::from("/home/user/.config/fie/fie.toml");
        assert_eq!(config_path_from(None, Some("".into()), home.clone()), fallback);
        assert_eq!(config_path_from(None, Some("relative/dir".into()), home.clone()), fallback);
        assert_eq!(config_path_from(Some(String::new()), None, home), fallback);
    }

    #[test]
    fn generated_default_matches_internal_defaults() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("nested/fie.toml");

        Config::generate_default(&path)?;
        assert_eq!(Config::load_from(&path), Config::default());

        let again = Config::generate_default(&path);
        assert!(matches!(again, Err(FieError::ConfigExists { .. })));
        Ok(())
    }
}
