// ABOUTME: Persisted user preferences: theme and reduced-motion, as a TOML
// file in the platform config directory

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// The only theme value ever written; absence of the key means light.
pub const THEME_DARK: &str = "dark";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("could not determine a config directory for this platform")]
    NoConfigDir,
}

/// User preferences. All fields have defaults so a partial or missing file
/// is never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `"dark"` or absent (absent means light).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    /// Collapse animations to their end states.
    pub reduced_motion: bool,
}

impl Config {
    pub fn prefers_dark(&self) -> bool {
        self.theme.as_deref() == Some(THEME_DARK)
    }

    pub fn set_theme_dark(&mut self, dark: bool) {
        self.theme = dark.then(|| THEME_DARK.to_string());
    }

    /// Platform config file location, e.g. `~/.config/termfolio/config.toml`.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let dirs = ProjectDirs::from("", "", "termfolio").ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Load from `path`; a missing file yields defaults. An unreadable or
    /// malformed file is an error so a typo never silently wipes settings.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    /// Write to `path`, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let rendered = toml::to_string_pretty(self)?;
        std::fs::write(path, rendered)?;
        Ok(())
    }

    /// Save, logging instead of propagating; preference persistence must
    /// never take the UI down.
    pub fn save_or_warn(&self, path: &Path) {
        if let Err(e) = self.save(path) {
            warn!("failed to persist preferences to {}: {e}", path.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert!(!config.prefers_dark());
    }

    #[test]
    fn theme_round_trips_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.set_theme_dark(true);
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert!(loaded.prefers_dark());
    }

    #[test]
    fn light_theme_is_stored_as_absence() {
        let mut config = Config::default();
        config.set_theme_dark(true);
        config.set_theme_dark(false);

        let rendered = toml::to_string(&config).unwrap();
        assert!(!rendered.contains("theme"));
    }

    #[test]
    fn unknown_theme_string_reads_as_light() {
        let config: Config = toml::from_str(r#"theme = "solarized""#).unwrap();
        assert!(!config.prefers_dark());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "theme = [not toml").unwrap();
        assert!(Config::load(&path).is_err());
    }
}
