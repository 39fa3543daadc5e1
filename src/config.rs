//! User configuration loaded from a TOML file.

use crate::calculator::AngleMode;
use crate::history::DEFAULT_HISTORY_LIMIT;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

const APP_DIR: &str = "calcmaster";
const CONFIG_FILE: &str = "config.toml";

/// Settings read from `config.toml`. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where history and theme are stored.
    pub data_dir: Option<PathBuf>,
    /// Angle unit for trigonometric functions at startup.
    pub angle_mode: AngleMode,
    /// Start with the scientific panel open.
    pub scientific: bool,
    /// Maximum number of history entries kept, at most 100.
    pub history_limit: usize,
    /// Use ANSI colors when rendering.
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            angle_mode: AngleMode::Radians,
            scientific: false,
            history_limit: DEFAULT_HISTORY_LIMIT,
            color: true,
        }
    }
}

impl Config {
    /// Default config file location, e.g. `~/.config/calcmaster/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load from `path`, or from the default location when `None`.
    ///
    /// A missing file is not an error and yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path.map(Path::to_path_buf).or_else(Self::default_path) {
            Some(path) => path,
            None => return Ok(Self::default()),
        };

        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn parse(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        debug!(?config, "parsed config");
        Ok(config)
    }

    /// Directory for persisted state, e.g. `~/.local/share/calcmaster`.
    pub fn resolved_data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .context("No data directory available. Set data_dir in the config file.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config = Config::parse("angle_mode = \"degrees\"\nscientific = true\n").unwrap();
        assert_eq!(config.angle_mode, AngleMode::Degrees);
        assert!(config.scientific);
        assert_eq!(config.history_limit, 100);
        assert!(config.color);
        assert_eq!(config.data_dir, None);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "data_dir = \"/tmp/calc\"\nhistory_limit = 10\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.history_limit, 10);
        assert_eq!(config.resolved_data_dir().unwrap(), PathBuf::from("/tmp/calc"));
    }

    #[test]
    fn test_invalid_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "angle_mode = \"gradians\"\n").unwrap();
        assert!(Config::load(Some(&path)).is_err());
    }
}
