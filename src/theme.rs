//! Light/dark theme preference.

use crate::storage::{KeyValueStore, StorageError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};

/// Storage key holding `"dark"` or `"light"`.
pub const THEME_KEY: &str = "calculatorTheme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Read the saved theme. Missing or unknown values fall back to dark.
    pub fn load<S: KeyValueStore>(storage: &S) -> Result<Self, StorageError> {
        let theme = storage
            .get(THEME_KEY)?
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or_default();
        debug!(theme = %theme, "loaded theme");
        Ok(theme)
    }

    pub fn save<S: KeyValueStore>(self, storage: &mut S) -> Result<(), StorageError> {
        info!(theme = %self, "saving theme");
        storage.set(THEME_KEY, self.as_str())
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(format!("unknown theme: {}", other)),
        }
    }
}
