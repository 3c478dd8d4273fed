//! Editor configuration loaded from an optional JSON file
//!
//! Every field falls back to the values in [`crate::constants`], so a partial
//! file only overrides what it names.

use crate::constants::{self, panel, window};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "BLOCKWIRE_CONFIG";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Grid dropped blocks snap to
    pub grid_size: f32,
    /// Labels offered in the palette, top to bottom
    pub palette_labels: Vec<String>,
    /// Initial inner window size
    pub window_size: [f32; 2],
    /// Font file used for the block labels; system CJK fonts are tried when unset
    pub font_path: Option<PathBuf>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            grid_size: constants::DEFAULT_GRID_SIZE,
            palette_labels: (1..=panel::DEFAULT_PALETTE_BLOCKS)
                .map(|i| format!("方塊 {}", i))
                .collect(),
            window_size: window::DEFAULT_SIZE,
            font_path: None,
        }
    }
}

impl EditorConfig {
    /// Default location: `<config_dir>/blockwire/config.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("blockwire").join("config.json"))
    }

    /// Reads and parses a config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(config.sanitized())
    }

    /// Loads the config from `$BLOCKWIRE_CONFIG` or the default location.
    ///
    /// A missing file yields defaults; an unreadable or malformed one is logged
    /// and also yields defaults.
    pub fn load() -> Self {
        let path = std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .or_else(Self::default_path);
        match path {
            Some(path) => Self::load_or_default(&path),
            None => Self::default(),
        }
    }

    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::from_file(path) {
            Ok(config) => {
                info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                warn!("{}; using defaults", e);
                Self::default()
            }
        }
    }

    fn sanitized(mut self) -> Self {
        if !(self.grid_size.is_finite() && self.grid_size > 0.0) {
            warn!("Ignoring invalid grid size {}", self.grid_size);
            self.grid_size = constants::DEFAULT_GRID_SIZE;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.grid_size, 20.0);
        assert_eq!(config.palette_labels, vec!["方塊 1", "方塊 2", "方塊 3"]);
        assert_eq!(config.window_size, [800.0, 600.0]);
        assert!(config.font_path.is_none());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let file = write_config(r#"{ "grid_size": 10.0, "palette_labels": ["A", "B"] }"#);
        let config = EditorConfig::from_file(file.path()).unwrap();
        assert_eq!(config.grid_size, 10.0);
        assert_eq!(config.palette_labels, vec!["A", "B"]);
        assert_eq!(config.window_size, [800.0, 600.0]);
    }

    #[test]
    fn test_invalid_grid_falls_back() {
        let file = write_config(r#"{ "grid_size": -5.0 }"#);
        let config = EditorConfig::from_file(file.path()).unwrap();
        assert_eq!(config.grid_size, 20.0);
    }

    #[test]
    fn test_malformed_file() {
        let file = write_config("{ not json");
        assert!(matches!(
            EditorConfig::from_file(file.path()),
            Err(ConfigError::Parse { .. })
        ));
        assert_eq!(EditorConfig::load_or_default(file.path()), EditorConfig::default());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        assert!(matches!(EditorConfig::from_file(&path), Err(ConfigError::Read { .. })));
        assert_eq!(EditorConfig::load_or_default(&path), EditorConfig::default());
    }
}
