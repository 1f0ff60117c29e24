//! User configuration file handling
//!
//! Manages settings from ~/.config/mtex/settings.json

use crate::core::cli::{OracleKind, DEFAULT_OUT_DIR, DEFAULT_PYTHON, DEFAULT_TESTDATA_DIR};
use crate::logging;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// User configuration from ~/.config/mtex/settings.json
///
/// These settings override built-in defaults but are overridden by CLI arguments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    pub oracle: Option<OracleKind>,
    pub python: Option<String>,
    pub out_dir: Option<PathBuf>,
    pub testdata_dir: Option<PathBuf>,
}

impl ConfigFile {
    /// Get the path to the mtex config directory
    pub fn config_dir() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")));
        config_dir.join("mtex")
    }

    /// Get the path to the user config file
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("settings.json")
    }

    /// Load configuration from the user config file
    pub fn load() -> Option<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }

        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    debug!("Loaded user settings from {:?}", path);
                    Some(config)
                }
                Err(e) => {
                    warn!("Failed to parse settings.json: {}", e);
                    None
                }
            },
            Err(e) => {
                warn!("Failed to read settings.json: {}", e);
                None
            }
        }
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;

        debug!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Every setting at its built-in default.
    pub fn with_defaults() -> Self {
        Self {
            oracle: Some(OracleKind::default()),
            python: Some(DEFAULT_PYTHON.to_string()),
            out_dir: Some(PathBuf::from(DEFAULT_OUT_DIR)),
            testdata_dir: Some(PathBuf::from(DEFAULT_TESTDATA_DIR)),
        }
    }

    /// Initialize the complete user configuration directory
    ///
    /// This creates:
    /// 1. The ~/.config/mtex directory structure
    /// 2. A settings.json file with default values
    /// 3. The logs/ directory used by --log-file
    pub fn initialize_config_directory() -> anyhow::Result<()> {
        let config_dir = Self::config_dir();
        fs::create_dir_all(&config_dir)?;
        println!("Created config directory: {:?}", config_dir);

        let logs_dir = logging::logs_dir();
        fs::create_dir_all(&logs_dir)?;
        println!("Created logs directory: {:?}", logs_dir);

        let settings_path = Self::config_path();
        if !settings_path.exists() {
            Self::with_defaults().save_to(&settings_path)?;
            println!("Created settings file: {:?}", settings_path);
        } else {
            println!("Settings file already exists: {:?}", settings_path);
        }

        println!("\nConfiguration initialized successfully!");
        println!("  - Edit settings at: {:?}", settings_path);
        println!("  - View logs written with --log-file in: {:?}", logs_dir);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mtex").join("settings.json");

        let config = ConfigFile::with_defaults();
        config.save_to(&path).unwrap();
        assert_eq!(ConfigFile::load_from(&path), Some(config));

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"oracle\": \"font\""));
    }

    #[test]
    fn test_partial_and_broken_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        fs::write(&path, r#"{"oracle": "matplotlib"}"#).unwrap();
        let config = ConfigFile::load_from(&path).unwrap();
        assert_eq!(config.oracle, Some(OracleKind::Matplotlib));
        assert_eq!(config.python, None);

        fs::write(&path, "{ not json").unwrap();
        assert_eq!(ConfigFile::load_from(&path), None);
        assert_eq!(ConfigFile::load_from(&dir.path().join("absent.json")), None);
    }
}
