//! Configuration for the monkey CLI.
//!
//! Settings are loaded from `monkey.toml` if one is found in the current
//! directory or the user's config directory; otherwise the defaults apply.

use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{MonkeyError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "monkey.toml";

/// Application configuration for the REPL and runner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Prompt string shown before each line the REPL reads.
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Path to the REPL's persistent line-history file, if any.
    #[serde(default)]
    pub history_file: Option<PathBuf>,
}

fn default_prompt() -> String {
    ">> ".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            prompt: default_prompt(),
            history_file: default_history_file(),
        }
    }
}

fn default_history_file() -> Option<PathBuf> {
    dirs::home_dir().map(|dir| dir.join(".monkey_history"))
}

impl Config {
    /// Load configuration from the default location, falling back to
    /// defaults if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(MonkeyError::Config(format!(
                "configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| MonkeyError::Config(format!("failed to parse configuration: {e}")))
    }

    /// Check for config in the current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in the system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("monkey").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config().or_else(Self::check_system_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_has_a_prompt() {
        let config = Config::default();
        assert_eq!(config.prompt, ">> ");
        assert!(!config.verbose);
    }

    #[test]
    fn load_from_path_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("monkey.toml");
        std::fs::write(&config_path, "verbose = true\nprompt = \"monkey> \"\n").unwrap();

        let config = Config::load_from_path(&config_path).unwrap();
        assert!(config.verbose);
        assert_eq!(config.prompt, "monkey> ");
    }

    #[test]
    fn load_from_nonexistent_path_is_an_error() {
        let result = Config::load_from_path(Path::new("/nonexistent/path/monkey.toml"));
        assert!(result.is_err());
    }
}
