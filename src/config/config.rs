//! Per-user configuration file loading.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Per-user tool configuration.
///
/// Stored as a small JSON object at `~/.config/dict2anki/config.json`:
///
/// ```json
/// { "apiKey": "...", "deckName": "..." }
/// ```
///
/// Loaded once per run and never written back. A field absent from the file
/// loads as an empty string.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub api_key: String,   // Merriam-Webster API key
    pub deck_name: String, // Target Anki deck
}

impl Config {
    /// Get the default config file path (~/.config/dict2anki/config.json).
    ///
    /// # Errors
    /// Returns an error if the home directory cannot be determined.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".config").join("dict2anki").join("config.json"))
    }

    /// Load the configuration from the default path.
    ///
    /// # Errors
    /// Returns an error if the home directory cannot be determined, the file
    /// cannot be read, or the JSON cannot be decoded.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path()?)
    }

    /// Load the configuration from an explicit path.
    ///
    /// # Arguments
    /// * `path` - Location of the config file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or decoded.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to open config file {}", path.display()))?;

        let config: Config = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to decode config file {}", path.display()))?;

        debug!("Loaded config from {} (deck: {})", path.display(), config.deck_name);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_both_fields() {
        let file = write_config(r#"{"apiKey": "K", "deckName": "English"}"#);
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.api_key, "K");
        assert_eq!(config.deck_name, "English");
    }

    #[test]
    fn test_missing_field_defaults_to_empty() {
        let file = write_config(r#"{"apiKey": "K"}"#);
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.api_key, "K");
        assert_eq!(config.deck_name, "");
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let file = write_config("{not json");
        assert!(Config::load_from(file.path()).is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(Config::load_from(Path::new("/nonexistent/config.json")).is_err());
    }
}
