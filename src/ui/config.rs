//! # Configuration
//!
//! User configuration stored in `~/.config/mrk-picker/config.json`.
//!
//! ```json
//! {
//!   "theme": "Nord",
//!   "descriptions": {
//!     "my-internal-tool": "Deploy helper for the platform team"
//!   }
//! }
//! ```
//!
//! `descriptions` is layered over the built-in description table, so it can
//! both describe packages the picker does not know and reword existing ones.
//! The `directories` crate resolves the platform config directory.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::ui::theme::Theme;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Name of a built-in theme.
    #[serde(default = "default_theme_name")]
    pub theme: String,

    /// Extra or replacement package descriptions.
    #[serde(default)]
    pub descriptions: HashMap<String, String>,
}

fn default_theme_name() -> String {
    Theme::default_theme().name.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme_name(),
            descriptions: HashMap::new(),
        }
    }
}

impl Config {
    /// Load from `path`, or from the platform config file when `None`.
    /// Falls back to defaults when the file is unreadable or malformed.
    pub fn load(path: Option<&Path>) -> Self {
        let result = match path {
            Some(path) => Self::load_from(path),
            None => Self::config_path().and_then(|path| Self::load_from(&path)),
        };
        result.unwrap_or_else(|e| {
            log::warn!("using default configuration: {e:#}");
            Self::default()
        })
    }

    /// Load configuration from a specific path. Returns `Config::default()` if
    /// the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no config file at {}", path.display());
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Resolve the theme to use. `requested` (from `--theme`) wins over the
    /// configured name; unknown names fall back to the default theme.
    pub fn resolve_theme(&self, requested: Option<&str>) -> &'static Theme {
        let name = requested.unwrap_or(self.theme.as_str());
        Theme::by_name(name).unwrap_or_else(|| {
            log::warn!(
                "unknown theme {name:?}, using {}",
                Theme::default_theme().name
            );
            Theme::default_theme()
        })
    }

    fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "mrk-picker")
            .context("Could not determine config directory")?;
        Ok(dirs.config_dir().join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme, "Catppuccin Mocha");
        assert!(config.descriptions.is_empty());
    }

    #[test]
    fn test_deserialize_missing_fields_uses_defaults() {
        let config: Config = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(config.theme, "Catppuccin Mocha");
        assert!(config.descriptions.is_empty());
    }

    #[test]
    fn test_deny_unknown_fields() {
        let json = r#"{"theme": "Nord", "unknown_field": true}"#;
        let result: Result<Config, _> = serde_json::from_str(json);
        assert!(result.is_err(), "should reject unknown fields");
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let config_path = temp_dir.path().join("config.json");
        fs::write(
            &config_path,
            r#"{"theme": "Dracula", "descriptions": {"my-tool": "Internal helper"}}"#,
        )
        .expect("write");

        let loaded = Config::load_from(&config_path).expect("load_from");
        assert_eq!(loaded.theme, "Dracula");
        assert_eq!(
            loaded.descriptions.get("my-tool").map(String::as_str),
            Some("Internal helper")
        );
    }

    #[test]
    fn test_load_from_missing_file_returns_default() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let config_path = temp_dir.path().join("does_not_exist.json");

        let loaded = Config::load_from(&config_path).expect("load_from");
        assert_eq!(loaded.theme, "Catppuccin Mocha");
    }

    #[test]
    fn test_load_malformed_falls_back_to_default() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let config_path = temp_dir.path().join("config.json");
        fs::write(&config_path, "{ not json").expect("write");

        assert!(Config::load_from(&config_path).is_err());
        let loaded = Config::load(Some(&config_path));
        assert_eq!(loaded.theme, "Catppuccin Mocha");
    }

    #[test]
    fn test_resolve_theme_precedence() {
        let config = Config {
            theme: "Nord".to_string(),
            ..Default::default()
        };
        assert_eq!(config.resolve_theme(None).name, "Nord");
        assert_eq!(config.resolve_theme(Some("classic")).name, "Classic");
        assert_eq!(
            config.resolve_theme(Some("no-such-theme")).name,
            "Catppuccin Mocha"
        );
    }
}
