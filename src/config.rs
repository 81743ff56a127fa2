//! Configuration handling for the TUI

use crate::state::{Theme, ThemeStore};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration persisted between sessions
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SiteConfig {
    /// Theme preference, "light" or "dark"
    pub theme: Option<String>,

    /// Keys this version does not know about, written back untouched
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl SiteConfig {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("br.com", "drfher", "clinica-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from a file, defaulting when it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: SiteConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Stored theme, ignoring unknown values
    pub fn theme(&self) -> Option<Theme> {
        self.theme.as_deref().and_then(Theme::parse)
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = Some(theme.as_str().to_string());
    }
}

/// Theme store backed by the config file
#[derive(Debug, Clone)]
pub struct ConfigThemeStore {
    path: PathBuf,
}

impl ConfigThemeStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ThemeStore for ConfigThemeStore {
    fn load(&self) -> Option<Theme> {
        match SiteConfig::load_from(&self.path) {
            Ok(config) => config.theme(),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), "unreadable config: {err:#}");
                None
            }
        }
    }

    fn save(&mut self, theme: Theme) -> Result<()> {
        // Other keys in the file survive the rewrite
        let mut config = SiteConfig::load_from(&self.path).unwrap_or_default();
        config.set_theme(theme);
        config.save_to(&self.path)?;
        tracing::debug!(theme = theme.as_str(), "theme saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert!(config.theme.is_none());
        assert!(config.theme().is_none());
    }

    #[test]
    fn test_serialization() {
        let mut config = SiteConfig::default();
        config.set_theme(Theme::Light);

        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"theme":"light"}"#);

        let parsed: SiteConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.theme(), Some(Theme::Light));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: SiteConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.theme().is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        let json = r#"{"theme": "dark", "unknown_field": "value"}"#;
        let parsed: SiteConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.theme(), Some(Theme::Dark));
        assert_eq!(parsed.extra["unknown_field"], "value");
        assert!(!parsed.extra.contains_key("theme"));
    }

    #[test]
    fn test_unknown_theme_value_is_unset() {
        let parsed: SiteConfig = serde_json::from_str(r#"{"theme": "sepia"}"#).unwrap();
        assert!(parsed.theme().is_none());
    }

    #[test]
    fn test_config_path_returns_option() {
        // Just test that the function doesn't panic
        let _path = SiteConfig::config_path();
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let dir = TempDir::new().unwrap();
        let config = SiteConfig::load_from(&dir.path().join("config.json")).unwrap();
        assert!(config.theme.is_none());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let mut config = SiteConfig::default();
        config.set_theme(Theme::Dark);
        config.save_to(&path).unwrap();

        let loaded = SiteConfig::load_from(&path).unwrap();
        assert_eq!(loaded.theme(), Some(Theme::Dark));
    }

    #[test]
    fn test_load_rejects_garbage() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();
        assert!(SiteConfig::load_from(&path).is_err());
    }

    mod theme_store {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_store_loads_nothing() {
            let dir = TempDir::new().unwrap();
            let store = ConfigThemeStore::new(dir.path().join("config.json"));
            assert_eq!(store.load(), None);
        }

        #[test]
        fn test_save_persists_key() {
            let dir = TempDir::new().unwrap();
            let path = dir.path().join("config.json");
            let mut store = ConfigThemeStore::new(path.clone());

            store.save(Theme::Light).unwrap();

            assert_eq!(store.load(), Some(Theme::Light));
            let raw = fs::read_to_string(&path).unwrap();
            assert!(raw.contains(r#""theme": "light""#));
        }

        #[test]
        fn test_garbage_file_loads_nothing_and_is_replaced_on_save() {
            let dir = TempDir::new().unwrap();
            let path = dir.path().join("config.json");
            fs::write(&path, "{{{").unwrap();
            let mut store = ConfigThemeStore::new(path);

            assert_eq!(store.load(), None);
            store.save(Theme::Dark).unwrap();
            assert_eq!(store.load(), Some(Theme::Dark));
        }

        #[test]
        fn test_save_keeps_unknown_keys() {
            let dir = TempDir::new().unwrap();
            let path = dir.path().join("config.json");
            fs::write(&path, r#"{"theme":"dark","other":1}"#).unwrap();
            let mut store = ConfigThemeStore::new(path.clone());

            store.save(Theme::Light).unwrap();

            let raw: serde_json::Value =
                serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
            assert_eq!(raw["theme"], "light");
            assert_eq!(raw["other"], 1);
        }
    }
}
