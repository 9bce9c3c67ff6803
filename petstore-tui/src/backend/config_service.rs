//! Config service

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use petstore_core::ClientConfig;
use serde::{Deserialize, Serialize};

use crate::view::theme::Theme;

const APP_DIR: &str = "petstore";
const CONFIG_FILE: &str = "config.json";

/// Application config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// HTTP gateway settings
    pub client: ClientConfig,
    /// Where log files are written
    pub log_dir: PathBuf,
    pub theme: Theme,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            client: ClientConfig::default(),
            log_dir: default_log_dir(),
            theme: Theme::default(),
        }
    }
}

fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR)
        .join("logs")
}

/// Config service trait
pub trait ConfigService: Send + Sync {
    /// Load config, falling back to defaults when none is stored
    fn load(&self) -> Result<AppConfig>;

    /// Persist config
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// Config stored as JSON under the user's config directory
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    /// `<config dir>/petstore/config.json`
    pub fn new() -> Self {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::with_path(base.join(APP_DIR).join(CONFIG_FILE))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            log::info!("No config at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("invalid config in {}", self.path.display()))?;
        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, content)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let service = LocalConfigService::with_path(dir.path().join("config.json"));

        assert_eq!(service.load().unwrap(), AppConfig::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let service = LocalConfigService::with_path(dir.path().join("nested").join("config.json"));
        let config = AppConfig {
            client: ClientConfig::new("https://petstore.example.com"),
            log_dir: dir.path().join("logs"),
            theme: Theme::Light,
        };

        service.save(&config).unwrap();

        assert_eq!(service.load().unwrap(), config);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "client": { "baseUrl": "http://10.0.0.5:9000" } }"#).unwrap();

        let config = LocalConfigService::with_path(path).load().unwrap();

        assert_eq!(config.client.base_url, "http://10.0.0.5:9000");
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.log_dir, default_log_dir());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();

        let err = LocalConfigService::with_path(&path).load().unwrap_err();
        assert!(err.to_string().contains("invalid config"));
    }
}
