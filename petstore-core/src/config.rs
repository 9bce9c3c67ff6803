//! Client configuration

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ConfigError;

/// Environment variable overriding the API base URL
pub const BASE_URL_ENV: &str = "PETSTORE_API_URL";

const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Settings of the HTTP gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// Origin the `/api/...` endpoints are resolved against
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Apply `PETSTORE_API_URL` when it is set and non-empty
    #[must_use]
    pub fn with_env_override(mut self) -> Self {
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            if !url.trim().is_empty() {
                log::debug!("Using {BASE_URL_ENV}={url}");
                self.base_url = url;
            }
        }
        self
    }

    /// Parse and check the base URL
    pub fn parsed_base_url(&self) -> Result<Url, ConfigError> {
        let url = Url::parse(&self.base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason: e.to_string(),
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ConfigError::InvalidBaseUrl {
                url: self.base_url.clone(),
                reason: format!("unsupported scheme '{other}'"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_localhost() {
        let config = ClientConfig::default();
        let url = config.parsed_base_url().unwrap();
        assert_eq!(url.host_str(), Some("localhost"));
        assert_eq!(url.port(), Some(8080));
    }

    #[test]
    fn missing_field_uses_default() {
        let config: ClientConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn reads_camel_case_field() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"baseUrl":"https://pets.example.com"}"#).unwrap();
        assert_eq!(config.base_url, "https://pets.example.com");
    }

    #[test]
    fn rejects_relative_url() {
        let config = ClientConfig::new("/api");
        assert!(matches!(
            config.parsed_base_url(),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn rejects_non_http_scheme() {
        let config = ClientConfig::new("ftp://pets.example.com");
        let err = config.parsed_base_url().unwrap_err();
        assert!(err.to_string().contains("unsupported scheme 'ftp'"));
    }
}
