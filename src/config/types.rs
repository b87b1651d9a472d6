use crate::api::Credentials;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("settings file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings format error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Main application configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SliverhandConfig {
    /// Base URL of the project API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Per-request timeout for API calls
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default)]
    pub credentials: Credentials,
    #[serde(default)]
    pub fullscreen: bool,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for SliverhandConfig {
    fn default() -> Self {
        SliverhandConfig {
            api_base_url: default_api_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            credentials: Credentials::default(),
            fullscreen: false,
        }
    }
}

impl SliverhandConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    /// Apply overrides from the environment (SLIVERHAND_API_URL, SLIVERHAND_API_KEY)
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(
            std::env::var("SLIVERHAND_API_URL").ok(),
            std::env::var("SLIVERHAND_API_KEY").ok(),
        );
    }

    /// Blank values are ignored
    pub fn apply_overrides(&mut self, api_url: Option<String>, api_key: Option<String>) {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            self.api_base_url = url.trim().to_string();
        }
        if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
            self.credentials.api_key = key.trim().to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_take_defaults() {
        let config: SliverhandConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SliverhandConfig::default());
        assert_eq!(config.api_base_url, "http://localhost:8000");
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_zero_timeout_is_clamped() {
        let config = SliverhandConfig {
            request_timeout_secs: 0,
            ..SliverhandConfig::default()
        };
        assert_eq!(config.request_timeout(), Duration::from_secs(1));
    }

    #[test]
    fn test_apply_overrides() {
        let mut config = SliverhandConfig::default();
        config.apply_overrides(
            Some(" https://api.example.com ".to_string()),
            Some("  ".to_string()),
        );
        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.credentials.api_key, "");

        config.apply_overrides(None, Some("secret".to_string()));
        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.credentials.api_key, "secret");
    }
}
