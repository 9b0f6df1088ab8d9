//! Board Configuration
//!
//! Defaults, overlaid by `board-config.json` in the app config dir, overlaid
//! by `PSB_*` environment variables.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

pub const CONFIG_FILE_NAME: &str = "board-config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// GraphQL admin endpoint
    pub api_url: String,
    /// Base of the web admin, used for "open in product detail"
    pub admin_ui_url: String,
    /// Passed through as a bearer token; no login flow lives here
    pub auth_token: Option<String>,
    pub channel_token: Option<String>,
    pub request_timeout_secs: u64,
    pub low_stock_threshold: u64,
    pub default_per_page: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:3000/admin-api".to_string(),
            admin_ui_url: "http://localhost:3000/dashboard".to_string(),
            auth_token: None,
            channel_token: None,
            request_timeout_secs: 30,
            low_stock_threshold: 10,
            default_per_page: 24,
        }
    }
}

/// Subset of the config the frontend needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSettings {
    pub low_stock_threshold: u64,
    pub default_per_page: u32,
}

impl BoardConfig {
    /// Load from `config_dir` and the process environment
    pub fn load(config_dir: &Path) -> DomainResult<Self> {
        let path = config_dir.join(CONFIG_FILE_NAME);
        let file_contents = match std::fs::read_to_string(&path) {
            Ok(contents) => Some(contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                return Err(DomainError::Config(format!(
                    "cannot read {}: {}",
                    path.display(),
                    e
                )))
            }
        };
        Self::from_sources(file_contents.as_deref(), |key| std::env::var(key).ok())
    }

    pub fn from_sources<F>(file_contents: Option<&str>, env: F) -> DomainResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match file_contents {
            Some(contents) => serde_json::from_str(contents).map_err(|e| {
                DomainError::Config(format!("invalid {}: {}", CONFIG_FILE_NAME, e))
            })?,
            None => Self::default(),
        };

        if let Some(v) = env("PSB_API_URL") {
            config.api_url = v;
        }
        if let Some(v) = env("PSB_ADMIN_UI_URL") {
            config.admin_ui_url = v;
        }
        if let Some(v) = env("PSB_AUTH_TOKEN") {
            config.auth_token = Some(v);
        }
        if let Some(v) = env("PSB_CHANNEL_TOKEN") {
            config.channel_token = Some(v);
        }
        if let Some(v) = env("PSB_REQUEST_TIMEOUT_SECS") {
            config.request_timeout_secs = parse_number("PSB_REQUEST_TIMEOUT_SECS", &v)?;
        }
        if let Some(v) = env("PSB_LOW_STOCK_THRESHOLD") {
            config.low_stock_threshold = parse_number("PSB_LOW_STOCK_THRESHOLD", &v)?;
        }
        if let Some(v) = env("PSB_DEFAULT_PER_PAGE") {
            config.default_per_page = parse_number("PSB_DEFAULT_PER_PAGE", &v)?;
        }

        if config.default_per_page == 0 {
            return Err(DomainError::Config("default_per_page must be positive".to_string()));
        }
        if config.api_url.is_empty() {
            return Err(DomainError::Config("api_url is empty".to_string()));
        }
        Ok(config)
    }

    pub fn settings(&self) -> BoardSettings {
        BoardSettings {
            low_stock_threshold: self.low_stock_threshold,
            default_per_page: self.default_per_page,
        }
    }

    /// Admin web page of a single product
    pub fn product_detail_url(&self, product_id: &str) -> DomainResult<reqwest::Url> {
        let mut url = reqwest::Url::parse(self.admin_ui_url.trim_end_matches('/'))
            .map_err(|e| DomainError::Config(format!("invalid admin_ui_url: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| DomainError::Config("admin_ui_url cannot be a base".to_string()))?
            .pop_if_empty()
            .push("products")
            .push(product_id);
        Ok(url)
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> DomainResult<T> {
    value
        .trim()
        .parse()
        .map_err(|_| DomainError::Config(format!("invalid {} value '{}'", key, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_file_or_env() {
        let config = BoardConfig::from_sources(None, env_from(&[])).unwrap();
        assert_eq!(config, BoardConfig::default());
        assert_eq!(config.settings().low_stock_threshold, 10);
        assert_eq!(config.settings().default_per_page, 24);
    }

    #[test]
    fn test_env_overrides_file() {
        let file = r#"{ "api_url": "https://shop.example.com/admin-api", "low_stock_threshold": 5 }"#;
        let config = BoardConfig::from_sources(
            Some(file),
            env_from(&[("PSB_LOW_STOCK_THRESHOLD", "7"), ("PSB_AUTH_TOKEN", "secret")]),
        )
        .unwrap();
        assert_eq!(config.api_url, "https://shop.example.com/admin-api");
        assert_eq!(config.low_stock_threshold, 7);
        assert_eq!(config.auth_token.as_deref(), Some("secret"));
        assert_eq!(config.default_per_page, 24);
    }

    #[test]
    fn test_invalid_values_are_config_errors() {
        let bad_number =
            BoardConfig::from_sources(None, env_from(&[("PSB_DEFAULT_PER_PAGE", "many")]));
        assert!(matches!(bad_number, Err(DomainError::Config(_))));

        let zero_page = BoardConfig::from_sources(None, env_from(&[("PSB_DEFAULT_PER_PAGE", "0")]));
        assert!(matches!(zero_page, Err(DomainError::Config(_))));

        let bad_file = BoardConfig::from_sources(Some("{ not json"), env_from(&[]));
        assert!(matches!(bad_file, Err(DomainError::Config(_))));
    }

    #[test]
    fn test_product_detail_url() {
        let config = BoardConfig {
            admin_ui_url: "https://shop.example.com/dashboard/".to_string(),
            ..BoardConfig::default()
        };
        let url = config.product_detail_url("42").unwrap();
        assert_eq!(url.as_str(), "https://shop.example.com/dashboard/products/42");
    }

    #[test]
    fn test_load_reads_file_from_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), r#"{ "request_timeout_secs": 5 }"#).unwrap();

        let config = BoardConfig::load(dir.path()).unwrap();
        assert_eq!(config.request_timeout_secs, 5);
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = BoardConfig::load(dir.path()).unwrap();
        assert_eq!(config.default_per_page, 24);
    }

    #[test]
    fn test_detail_url_on_bare_host() {
        let config = BoardConfig {
            admin_ui_url: "https://shop.example.com".to_string(),
            ..BoardConfig::default()
        };
        let url = config.product_detail_url("7").unwrap();
        assert_eq!(url.as_str(), "https://shop.example.com/products/7");
    }
}
