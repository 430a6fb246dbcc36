//! Storefront configuration.
//!
//! Read from `shoepro.toml` in the data directory, then overridden by
//! environment variables:
//!
//! | Variable | Field |
//! |---|---|
//! | `SHOEPRO_BACKEND_URL` | `backend.url` |
//! | `SHOEPRO_BACKEND_KEY` | `backend.anon_key` |
//! | `SHOEPRO_LOG` | `log_level` |
//!
//! A backend is only configured when both URL and key are known; without
//! one the bundled demo catalog is served.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{StoreError, StoreResult};

pub const CONFIG_FILE_NAME: &str = "shoepro.toml";

pub const ENV_BACKEND_URL: &str = "SHOEPRO_BACKEND_URL";
pub const ENV_BACKEND_KEY: &str = "SHOEPRO_BACKEND_KEY";
pub const ENV_LOG: &str = "SHOEPRO_LOG";

/// Default data directory (`<platform data dir>/shoepro`).
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("shoepro")
}

/// Log verbosity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(StoreError::Config(format!("unknown log level '{other}'"))),
        }
    }
}

/// Hosted catalog backend connection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Project URL, e.g. `https://xyz.supabase.co`
    pub url: String,
    /// Public anon key
    pub anon_key: String,
}

/// Effective storefront configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: Option<BackendConfig>,

    #[serde(default)]
    pub log_level: LogLevel,

    /// Prefix used when formatting prices
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Order subtotal from which shipping is free
    #[serde(default = "default_free_shipping_threshold")]
    pub free_shipping_threshold: u64,
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

const fn default_free_shipping_threshold() -> u64 {
    150_000
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: None,
            log_level: LogLevel::default(),
            currency_symbol: default_currency_symbol(),
            free_shipping_threshold: default_free_shipping_threshold(),
        }
    }
}

impl StoreConfig {
    /// Load `shoepro.toml` from `data_dir` and apply environment overrides.
    ///
    /// A missing file yields the defaults.
    pub fn load(data_dir: &Path) -> StoreResult<Self> {
        let mut config = Self::from_file(&data_dir.join(CONFIG_FILE_NAME))?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> StoreResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> StoreResult<Self> {
        toml::from_str(contents).map_err(|e| StoreError::Config(e.to_string()))
    }

    pub fn to_toml(&self) -> StoreResult<String> {
        toml::to_string_pretty(self).map_err(|e| StoreError::Config(e.to_string()))
    }

    /// Apply overrides from a variable lookup (the process environment in
    /// production).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> StoreResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup(ENV_BACKEND_URL).filter(|v| !v.trim().is_empty());
        let key = lookup(ENV_BACKEND_KEY).filter(|v| !v.trim().is_empty());

        match (url, key, self.backend.as_mut()) {
            (Some(url), Some(anon_key), _) => {
                self.backend = Some(BackendConfig { url, anon_key });
            }
            (Some(url), None, Some(backend)) => backend.url = url,
            (None, Some(anon_key), Some(backend)) => backend.anon_key = anon_key,
            (Some(_), None, None) | (None, Some(_), None) => {
                debug!("Partial backend override ignored, both URL and key are required");
            }
            (None, None, _) => {}
        }

        if let Some(level) = lookup(ENV_LOG) {
            self.log_level = level.parse()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert!(config.backend.is_none());
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.free_shipping_threshold, 150_000);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_parse_toml() {
        let config = StoreConfig::from_toml(
            r#"
            log_level = "debug"
            free_shipping_threshold = 200000

            [backend]
            url = "https://shop.example"
            anon_key = "key"
            "#,
        )
        .unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.free_shipping_threshold, 200_000);
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.backend.unwrap().url, "https://shop.example");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = StoreConfig::from_toml("log_level = [").unwrap_err();
        assert!(matches!(err, StoreError::Config(_)));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = StoreConfig::from_file(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn test_env_overrides_backend() {
        let mut config = StoreConfig::default();
        config
            .apply_overrides(env(&[
                (ENV_BACKEND_URL, "https://env.example"),
                (ENV_BACKEND_KEY, "env-key"),
                (ENV_LOG, "warn"),
            ]))
            .unwrap();
        let backend = config.backend.unwrap();
        assert_eq!(backend.url, "https://env.example");
        assert_eq!(backend.anon_key, "env-key");
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_partial_env_override_without_backend_is_ignored() {
        let mut config = StoreConfig::default();
        config
            .apply_overrides(env(&[(ENV_BACKEND_URL, "https://env.example")]))
            .unwrap();
        assert!(config.backend.is_none());
    }

    #[test]
    fn test_partial_env_override_updates_existing_backend() {
        let mut config = StoreConfig {
            backend: Some(BackendConfig {
                url: "https://file.example".to_string(),
                anon_key: "file-key".to_string(),
            }),
            ..StoreConfig::default()
        };
        config
            .apply_overrides(env(&[(ENV_BACKEND_KEY, "rotated")]))
            .unwrap();
        let backend = config.backend.unwrap();
        assert_eq!(backend.url, "https://file.example");
        assert_eq!(backend.anon_key, "rotated");
    }

    #[test]
    fn test_bad_log_level() {
        let mut config = StoreConfig::default();
        assert!(config.apply_overrides(env(&[(ENV_LOG, "loud")])).is_err());
    }

    #[test]
    fn test_toml_roundtrip_keeps_backend() {
        let config = StoreConfig {
            backend: Some(BackendConfig {
                url: "https://shop.example".to_string(),
                anon_key: "k".to_string(),
            }),
            ..StoreConfig::default()
        };
        let text = config.to_toml().unwrap();
        assert_eq!(StoreConfig::from_toml(&text).unwrap(), config);
    }
}
