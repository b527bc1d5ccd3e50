//! Top-level application configuration.
//!
//! Configuration is stored in `config.yaml` inside the platform config
//! directory (or `$CENSO_CONFIG_DIR`) and includes:
//! - Base address of the census data service
//! - Request timeout
//! - Page size used by every paginated view

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CensoError, Result};

pub const CONFIG_DIR_ENV: &str = "CENSO_CONFIG_DIR";
pub const API_URL_ENV: &str = "CENSO_API_URL";

const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Valid keys for `config get` / `config set`
pub const CONFIG_KEYS: &[&str] = &["api_url", "timeout", "page_size"];

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the data service (default: http://localhost:8000)
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Rows per page (default: 10)
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_page_size() -> u32 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout: default_timeout(),
            page_size: default_page_size(),
        }
    }
}

impl Config {
    /// Directory holding `config.yaml`
    pub fn config_dir() -> PathBuf {
        if let Ok(dir) = env::var(CONFIG_DIR_ENV)
            && !dir.is_empty()
        {
            return PathBuf::from(dir);
        }

        directories::ProjectDirs::from("br", "censo", "censo")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from(".censo"))
    }

    /// Get the path to the config file
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from file, or return default if not found
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(CensoError::Config(
                "page_size must be greater than zero".to_string(),
            ));
        }
        if self.timeout == 0 {
            return Err(CensoError::Config(
                "timeout must be greater than zero".to_string(),
            ));
        }
        url::Url::parse(&self.api_url)?;
        Ok(())
    }

    /// Service base URL from environment variable or config file
    pub fn api_url(&self) -> String {
        // First check environment variable
        if let Ok(url) = env::var(API_URL_ENV)
            && !url.is_empty()
        {
            return url;
        }

        // Fall back to config file
        self.api_url.clone()
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "api_url" => Ok(self.api_url.clone()),
            "timeout" => Ok(self.timeout.to_string()),
            "page_size" => Ok(self.page_size.to_string()),
            _ => Err(unknown_key(key)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api_url" => {
                url::Url::parse(value)?;
                self.api_url = value.to_string();
            }
            "timeout" => {
                self.timeout = parse_positive(key, value)?;
            }
            "page_size" => {
                self.page_size = parse_positive(key, value)?;
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn parse_positive<N>(key: &str, value: &str) -> Result<N>
where
    N: std::str::FromStr + Default + PartialEq,
{
    match value.parse::<N>() {
        Ok(n) if n != N::default() => Ok(n),
        _ => Err(CensoError::Config(format!(
            "invalid value '{value}' for {key}. Expected a positive whole number"
        ))),
    }
}

fn unknown_key(key: &str) -> CensoError {
    CensoError::Config(format!(
        "unknown config key '{key}'. Valid keys: {}",
        CONFIG_KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.api_url, "http://localhost:8000");
        assert_eq!(config.timeout, 30);
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.yaml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "page_size: 25\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.page_size, 25);
        assert_eq!(config.timeout, 30);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "page_size: 0\n").unwrap();
        assert!(matches!(Config::load_from(&path), Err(CensoError::Config(_))));
    }

    #[test]
    fn test_save_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.yaml");
        let mut config = Config::default();
        config.set("api_url", "http://censo.example.org/api").unwrap();
        config.set("page_size", "20").unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = Config::default();
        assert!(config.set("page_size", "0").is_err());
        assert!(config.set("timeout", "-5").is_err());
        assert!(config.set("api_url", "not a url").is_err());
        assert!(matches!(
            config.set("token", "x"),
            Err(CensoError::Config(m)) if m.contains("Valid keys")
        ));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_get_values() {
        let config = Config::default();
        assert_eq!(config.get("timeout").unwrap(), "30");
        assert!(config.get("unknown").is_err());
    }

    #[test]
    #[serial]
    fn test_env_overrides_api_url() {
        let config = Config::default();
        // SAFETY: serialized with the other env-mutating tests
        unsafe { env::set_var(API_URL_ENV, "http://10.0.0.5:8000") };
        assert_eq!(config.api_url(), "http://10.0.0.5:8000");
        unsafe { env::remove_var(API_URL_ENV) };
        assert_eq!(config.api_url(), "http://localhost:8000");
    }

    #[test]
    #[serial]
    fn test_config_dir_env_override() {
        let dir = TempDir::new().unwrap();
        // SAFETY: serialized with the other env-mutating tests
        unsafe { env::set_var(CONFIG_DIR_ENV, dir.path()) };
        assert_eq!(Config::config_path(), dir.path().join("config.yaml"));
        unsafe { env::remove_var(CONFIG_DIR_ENV) };
    }
}
