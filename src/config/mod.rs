use crate::constants::{api, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod user_prompts;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use user_prompts::prompt_for_api_key;
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// RapidAPI key sent in the `x-rapidapi-key` header. Supplied by the
    /// user; never embedded in source.
    pub api_key: String,
    /// Value for the `x-rapidapi-host` header.
    #[serde(default = "default_api_host")]
    pub api_host: String,
    /// Base URL of the statistics service. Should include https:// prefix.
    #[serde(default = "default_api_domain")]
    pub api_domain: String,
    /// Path to the log file. If not specified, logs are written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests. Defaults to 30 seconds.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
}

fn default_api_host() -> String {
    api::DEFAULT_API_HOST.to_string()
}

fn default_api_domain() -> String {
    api::DEFAULT_API_DOMAIN.to_string()
}

/// Default HTTP timeout in seconds
fn default_http_timeout() -> u64 {
    crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_key: String::new(),
            api_host: default_api_host(),
            api_domain: default_api_domain(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// If no config file exists, prompts the user for an API key and creates one.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `COURTSIDE_API_KEY` - Override API key
    /// - `COURTSIDE_API_HOST` - Override API host header
    /// - `COURTSIDE_API_DOMAIN` - Override API domain
    /// - `COURTSIDE_LOG_FILE` - Override log file path
    /// - `COURTSIDE_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            let content = fs::read_to_string(&config_path).await?;
            toml::from_str(&content)?
        } else if let Ok(api_key) = std::env::var(env_vars::API_KEY) {
            Config {
                api_key,
                ..Config::default()
            }
        } else {
            let api_key = prompt_for_api_key().await?;

            let config = Config {
                api_key,
                ..Config::default()
            };

            config.save().await?;
            config
        };

        // Override with environment variables if present
        if let Ok(api_key) = std::env::var(env_vars::API_KEY) {
            config.api_key = api_key;
        }

        if let Ok(api_host) = std::env::var(env_vars::API_HOST) {
            config.api_host = api_host;
        }

        if let Ok(api_domain) = std::env::var(env_vars::API_DOMAIN) {
            config.api_domain = api_domain;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            config.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            config.http_timeout_seconds = timeout;
        }

        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            &self.api_key,
            &self.api_host,
            &self.api_domain,
            &self.log_file_path,
        )
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// The API key itself is masked; only its length is revealed.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if Path::new(&config_path).exists() {
            let config = Config::load().await?;
            println!("\nCurrent Configuration");
            println!("────────────────────────────────────");
            println!("Config Location:");
            println!("{config_path}");
            println!("────────────────────────────────────");
            println!("API Key:");
            println!("{} characters (hidden)", config.api_key.len());
            println!("────────────────────────────────────");
            println!("API Domain:");
            println!("{}", config.api_domain);
            println!("────────────────────────────────────");
            println!("HTTP Timeout:");
            println!("{} seconds", config.http_timeout_seconds);
            println!("────────────────────────────────────");
            println!("Log File Location:");
            if let Some(custom_path) = &config.log_file_path {
                println!("{custom_path}");
            } else {
                println!("{log_dir}/courtside.log");
                println!("(Default location)");
            }
        } else {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist and ensures the API
    /// domain has the https:// prefix.
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let api_domain = if !self.api_domain.starts_with("https://") {
            format!("https://{}", self.api_domain.trim_start_matches("http://"))
        } else {
            self.api_domain.clone()
        };
        let content = toml::to_string_pretty(&Config {
            api_key: self.api_key.clone(),
            api_host: self.api_host.clone(),
            api_domain,
            log_file_path: self.log_file_path.clone(),
            http_timeout_seconds: self.http_timeout_seconds,
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path (for testing).
    #[allow(dead_code)] // Used in tests
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_config_save_and_load_roundtrip() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_str().unwrap();

        let config = Config {
            api_key: "test-key".to_string(),
            api_host: "api.example.com".to_string(),
            api_domain: "https://api.example.com".to_string(),
            log_file_path: Some("/tmp/courtside-test.log".to_string()),
            http_timeout_seconds: 10,
        };
        config.save_to_path(config_path_str).await.unwrap();

        let loaded = Config::load_from_path(config_path_str).await.unwrap();
        assert_eq!(loaded.api_key, "test-key");
        assert_eq!(loaded.api_host, "api.example.com");
        assert_eq!(loaded.api_domain, "https://api.example.com");
        assert_eq!(loaded.http_timeout_seconds, 10);
    }

    #[tokio::test]
    async fn test_save_adds_https_prefix() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_str().unwrap();

        let config = Config {
            api_key: "test-key".to_string(),
            api_domain: "api.example.com".to_string(),
            ..Config::default()
        };
        config.save_to_path(config_path_str).await.unwrap();

        let loaded = Config::load_from_path(config_path_str).await.unwrap();
        assert_eq!(loaded.api_domain, "https://api.example.com");
    }

    #[tokio::test]
    async fn test_missing_fields_take_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "api_key = \"abc\"\n")
            .await
            .unwrap();

        let loaded = Config::load_from_path(config_path.to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(loaded.api_key, "abc");
        assert_eq!(loaded.api_host, api::DEFAULT_API_HOST);
        assert_eq!(loaded.api_domain, api::DEFAULT_API_DOMAIN);
        assert_eq!(
            loaded.http_timeout_seconds,
            crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS
        );
    }

    #[tokio::test]
    async fn test_invalid_toml_is_rejected() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "api_key = [not valid")
            .await
            .unwrap();

        let result = Config::load_from_path(config_path.to_str().unwrap()).await;
        assert!(matches!(result, Err(AppError::TomlDeserialize(_))));
    }
}
