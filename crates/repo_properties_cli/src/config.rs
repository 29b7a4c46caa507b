//! Configuration management for the repo-props CLI.
//!
//! The configuration is stored in TOML format. It is optional: when no file is
//! given and none exists in the current directory, the defaults target
//! api.github.com with token authentication.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::Error;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "repo-props.toml";

/// Environment variable holding the personal access token
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// Default timeout for a single GitHub request
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Main configuration structure for the repo-props CLI.
///
/// # Example TOML Configuration
///
/// ```toml
/// api_url = "https://github.example.com/api/v3"
/// timeout_secs = 10
///
/// [authentication]
/// auth_method = "app"
/// app_id = 123456
/// private_key_path = "/etc/repo-props/app.pem"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// GitHub API root. `None` uses api.github.com.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// Timeout applied to each GitHub request, in seconds.
    #[serde(default = "AppConfig::default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default)]
    pub authentication: AuthenticationConfig,
}

impl AppConfig {
    fn default_timeout_secs() -> u64 {
        DEFAULT_TIMEOUT_SECS
    }

    /// Loads configuration from a TOML file at the specified path.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the file does not exist, cannot be read or
    /// contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, Error> {
        debug!("Loading configuration from {:?}", path);

        if !path.exists() {
            return Err(Error::Config(format!(
                "Configuration file not found: {:?}",
                path
            )));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read configuration file: {}", e)))?;

        let config: AppConfig = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse configuration file: {}", e)))?;

        info!(path = ?path, "Loaded configuration");
        Ok(config)
    }

    /// Loads the configuration the CLI runs with.
    ///
    /// An explicitly given path must exist. Without one, the default file in the
    /// current directory is used when present, otherwise the defaults.
    pub fn resolve(config_path: Option<&str>) -> Result<Self, Error> {
        let path = get_config_path(config_path);
        if config_path.is_none() && !path.exists() {
            debug!("No configuration file found, using defaults");
            return Ok(Self::default());
        }

        Self::load(&path)
    }

    /// The per-request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            authentication: AuthenticationConfig::default(),
        }
    }
}

/// How the CLI authenticates with GitHub.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMethod {
    /// Personal access token read from `GITHUB_TOKEN`
    #[default]
    Token,
    /// GitHub App installation for the repository owner
    App,
}

/// Configuration for CLI authentication settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthenticationConfig {
    #[serde(default)]
    pub auth_method: AuthMethod,

    /// GitHub App ID, required for `app` authentication
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<u64>,

    /// Path to the GitHub App private key (PEM), required for `app` authentication
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_key_path: Option<PathBuf>,
}

/// Resolves the path to the configuration file.
///
/// - If `config_path` is `Some(path)`, returns that path as a `PathBuf`
/// - If `config_path` is `None`, returns `./repo-props.toml` in the current directory
pub fn get_config_path(config_path: Option<&str>) -> PathBuf {
    if let Some(path) = config_path {
        PathBuf::from(path)
    } else {
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        current_dir.join(DEFAULT_CONFIG_FILENAME)
    }
}

/// Reads the personal access token through `lookup`, usually `std::env::var`.
///
/// # Errors
///
/// Returns `Error::Auth` if the variable is unset or blank.
pub fn resolve_token<F>(lookup: F) -> Result<String, Error>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(TOKEN_ENV_VAR)
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| Error::Auth(format!("{TOKEN_ENV_VAR} is not set")))
}
