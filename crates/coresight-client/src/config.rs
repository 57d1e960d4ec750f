use std::fmt;
use std::path::Path;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use url::Url;

use crate::error::{CoresightError, Result};

/// Environment variable holding the API base URL
pub const BASE_URL_ENV: &str = "CORESIGHT_BASE_URL";

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "CORESIGHT_API_KEY";

/// Connection settings shared by every request
///
/// Immutable once built. The base URL is stored without trailing slashes so
/// request paths can be appended directly.
#[derive(Clone)]
pub struct ClientConfig {
    base_url: String,
    api_key: Option<SecretString>,
}

/// On-disk shape of a config file
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    base_url: String,
    #[serde(default)]
    api_key: Option<SecretString>,
}

impl ClientConfig {
    /// Build a configuration from a base URL and optional API key
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not an absolute URL
    pub fn new(base_url: &str, api_key: Option<String>) -> Result<Self> {
        Self::with_secret(base_url, api_key.map(SecretString::from))
    }

    fn with_secret(base_url: &str, api_key: Option<SecretString>) -> Result<Self> {
        let trimmed = base_url.trim_end_matches('/');

        Url::parse(trimmed)
            .map_err(|e| CoresightError::Config(format!("invalid base URL `{base_url}`: {e}")))?;

        Ok(Self {
            base_url: trimmed.to_owned(),
            api_key,
        })
    }

    /// Read `CORESIGHT_BASE_URL` and `CORESIGHT_API_KEY`
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL variable is unset or invalid
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var(BASE_URL_ENV)
            .map_err(|_| CoresightError::Config(format!("{BASE_URL_ENV} is not set")))?;
        let api_key = std::env::var(API_KEY_ENV).ok();

        Self::new(&base_url, api_key)
    }

    /// Load configuration from a TOML file
    ///
    /// `{{ env.VAR }}` placeholders are expanded before parsing.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, a placeholder cannot be
    /// resolved, the TOML is malformed, or the base URL is invalid
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            CoresightError::Config(format!("failed to read config file {}: {e}", path.display()))
        })?;

        let expanded = crate::env::expand_env(&raw)?;

        let file: ConfigFile = toml::from_str(&expanded)
            .map_err(|e| CoresightError::Config(format!("failed to parse {}: {e}", path.display())))?;

        Self::with_secret(&file.base_url, file.api_key)
    }

    /// Base URL without trailing slashes
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// API key, if one was configured and it is not empty
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_ref()
            .map(|key| key.expose_secret())
            .filter(|key| !key.is_empty())
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key().is_some()
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
