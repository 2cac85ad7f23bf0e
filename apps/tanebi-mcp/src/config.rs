//! # Configuration
//!
//! Read once at startup from the process environment:
//! - `TANEBI_API_KEY`: required API key, sent as `X-API-Key`
//! - `TANEBI_API_BASE_URL`: optional API origin (default: `https://tanebi.app`)

use thiserror::Error;

/// Origin used when `TANEBI_API_BASE_URL` is unset.
pub const DEFAULT_BASE_URL: &str = "https://tanebi.app";

const API_KEY_VAR: &str = "TANEBI_API_KEY";
const BASE_URL_VAR: &str = "TANEBI_API_BASE_URL";

/// Startup configuration errors. All of them are fatal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("TANEBI_API_KEY environment variable is required")]
    MissingApiKey,
}

/// Immutable process configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
}

impl Config {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load using an arbitrary variable lookup.
    ///
    /// A blank API key counts as missing. A blank base URL falls back to
    /// the default. Trailing slashes are stripped from the base URL.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let base_url = lookup(BASE_URL_VAR)
            .map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self { api_key, base_url })
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}
