//! Client configuration.
//!
//! The API base URL and request settings are resolved once at startup and
//! passed explicitly into [`CatalogClient`](crate::catalog::CatalogClient).
//!
//! # Example
//!
//! ```
//! use gimme::config::{ClientConfig, FetchMode};
//!
//! let config = ClientConfig::default()
//!     .with_api_base("http://api.example.com/")
//!     .with_fetch_mode(FetchMode::Parallel);
//! assert_eq!(config.base_url(), "http://api.example.com");
//! ```

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigError;

/// Base URL used when neither `--api-base` nor `GIMME_API_BASE` is set.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Request timeout used when `GIMME_TIMEOUT_SECS` is not set.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub const ENV_API_BASE: &str = "GIMME_API_BASE";
pub const ENV_TIMEOUT_SECS: &str = "GIMME_TIMEOUT_SECS";
pub const ENV_FETCH_MODE: &str = "GIMME_FETCH_MODE";

/// Order in which the two collections are requested on mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchMode {
    /// Categories first, then items. A categories failure skips items.
    #[default]
    Sequential,
    /// Both requests in flight at once; each outcome is independent.
    Parallel,
}

impl FromStr for FetchMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(FetchMode::Sequential),
            "parallel" => Ok(FetchMode::Parallel),
            _ => Err(ConfigError::InvalidValue {
                key: ENV_FETCH_MODE,
                value: s.to_string(),
                reason: "expected 'sequential' or 'parallel'",
            }),
        }
    }
}

impl fmt::Display for FetchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchMode::Sequential => f.write_str("sequential"),
            FetchMode::Parallel => f.write_str("parallel"),
        }
    }
}

/// Settings for the catalog resource clients.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL of the API, e.g. `http://localhost:8000`
    pub api_base: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Ordering of the initial fetch
    pub fetch_mode: FetchMode,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: DEFAULT_TIMEOUT,
            fetch_mode: FetchMode::Sequential,
        }
    }
}

impl ClientConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self::default().with_api_base(api_base)
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_fetch_mode(mut self, fetch_mode: FetchMode) -> Self {
        self.fetch_mode = fetch_mode;
        self
    }

    /// Base URL without trailing slashes, so that joining `/{resource}/`
    /// yields exactly one separator.
    pub fn base_url(&self) -> &str {
        self.api_base.trim().trim_end_matches('/')
    }

    /// Check the base URL before any request is attempted.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = self.base_url();
        if base.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ConfigError::UnsupportedScheme(base.to_string()));
        }
        Ok(())
    }

    /// Resolve configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration from an arbitrary key lookup.
    ///
    /// Unset or blank variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(api_base) = get(ENV_API_BASE) {
            config.api_base = api_base.trim().to_string();
        }

        if let Some(raw) = get(ENV_TIMEOUT_SECS) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidValue {
                    key: ENV_TIMEOUT_SECS,
                    value: raw.clone(),
                    reason: "expected a positive number of seconds",
                })?;
            config.timeout = Duration::from_secs(secs);
        }

        if let Some(raw) = get(ENV_FETCH_MODE) {
            config.fetch_mode = raw.parse()?;
        }

        Ok(config)
    }
}
