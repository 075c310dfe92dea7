//! Configuration errors, reported before the terminal is taken over.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("API base URL is empty")]
    EmptyBaseUrl,

    #[error("API base URL must start with http:// or https://, got '{0}'")]
    UnsupportedScheme(String),

    #[error("invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("could not build HTTP client: {0}")]
    HttpClient(String),
}
