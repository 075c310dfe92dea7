//! Error types for gimme.
//!
//! | Type | Raised by | Shown as |
//! |------|-----------|----------|
//! | [`FetchError`] | resource clients and the fetch sequence | a fallback line under the failed list |
//! | [`ConfigError`] | configuration and argument parsing | a message on stderr before startup |
//!
//! Transport failures from the [`HttpClient`](crate::traits::HttpClient) seam
//! arrive as [`HttpError`](crate::traits::HttpError) and are wrapped in
//! [`FetchError::Network`].

mod config;
mod fetch;

pub use config::ConfigError;
pub use fetch::FetchError;

/// Result type for fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;
