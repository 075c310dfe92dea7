//! Errors produced while fetching a catalog collection.

use thiserror::Error;

use crate::traits::HttpError;

/// Why a collection could not be shown.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// The request could not complete (connect, timeout, I/O).
    #[error("request for {resource} failed: {source}")]
    Network {
        resource: &'static str,
        #[source]
        source: HttpError,
    },

    /// The server answered with a non-success status.
    #[error("server returned HTTP {status} for {resource}")]
    Status {
        resource: &'static str,
        status: u16,
        message: String,
    },

    /// The body did not match the record schema.
    #[error("unexpected {resource} payload: {message}")]
    Decode {
        resource: &'static str,
        message: String,
    },

    /// Not requested because an earlier fetch in the sequence failed.
    #[error("{resource} not requested because {after} failed to load")]
    Skipped {
        resource: &'static str,
        after: &'static str,
    },
}

impl FetchError {
    /// The collection this error belongs to.
    pub fn resource(&self) -> &'static str {
        match self {
            FetchError::Network { resource, .. }
            | FetchError::Status { resource, .. }
            | FetchError::Decode { resource, .. }
            | FetchError::Skipped { resource, .. } => resource,
        }
    }

    /// Network errors and error statuses, the transport-level failures.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, FetchError::Network { .. } | FetchError::Status { .. })
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, FetchError::Decode { .. })
    }

    /// Short reason shown next to a failed list.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Network { source, .. } => match source {
                HttpError::Timeout(_) => "the server did not answer in time".to_string(),
                HttpError::ConnectionFailed(_) => "could not connect to the server".to_string(),
                HttpError::InvalidUrl(_) => "the API address is invalid".to_string(),
                other => other.to_string(),
            },
            FetchError::Status { status, .. } => match *status {
                404 => "HTTP 404, endpoint not found".to_string(),
                500..=599 => format!("HTTP {}, server error", status),
                _ => format!("HTTP {}", status),
            },
            FetchError::Decode { message, .. } => format!("unexpected response ({})", message),
            FetchError::Skipped { after, .. } => format!("not requested, {} failed", after),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            FetchError::Network { .. } => "E_FETCH_NET",
            FetchError::Status { .. } => "E_FETCH_HTTP",
            FetchError::Decode { .. } => "E_FETCH_DECODE",
            FetchError::Skipped { .. } => "E_FETCH_SKIPPED",
        }
    }
}
