//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP read operations used by the resource clients

pub mod http;

pub use http::{Headers, HttpClient, HttpError, Response};
