//! Error types for the posts API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the post does not exist" from "the server returned an unexpected status."
//! All other non-2xx responses land in `Http` with the raw status code and
//! body for debugging. `Transport` covers failures before a response exists
//! at all — DNS, refused connections, the host's `fetch` rejecting.

use std::fmt;

/// Errors returned by `PostClient` build/parse methods and `Transport`
/// implementations.
#[derive(Debug)]
pub enum ApiError {
    /// The request never produced a response (connection or host failure).
    Transport(String),

    /// The server returned 404 — the requested post does not exist.
    NotFound,

    /// The server returned a non-2xx status other than 404.
    Http { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    Serialization(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "transport failed: {msg}"),
            ApiError::NotFound => write!(f, "post not found"),
            ApiError::Http { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::Deserialization(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::Serialization(msg) => {
                write!(f, "serialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Errors from loading or saving the persisted configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Reading or writing the config file failed.
    Io(std::io::Error),

    /// The config file exists but is not valid JSON.
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O failed: {e}"),
            ConfigError::Parse(msg) => write!(f, "config parse failed: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
